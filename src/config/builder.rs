// src/config/builder.rs

use super::{validation::validate, Config};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Builds a [`Config`] programmatically.
///
/// # Examples
/// ```
/// use linemerge::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .first_input("left.txt")
///     .second_input("right.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.first_input.as_deref(), Some(Path::new("left.txt")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    first_input: Option<PathBuf>,
    second_input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder with no preset inputs, writing to the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets the first input file, skipping its prompt.
    pub fn first_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.first_input = Some(path.into());
        self
    }

    /// Presets the second input file, skipping its prompt.
    pub fn second_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.second_input = Some(path.into());
        self
    }

    /// Sets the directory the merged outputs are written to.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Validates the settings and produces the `Config`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the output directory does not exist.
    pub fn build(self) -> Result<Config> {
        validate(
            self.first_input.as_deref(),
            self.second_input.as_deref(),
            self.output_dir.as_deref(),
        )?;
        log::debug!(
            "Config: first={:?} second={:?} output_dir={:?}",
            self.first_input,
            self.second_input,
            self.output_dir
        );
        Ok(Config {
            first_input: self.first_input,
            second_input: self.second_input,
            output_dir: self.output_dir,
        })
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let mut builder = ConfigBuilder::new();
        if let Some(dir) = cli.output_dir {
            builder = builder.output_dir(dir);
        }
        if let Some(first) = cli.first_input {
            builder = builder.first_input(first);
        }
        if let Some(second) = cli.second_input {
            builder = builder.second_input(second);
        }
        builder.build()
    }
}
