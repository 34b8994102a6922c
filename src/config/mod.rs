//! Defines the `Config` struct used to drive a run.
//!
//! A `Config` is built either from the parsed command line (`TryFrom<Cli>`) or
//! programmatically through [`ConfigBuilder`].

use crate::core_types::Priority;
use std::path::{Path, PathBuf};

pub use builder::ConfigBuilder;
mod builder;
mod validation;

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First input file. `None` means it is asked for interactively.
    pub first_input: Option<PathBuf>,
    /// Second input file. `None` means it is asked for interactively.
    pub second_input: Option<PathBuf>,
    /// Directory receiving the two merged outputs. `None` means the current
    /// working directory.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Path of the merge written with the given priority.
    ///
    /// # Examples
    /// ```
    /// use linemerge::core_types::Priority;
    /// use linemerge::ConfigBuilder;
    /// use std::path::Path;
    ///
    /// let config = ConfigBuilder::new().build().unwrap();
    /// assert_eq!(
    ///     config.output_path(Priority::SecondFile),
    ///     Path::new("output_file2_priority.txt")
    /// );
    /// ```
    pub fn output_path(&self, priority: Priority) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(priority.output_file_name()),
            None => PathBuf::from(priority.output_file_name()),
        }
    }

    /// The preset input for the first (`index == 0`) or second file.
    pub(crate) fn preset_input(&self, index: usize) -> Option<&Path> {
        match index {
            0 => self.first_input.as_deref(),
            _ => self.second_input.as_deref(),
        }
    }

    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            first_input: None,
            second_input: None,
            output_dir: None,
        }
    }
}
