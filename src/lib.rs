//! `linemerge` is a library and command-line tool that strips blank lines from
//! two text files and interleaves them line by line.
//!
//! A run has two stages:
//! 1.  **Normalize**: each input file is rewritten in place with every line
//!     trimmed and blank lines removed.
//! 2.  **Interleave**: the two files are merged twice, once with each file
//!     contributing the first line of every pair. Each pair is followed by a
//!     blank separator line.
//!
//! The stages are available on their own through the [`processing`] module.
//!
//! # Example: Library Usage
//!
//! ```
//! use linemerge::processing::{interleave_files, normalize_file};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let file1 = temp_dir.path().join("file1.txt");
//! let file2 = temp_dir.path().join("file2.txt");
//! let merged = temp_dir.path().join("merged.txt");
//! fs::write(&file1, " a \n\nb\n").unwrap();
//! fs::write(&file2, "x\n").unwrap();
//!
//! normalize_file(&file1).unwrap();
//! normalize_file(&file2).unwrap();
//! interleave_files(&file1, &file2, &merged).unwrap();
//!
//! assert_eq!(fs::read_to_string(&merged).unwrap(), "a\nx\n\nb\n\n");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod prelude;
pub mod processing;
pub mod selection;

pub use config::{Config, ConfigBuilder};
pub use core_types::{InterleaveStats, NormalizeStats, Priority, RunOutcome};

use crate::constants::{FIRST_PROMPT_TITLE, SECOND_PROMPT_TITLE};
use crate::errors::{Error, Result};
use crate::processing::{interleave_files, normalize_file};
use crate::selection::{FilePicker, PickRequest, TEXT_FILES};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ordinal and prompt title of the two inputs, in selection order.
const INPUTS: [(&str, &str); 2] = [
    ("first", FIRST_PROMPT_TITLE),
    ("second", SECOND_PROMPT_TITLE),
];

fn say(status: &mut dyn Write, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(status, "{}", line).map_err(Error::Status)
}

/// Determines the two input files, prompting for any not preset in `config`.
///
/// Returns `Ok(None)` as soon as the user cancels a prompt; later prompts are
/// not shown.
pub fn select_inputs(
    config: &Config,
    picker: &mut dyn FilePicker,
    status: &mut dyn Write,
) -> Result<Option<(PathBuf, PathBuf)>> {
    let mut selected = Vec::with_capacity(INPUTS.len());
    for (index, &(ordinal, title)) in INPUTS.iter().enumerate() {
        let path = match config.preset_input(index) {
            Some(path) => path.to_path_buf(),
            None => {
                say(status, format_args!("Select the {} input file:", ordinal))?;
                let request = PickRequest {
                    title,
                    filter: &TEXT_FILES,
                };
                match picker.pick(&request)? {
                    Some(path) => path,
                    None => {
                        log::debug!("Selection of the {} input file was cancelled", ordinal);
                        say(status, format_args!("No input file selected."))?;
                        return Ok(None);
                    }
                }
            }
        };
        say(
            status,
            format_args!("Selected {} input file: {}", ordinal, path.display()),
        )?;
        selected.push(path);
    }
    let second = selected.pop();
    let first = selected.pop();
    Ok(first.zip(second))
}

/// Normalizes both inputs, then writes one merge per [`Priority`].
///
/// Status lines go to `status`. Any error stops the run immediately: a failed
/// normalization means no merge is written, a failed first merge means the
/// second is not attempted.
///
/// # Returns
/// The paths of the two merged outputs, in priority order.
pub fn merge_inputs(
    config: &Config,
    first: &Path,
    second: &Path,
    status: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    for path in [first, second] {
        normalize_file(path).map_err(|e| Error::Normalize {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
    }

    let mut outputs = Vec::with_capacity(Priority::ALL.len());
    for priority in Priority::ALL {
        let output = config.output_path(priority);
        let (primary, secondary) = priority.order(first, second);
        interleave_files(primary, secondary, &output).map_err(|e| Error::Merge {
            output: output.display().to_string(),
            source: Box::new(e),
        })?;
        say(
            status,
            format_args!("Files merged successfully into {}", output.display()),
        )?;
        outputs.push(output);
    }
    Ok(outputs)
}

/// Executes a complete run: select, normalize, interleave twice.
///
/// This mirrors the command-line behaviour. `picker` is only consulted for
/// inputs not preset in `config`.
///
/// # Returns
/// [`RunOutcome::Cancelled`] if the user declined a selection, in which case no
/// file was touched; otherwise [`RunOutcome::Completed`] with both outputs.
pub fn run(
    config: &Config,
    picker: &mut dyn FilePicker,
    status: &mut dyn Write,
) -> Result<RunOutcome> {
    let Some((first, second)) = select_inputs(config, picker, status)? else {
        return Ok(RunOutcome::Cancelled);
    };
    let outputs = merge_inputs(config, &first, &second, status)?;
    Ok(RunOutcome::Completed { outputs })
}
