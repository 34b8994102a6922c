//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur while selecting, normalizing and merging files. Every I/O failure
//! carries the path it happened on and the primitive that failed.

use std::fmt;
use std::io;
use thiserror::Error;

/// The file primitive that failed in an [`Error::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    /// Opening an existing file for reading.
    Open,
    /// Reading a line from an open file.
    Read,
    /// Creating (or truncating) a file for writing.
    Create,
    /// Writing a line to an open file.
    Write,
    /// Flushing buffered output to disk.
    Flush,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            IoAction::Open => "open",
            IoAction::Read => "read",
            IoAction::Create => "create",
            IoAction::Write => "write to",
            IoAction::Flush => "flush",
        };
        f.write_str(verb)
    }
}

/// Application-specific errors used throughout `linemerge`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// A file primitive failed on a specific path.
    #[error("failed to {action} file {path}: {source}")]
    Io {
        /// Which primitive failed.
        action: IoAction,
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },

    // --- Stage Errors ---
    /// Normalizing one of the input files failed.
    #[error("Error processing file {path}: {source}")]
    Normalize {
        /// The input file being normalized.
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// Producing one of the merged outputs failed.
    #[error("Error combining files into {output}: {source}")]
    Merge {
        /// The output file being written.
        output: String,
        #[source]
        source: Box<Error>,
    },

    // --- Terminal Errors ---
    /// The file selection prompt could not be read or written.
    #[error("failed to read file selection: {0}")]
    Selection(#[source] io::Error),

    /// A status line could not be written.
    #[error("failed to write status output: {0}")]
    Status(#[source] io::Error),

    // --- Configuration Errors ---
    /// Invalid configuration settings.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A `Result` alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `action` - The primitive that failed.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(
    source: io::Error,
    action: IoAction,
    path: P,
) -> Error {
    Error::Io {
        action,
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = io_error_with_path(source_error, IoAction::Open, &path);

        match &err {
            Error::Io {
                action,
                path: error_path,
                source,
            } => {
                assert_eq!(*action, IoAction::Open);
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
        assert_eq!(
            err.to_string(),
            "failed to open file some/test/path.txt: File not found"
        );
    }

    #[test]
    fn test_io_action_verbs() {
        let denied = || io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let msg = io_error_with_path(denied(), IoAction::Write, "out.txt").to_string();
        assert_eq!(msg, "failed to write to file out.txt: Access denied");
        let msg = io_error_with_path(denied(), IoAction::Create, "out.txt").to_string();
        assert_eq!(msg, "failed to create file out.txt: Access denied");
    }

    #[test]
    fn test_stage_errors_wrap_cause() {
        let inner = io_error_with_path(
            io::Error::new(io::ErrorKind::NotFound, "missing"),
            IoAction::Open,
            "a.txt",
        );
        let err = Error::Normalize {
            path: "a.txt".to_string(),
            source: Box::new(inner),
        };
        assert_eq!(
            err.to_string(),
            "Error processing file a.txt: failed to open file a.txt: missing"
        );
        assert!(err.source().is_some());

        let merge = Error::Merge {
            output: "output_file1_priority.txt".to_string(),
            source: Box::new(Error::Config("boom".to_string())),
        };
        assert!(merge
            .to_string()
            .starts_with("Error combining files into output_file1_priority.txt"));
    }
}
