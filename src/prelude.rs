//! The `linemerge` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use linemerge::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let merged = normalize_text("  first\n\n second \n");
//! assert_eq!(merged, "first\nsecond\n");
//!
//! let config = ConfigBuilder::new().first_input("a.txt").build()?;
//! assert_eq!(config.output_path(Priority::FirstFile).to_str(), Some("output_file1_priority.txt"));
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{InterleaveStats, NormalizeStats, Priority, RunOutcome};
pub use crate::errors::{Error, IoAction, Result};
pub use crate::processing::{
    interleave, interleave_files, normalize_file, normalize_text, LineSink, LineSource,
};
pub use crate::selection::{FileFilter, FilePicker, PickRequest, TerminalPicker, TEXT_FILES};
pub use crate::{merge_inputs, run, select_inputs};
