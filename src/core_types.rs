//! Defines core data structures shared by the normalize and merge stages.

use crate::constants::{FILE1_PRIORITY_OUTPUT, FILE2_PRIORITY_OUTPUT};
use std::path::{Path, PathBuf};

/// Selects which input file contributes the first line of every interleaved pair.
///
/// # Examples
///
/// ```
/// use linemerge::core_types::Priority;
/// use std::path::Path;
///
/// let (a, b) = (Path::new("a.txt"), Path::new("b.txt"));
/// assert_eq!(Priority::FirstFile.order(a, b), (a, b));
/// assert_eq!(Priority::SecondFile.order(a, b), (b, a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// (File1, File2): the first input leads each pair.
    FirstFile,
    /// (File2, File1): the second input leads each pair.
    SecondFile,
}

impl Priority {
    /// Both priorities, in the order the merges are produced.
    pub const ALL: [Priority; 2] = [Priority::FirstFile, Priority::SecondFile];

    /// Returns the `(primary, secondary)` pair for this priority.
    pub fn order<'a>(self, first: &'a Path, second: &'a Path) -> (&'a Path, &'a Path) {
        match self {
            Priority::FirstFile => (first, second),
            Priority::SecondFile => (second, first),
        }
    }

    /// The fixed file name of the merge produced with this priority.
    pub fn output_file_name(self) -> &'static str {
        match self {
            Priority::FirstFile => FILE1_PRIORITY_OUTPUT,
            Priority::SecondFile => FILE2_PRIORITY_OUTPUT,
        }
    }
}

/// Line counts from one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Physical lines read from the original file.
    pub lines_read: usize,
    /// Non-blank lines written back.
    pub lines_kept: usize,
}

impl NormalizeStats {
    /// Number of lines that were blank after trimming and got dropped.
    pub fn lines_dropped(&self) -> usize {
        self.lines_read - self.lines_kept
    }
}

/// Counts from one interleave pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterleaveStats {
    /// Content lines written from the primary source.
    pub primary_lines: usize,
    /// Content lines written from the secondary source.
    pub secondary_lines: usize,
    /// Pair-attempts performed. Each one ends with a blank separator line.
    pub steps: usize,
}

/// The result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both merges were written, in priority order.
    Completed {
        /// Paths of the merged outputs.
        outputs: Vec<PathBuf>,
    },
    /// The user declined to choose a file. Nothing was modified.
    Cancelled,
}
