//! Handles the two file stages of the `linemerge` pipeline.
//!
//! The normalizer strips blank lines from an input file in place; the
//! interleaver merges two normalized files, alternating one line from each.
//! Both work over the scoped [`LineSource`] / [`LineSink`] handles.

mod interleave;
pub(crate) mod lines;
mod normalize;

pub use interleave::{interleave, interleave_files};
pub use lines::{LineSink, LineSource};
pub use normalize::{collect_normalized, normalize_file, normalize_text, write_normalized};
