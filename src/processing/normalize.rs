// src/processing/normalize.rs

use super::lines::{LineSink, LineSource};
use crate::core_types::NormalizeStats;
use crate::errors::Result;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::Path;

/// Trims a line, returning `None` if nothing but whitespace was left.
fn trimmed(line: &str) -> Option<&str> {
    let line = line.trim();
    (!line.is_empty()).then_some(line)
}

/// Trims every line and drops the blank ones, one `\n` after each survivor.
///
/// This is the in-memory form of [`normalize_file`]: the returned string is
/// exactly what would be written back to disk.
///
/// # Examples
/// ```
/// use linemerge::processing::normalize_text;
///
/// let text = "  Line 1 \n\n  \t  \r\nLine 4";
/// assert_eq!(normalize_text(text), "Line 1\nLine 4\n");
/// ```
pub fn normalize_text(content: &str) -> String {
    content.lines().filter_map(trimmed).fold(
        String::with_capacity(content.len()),
        |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        },
    )
}

/// Reads `source` to the end, keeping the trimmed non-blank lines in order.
pub fn collect_normalized<R: BufRead>(
    source: &mut LineSource<R>,
) -> Result<(Vec<String>, NormalizeStats)> {
    let mut kept = Vec::new();
    let mut stats = NormalizeStats::default();
    while let Some(line) = source.next_line()? {
        stats.lines_read += 1;
        if let Some(line) = trimmed(&line) {
            kept.push(line.to_string());
        }
    }
    stats.lines_kept = kept.len();
    Ok((kept, stats))
}

/// Writes the `lines` to `sink`, each terminated by `\n`, and flushes it.
pub fn write_normalized<W: Write>(mut sink: LineSink<W>, lines: &[String]) -> Result<W> {
    for line in lines {
        sink.write_line(line)?;
    }
    sink.finish()
}

/// Strips blank lines from the file at `path`, rewriting it in place.
///
/// The whole file is read and its handle closed before the path is truncated
/// and rewritten. The rewrite is not atomic: if it fails part-way, the file may
/// be left partially written or empty.
///
/// # Errors
/// Returns an [`crate::errors::Error::Io`] if the file cannot be opened, read
/// (including invalid UTF-8), recreated, written or flushed.
pub fn normalize_file(path: &Path) -> Result<NormalizeStats> {
    debug!("Normalizing {}", path.display());

    let (kept, stats) = {
        let mut source = LineSource::open(path)?;
        collect_normalized(&mut source)?
    };

    write_normalized(LineSink::create(path)?, &kept)?;

    info!(
        "Normalized {}: kept {} of {} lines",
        path.display(),
        stats.lines_kept,
        stats.lines_read
    );
    Ok(stats)
}
