// src/processing/interleave.rs

use super::lines::{LineSink, LineSource};
use crate::core_types::InterleaveStats;
use crate::errors::Result;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::Path;

/// Merges two line sources into `sink`, alternating one line from each.
///
/// Every step reads one line from each source, then writes the primary line,
/// the secondary line and a blank separator, in that order. The merge stops on
/// the first step where neither source yields text; that step writes nothing.
///
/// An exhausted source and an empty raw line are treated alike: both count as
/// "no text" for the step. Sources are expected to be normalized, so empty
/// lines do not normally occur. If both sources hold an empty line on the same
/// step, the merge ends there.
///
/// # Examples
/// ```
/// use linemerge::processing::{interleave, LineSink, LineSource};
/// use std::io::Cursor;
///
/// let mut primary = LineSource::new(Cursor::new("a\nb\n"), "file1.txt");
/// let mut secondary = LineSource::new(Cursor::new("x\n"), "file2.txt");
/// let mut sink = LineSink::new(Vec::new(), "out.txt");
///
/// let stats = interleave(&mut primary, &mut secondary, &mut sink).unwrap();
/// let merged = String::from_utf8(sink.finish().unwrap()).unwrap();
///
/// assert_eq!(merged, "a\nx\n\nb\n\n");
/// assert_eq!(stats.steps, 2);
/// ```
pub fn interleave<A: BufRead, B: BufRead, W: Write>(
    primary: &mut LineSource<A>,
    secondary: &mut LineSource<B>,
    sink: &mut LineSink<W>,
) -> Result<InterleaveStats> {
    let mut stats = InterleaveStats::default();
    loop {
        let lead = primary.next_line()?.unwrap_or_default();
        let follow = secondary.next_line()?.unwrap_or_default();

        if lead.is_empty() && follow.is_empty() {
            break;
        }

        if !lead.is_empty() {
            sink.write_line(&lead)?;
            stats.primary_lines += 1;
        }
        if !follow.is_empty() {
            sink.write_line(&follow)?;
            stats.secondary_lines += 1;
        }
        sink.write_blank()?;
        stats.steps += 1;
    }
    Ok(stats)
}

/// Merges the files at `primary` and `secondary` into a new file at `output`.
///
/// Both sources are opened before `output` is created (or truncated). For the
/// opposite priority, call this again with the two sources swapped.
///
/// # Errors
/// Returns an [`crate::errors::Error::Io`] if either source cannot be opened or
/// read, or if the output cannot be created, written or flushed. A partially
/// written output file may remain on failure.
pub fn interleave_files(primary: &Path, secondary: &Path, output: &Path) -> Result<InterleaveStats> {
    debug!(
        "Interleaving {} (primary) with {} into {}",
        primary.display(),
        secondary.display(),
        output.display()
    );

    let mut primary_source = LineSource::open(primary)?;
    let mut secondary_source = LineSource::open(secondary)?;
    let mut sink = LineSink::create(output)?;

    let stats = interleave(&mut primary_source, &mut secondary_source, &mut sink)?;
    sink.finish()?;

    info!(
        "Wrote {}: {} primary + {} secondary lines in {} steps",
        output.display(),
        stats.primary_lines,
        stats.secondary_lines,
        stats.steps
    );
    Ok(stats)
}
