// src/processing/lines.rs

//! Scoped line-oriented file handles.
//!
//! [`LineSource`] and [`LineSink`] own their underlying reader or writer and
//! remember the path they were opened from, so every failure can be reported
//! with the offending file. Both release the handle when dropped.

use crate::errors::{io_error_with_path, IoAction, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

/// Reads a file one terminator-delimited line at a time.
///
/// Both `\n` and `\r\n` terminators are accepted; the terminator is not part of
/// the returned line.
pub struct LineSource<R> {
    lines: Lines<R>,
    path: PathBuf,
}

impl LineSource<BufReader<File>> {
    /// Opens `path` for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| io_error_with_path(e, IoAction::Open, path))?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wraps an already-open reader. `path` is only used in error messages.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
        }
    }

    /// Returns the next line, or `None` once the source is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next()
            .transpose()
            .map_err(|e| io_error_with_path(e, IoAction::Read, &self.path))
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes newline-terminated lines to a file.
///
/// Call [`LineSink::finish`] once done: dropping a sink without it still closes
/// the file, but a failing final flush would go unnoticed.
pub struct LineSink<W: Write> {
    writer: W,
    path: PathBuf,
}

impl LineSink<BufWriter<File>> {
    /// Creates `path` for writing, truncating any existing content.
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).map_err(|e| io_error_with_path(e, IoAction::Create, path))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> LineSink<W> {
    /// Wraps an already-open writer. `path` is only used in error messages.
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
        }
    }

    /// Writes `line` followed by a single `\n`.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")
    }

    /// Writes an empty line.
    pub fn write_blank(&mut self) -> Result<()> {
        self.write_all(b"\n")
    }

    /// Flushes buffered output and hands back the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|e| io_error_with_path(e, IoAction::Flush, &self.path))?;
        Ok(self.writer)
    }

    /// The path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| io_error_with_path(e, IoAction::Write, &self.path))
    }
}

/// A writer that rejects every write, for exercising write-failure paths.
#[cfg(test)]
pub(crate) struct FailingWriter;

#[cfg(test)]
impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
