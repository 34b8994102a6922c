// src/selection.rs

//! Interactive selection of the input files.
//!
//! The [`FilePicker`] trait abstracts over how a path is obtained from the
//! user. [`TerminalPicker`] asks on a line-oriented terminal; tests and library
//! callers can supply their own implementation.

use crate::constants::{TEXT_FILTER_EXTENSIONS, TEXT_FILTER_LABEL};
use crate::errors::{Error, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

/// A file-type filter: a display label plus the extensions it admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    /// Human readable label, e.g. `Text Files (*.txt)`.
    pub label: &'static str,
    /// Admitted extensions without the leading dot, compared case-insensitively.
    pub extensions: &'static [&'static str],
}

/// The filter used for both input prompts.
pub const TEXT_FILES: FileFilter = FileFilter {
    label: TEXT_FILTER_LABEL,
    extensions: TEXT_FILTER_EXTENSIONS,
};

impl FileFilter {
    /// Checks whether `path` carries one of the admitted extensions.
    ///
    /// # Examples
    /// ```
    /// use linemerge::selection::TEXT_FILES;
    /// use std::path::Path;
    ///
    /// assert!(TEXT_FILES.matches(Path::new("notes.TXT")));
    /// assert!(!TEXT_FILES.matches(Path::new("notes.md")));
    /// assert!(!TEXT_FILES.matches(Path::new("txt")));
    /// ```
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

/// A single request for a file path.
#[derive(Debug, Clone, Copy)]
pub struct PickRequest<'a> {
    /// Title describing which file is wanted.
    pub title: &'a str,
    /// Only paths passing this filter may be returned.
    pub filter: &'a FileFilter,
}

/// Obtains a file path from the user.
pub trait FilePicker {
    /// Asks for a path matching `request.filter`.
    ///
    /// Returns `Ok(None)` when the user declines to choose a file.
    fn pick(&mut self, request: &PickRequest<'_>) -> Result<Option<PathBuf>>;
}

/// Prompts for paths on a terminal, one answer per line.
///
/// An empty answer or end of input cancels. Answers that fail the filter or do
/// not name an existing file are rejected and the prompt is repeated.
pub struct TerminalPicker<R, W> {
    input: R,
    output: W,
    show_cue: bool,
}

impl TerminalPicker<StdinLock<'static>, Stdout> {
    /// A picker reading standard input and prompting on standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
            .with_cue(atty::is(atty::Stream::Stdin))
    }
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    /// Creates a picker over arbitrary input and output streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_cue: false,
        }
    }

    /// Whether to print a `> ` cue before reading each answer.
    pub fn with_cue(mut self, show_cue: bool) -> Self {
        self.show_cue = show_cue;
        self
    }

    /// Consumes the picker, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(unquote(answer.trim()).to_string()))
    }

    fn ask(&mut self, request: &PickRequest<'_>) -> io::Result<Option<PathBuf>> {
        loop {
            writeln!(
                self.output,
                "{} [{}], empty to cancel:",
                request.title, request.filter.label
            )?;
            if self.show_cue {
                write!(self.output, "> ")?;
            }
            self.output.flush()?;

            let answer = match self.read_answer()? {
                Some(answer) if !answer.is_empty() => answer,
                _ => return Ok(None),
            };
            let path = PathBuf::from(answer);

            if !request.filter.matches(&path) {
                log::warn!("Rejected selection without an allowed extension: {}", path.display());
                writeln!(
                    self.output,
                    "Only {} can be selected: {}",
                    request.filter.label,
                    path.display()
                )?;
                continue;
            }
            if !path.is_file() {
                log::warn!("Rejected selection of a missing file: {}", path.display());
                writeln!(self.output, "File not found: {}", path.display())?;
                continue;
            }
            return Ok(Some(path));
        }
    }
}

impl<R: BufRead, W: Write> FilePicker for TerminalPicker<R, W> {
    fn pick(&mut self, request: &PickRequest<'_>) -> Result<Option<PathBuf>> {
        self.ask(request).map_err(Error::Selection)
    }
}

/// Strips one pair of matching surrounding quotes, as added by drag-and-drop.
fn unquote(answer: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = answer
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const REQUEST: PickRequest<'static> = PickRequest {
        title: "Select First Input File",
        filter: &TEXT_FILES,
    };

    fn picker(input: &str) -> TerminalPicker<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPicker::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_filter_matching() {
        assert!(TEXT_FILES.matches(Path::new("a.txt")));
        assert!(TEXT_FILES.matches(Path::new("dir/b.Txt")));
        assert!(!TEXT_FILES.matches(Path::new("a.txt.bak")));
        assert!(!TEXT_FILES.matches(Path::new("README")));
    }

    #[test]
    fn test_pick_existing_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("input.txt");
        fs::write(&file, "x\n")?;

        let mut picker = picker(&format!("{}\n", file.display()));
        let picked = picker.pick(&REQUEST)?;

        assert_eq!(picked, Some(file));
        let prompt = String::from_utf8(picker.into_output())?;
        assert!(prompt.contains("Select First Input File [Text Files (*.txt)]"));
        assert!(!prompt.contains("> "));
        Ok(())
    }

    #[test]
    fn test_pick_strips_quotes_and_whitespace() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("with space.txt");
        fs::write(&file, "")?;

        let mut picker = picker(&format!("  \"{}\"  \n", file.display()));
        assert_eq!(picker.pick(&REQUEST)?, Some(file));
        Ok(())
    }

    #[test]
    fn test_empty_answer_cancels() -> anyhow::Result<()> {
        assert_eq!(picker("\n").pick(&REQUEST)?, None);
        assert_eq!(picker("   \n").pick(&REQUEST)?, None);
        Ok(())
    }

    #[test]
    fn test_end_of_input_cancels() -> anyhow::Result<()> {
        assert_eq!(picker("").pick(&REQUEST)?, None);
        Ok(())
    }

    #[test]
    fn test_rejects_wrong_extension_then_accepts() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let wrong = temp.path().join("notes.md");
        let right = temp.path().join("notes.txt");
        fs::write(&wrong, "")?;
        fs::write(&right, "")?;

        let mut picker = picker(&format!("{}\n{}\n", wrong.display(), right.display()));
        assert_eq!(picker.pick(&REQUEST)?, Some(right));

        let prompt = String::from_utf8(picker.into_output())?;
        assert!(prompt.contains("Only Text Files (*.txt) can be selected"));
        Ok(())
    }

    #[test]
    fn test_rejects_missing_file_then_cancels() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let missing = temp.path().join("missing.txt");

        let mut picker = picker(&format!("{}\n\n", missing.display()));
        assert_eq!(picker.pick(&REQUEST)?, None);

        let prompt = String::from_utf8(picker.into_output())?;
        assert!(prompt.contains("File not found"));
        Ok(())
    }

    #[test]
    fn test_cue_is_optional() -> anyhow::Result<()> {
        let mut picker = picker("\n").with_cue(true);
        picker.pick(&REQUEST)?;
        let prompt = String::from_utf8(picker.into_output())?;
        assert!(prompt.ends_with("> "));
        Ok(())
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a b.txt\""), "a b.txt");
        assert_eq!(unquote("'a.txt'"), "a.txt");
        assert_eq!(unquote("\"a.txt"), "\"a.txt");
        assert_eq!(unquote("plain.txt"), "plain.txt");
    }
}
