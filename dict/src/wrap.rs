//! Line wrapping

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Reflows text into lines no wider than a fixed number of columns.
///
/// Words are never split: a word wider than the line is placed alone on its line, which then
/// exceeds the width. When the first line starts further in than continuation lines, a word that
/// doesn't fit after the first line's indent starts on a continuation line instead.
///
/// # Example
///
/// ```rust
/// use dict::wrap::Wrap;
///
/// let mut out = Vec::new();
/// Wrap::new(10).indent(2).write(&mut out, "one two three four").unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "one two\n  three\n  four\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    /// The maximum number of columns per line.
    width: usize,
    /// The column the first line starts at.
    first_line_indent: usize,
    /// The number of spaces each continuation line is indented by.
    continuation_indent: usize,
}

impl Wrap {
    /// Creates a wrapper for lines of `width` columns without any indentation.
    #[must_use]
    pub const fn new(width: usize) -> Wrap {
        Wrap {
            width,
            first_line_indent: 0,
            continuation_indent: 0,
        }
    }

    /// Sets the column the first line starts at.
    ///
    /// The wrapper does not write anything into these columns; they are expected to already hold
    /// something, like a list marker.
    #[must_use]
    pub const fn first_line_indent(mut self, columns: usize) -> Wrap {
        self.first_line_indent = columns;
        self
    }

    /// Sets the number of spaces to indent continuation lines by.
    #[must_use]
    pub const fn continuation_indent(mut self, columns: usize) -> Wrap {
        self.continuation_indent = columns;
        self
    }

    /// Sets both the first line and the continuation line indentation.
    #[must_use]
    pub const fn indent(self, columns: usize) -> Wrap {
        self.first_line_indent(columns).continuation_indent(columns)
    }

    /// Writes `text` to `out` word by word, terminated by a newline.
    ///
    /// Runs of whitespace in `text` are collapsed into single spaces. Empty text produces a single
    /// empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let mut column = self.first_line_indent;
        let mut line_start = true;

        for word in text.split_whitespace() {
            let word_width = word.width();

            // at line start, only a first line indented past the continuation lines can overflow
            let overflows = if line_start {
                column > self.continuation_indent && column + word_width > self.width
            } else {
                column + 1 + word_width > self.width
            };

            if overflows {
                write!(out, "\n{:indent$}", "", indent = self.continuation_indent)?;
                column = self.continuation_indent;
                line_start = true;
            }

            if line_start {
                out.write_all(word.as_bytes())?;
                column += word_width;
                line_start = false;
            } else {
                write!(out, " {word}")?;
                column += word_width + 1;
            }
        }

        out.write_all(b"\n")
    }
}
