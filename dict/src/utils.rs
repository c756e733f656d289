use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Helpers for fitting text into a number of terminal columns.
pub trait Truncatable {
    /// Truncates the text to at most `width` columns and appends `suffix`, or returns it as-is
    /// if it already fits.
    fn truncate_with_suffix(&self, width: usize, suffix: &str) -> Cow<'_, str>;

    /// Pads the text with trailing spaces until it is `width` columns wide.
    fn pad_to_width(&self, width: usize) -> Cow<'_, str>;
}

impl Truncatable for String {
    fn truncate_with_suffix(&self, width: usize, suffix: &str) -> Cow<'_, str> {
        self.as_str().truncate_with_suffix(width, suffix)
    }

    fn pad_to_width(&self, width: usize) -> Cow<'_, str> {
        self.as_str().pad_to_width(width)
    }
}

impl Truncatable for str {
    fn truncate_with_suffix(&self, width: usize, suffix: &str) -> Cow<'_, str> {
        if self.width() <= width {
            return Cow::Borrowed(self);
        }

        let mut columns = 0;
        let end = self
            .char_indices()
            .find(|(_, c)| {
                columns += c.width().unwrap_or(0);
                columns > width
            })
            .map_or(self.len(), |(byte_idx, _)| byte_idx);

        let mut truncated = String::with_capacity(end + suffix.len());
        truncated.push_str(&self[..end]);
        truncated.push_str(suffix);

        Cow::Owned(truncated)
    }

    fn pad_to_width(&self, width: usize) -> Cow<'_, str> {
        let columns = self.width();

        if columns >= width {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(format!("{self}{:padding$}", "", padding = width - columns))
        }
    }
}
