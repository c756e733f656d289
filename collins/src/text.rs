//! Text helpers for fragments pulled out of the document.

/// Strips leading and trailing whitespace from `raw` and collapses every internal run of
/// whitespace into a single space.
///
/// ```rust
/// assert_eq!(collins::text::normalize("  a \n\t b  "), "a b");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());

    for word in raw.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }

        normalized.push_str(word);
    }

    normalized
}

/// Returns `s` without its first character.
///
/// The site decorates labels and quotations with a single leading glyph.
pub(crate) fn skip_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

/// Returns `s` without its last `n` characters.
pub(crate) fn strip_last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((byte_idx, _)) if n > 0 => &s[..byte_idx],
        Some(_) => s,
        None => "",
    }
}
