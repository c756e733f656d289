//! Terminal queries

use std::io::{self, IsTerminal};

/// Returns the number of columns of the terminal attached to standard output, or `fallback` if
/// standard output isn't a terminal or its size is unknown.
#[must_use]
pub fn width(fallback: u16) -> usize {
    let size = io::stdout()
        .is_terminal()
        .then(crossterm::terminal::size);

    columns_or(size, fallback)
}

/// Picks the column count out of a terminal size query.
fn columns_or(size: Option<io::Result<(u16, u16)>>, fallback: u16) -> usize {
    match size {
        Some(Ok((columns, _rows))) if columns > 0 => usize::from(columns),
        _ => usize::from(fallback),
    }
}
