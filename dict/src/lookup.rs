//! Looking up terms

use collins::Lookup;
use tracing::{debug, instrument};

use crate::Error;

/// Looks up `term` using `client`.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the dictionary can't be reached or responds with anything but a
/// page, and [`Error::Extract`] if the page doesn't have the expected structure.
#[instrument(skip(client))]
pub async fn lookup(client: &collins::Client, term: &str) -> Result<Lookup, Error> {
    let lookup = client.search(term).await.map_err(Error::lookup)?;

    match lookup {
        Lookup::Entries(ref entries) => debug!(entries = entries.len(), "found entries"),
        Lookup::Suggestions(ref suggestions) => {
            debug!(suggestions = suggestions.len(), "found suggestions");
        }
        Lookup::NotFound => debug!("found nothing"),
    }

    Ok(lookup)
}
