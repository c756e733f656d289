//! A client and parser for the Collins English Dictionary.
//!
//! The parser walks a search result page into [`DictionaryEntry`] records, or into a list of
//! suggested spellings when the site has no entry for the query.

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

#[cfg(feature = "client")]
pub mod client;
pub mod dom;
mod error;
pub mod text;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
pub use error::Error;
pub use types::{Derivation, DictionaryEntry, Lookup, Sense};
