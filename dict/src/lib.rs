//! Look up words and phrases in the Collins English Dictionary from the terminal.

pub mod config;
pub mod consts;
mod error;
pub mod http;
pub mod lookup;
pub mod render;
pub mod terminal;
pub mod tracing;
pub mod utils;
pub mod wrap;

pub use config::Config;
pub use error::Error;
