//! Error types

use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, lookups and output.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(code(dict::config))]
    Config(#[source] Box<figment::Error>),
    /// The log filter directives could not be parsed.
    #[error("Invalid log filter")]
    #[diagnostic(code(dict::log_filter))]
    LogFilter(#[source] tracing_subscriber::filter::ParseError),
    /// A global logger has already been installed.
    #[error("Could not initialize logging")]
    #[diagnostic(code(dict::logging))]
    Logging(#[source] tracing_subscriber::util::TryInitError),
    /// The HTTP client could not be created.
    #[error("Could not create HTTP client")]
    #[diagnostic(code(dict::http_client))]
    HttpClient(#[source] collins::Error),
    /// The dictionary could not be reached, or did not respond with a page.
    #[error("Failed to get web content")]
    #[diagnostic(code(dict::fetch))]
    Fetch(#[source] collins::Error),
    /// The page did not have the expected structure.
    #[error("Failed to get data")]
    #[diagnostic(code(dict::extract))]
    Extract(#[source] collins::Error),
    /// The output could not be written.
    #[error("Could not write output")]
    #[diagnostic(code(dict::output))]
    Output(#[from] io::Error),
    /// The result could not be serialized as JSON.
    #[error("Could not serialize result")]
    #[diagnostic(code(dict::json))]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classifies a failed lookup as either a network failure or a page that couldn't be read.
    #[must_use]
    pub fn lookup(err: collins::Error) -> Error {
        if err.is_network() {
            Error::Fetch(err)
        } else {
            Error::Extract(err)
        }
    }

    /// Returns the status the process should exit with after this error.
    ///
    /// A dictionary that can't be reached is reported, but not treated as a failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Error::Fetch(_) => 0,
            _ => 1,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
