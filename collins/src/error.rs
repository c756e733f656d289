use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("server responded with {0}")]
    UnexpectedStatus(reqwest::StatusCode),
    #[cfg(feature = "client")]
    #[error("invalid base url: {0}")]
    InvalidUrl(#[source] url::ParseError),
    #[error("could not find element: {0}")]
    MissingElement(&'static str),
}

impl Error {
    /// Returns `true` if the error happened while talking to the dictionary service, as opposed
    /// to while reading the page it returned.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        match self {
            #[cfg(feature = "client")]
            Error::Request(_) | Error::UnexpectedStatus(_) => true,
            _ => false,
        }
    }
}
