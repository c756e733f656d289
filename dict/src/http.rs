//! HTTP features

use reqwest::redirect::Policy;

use crate::Error;
use crate::config::HttpConfig;

/// Returns a HTTP client builder configured from `config`.
#[must_use]
pub fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
    reqwest::ClientBuilder::new()
        .gzip(true)
        .redirect(Policy::limited(config.max_redirects))
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
}

/// Builds a dictionary client from `config`.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the HTTP client can't be built or the base URL is rejected.
pub fn build_client(config: &HttpConfig) -> Result<collins::Client, Error> {
    let client = builder(config)
        .build()
        .map_err(|err| Error::HttpClient(collins::Error::BuildClient(err)))?;

    collins::Client::with_client(client)
        .with_base_url(config.base_url.as_str())
        .map_err(Error::HttpClient)
}
