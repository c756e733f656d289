//! A client for querying the Collins English Dictionary search service.
//!
//! This module provides a high-level async interface for making requests to the dictionary and
//! parsing the results into structured data.

use std::time::Duration;

use reqwest::{ClientBuilder, StatusCode, redirect::Policy};
use url::Url;

use crate::{Error, Lookup};

/// The base URL of the dictionary's website.
pub const BASE_URL: &str = "https://www.collinsdictionary.com";
/// The relative path of the search endpoint.
const SEARCH_PATH: &str = "/us/search/";
/// The name of the query parameter used to select the dictionary.
const DICTIONARY_PARAM: &str = "dictCode";
/// The dictionary to search.
const DICTIONARY: &str = "english";
/// The name of the query parameter used to specify the term to look up.
const QUERY_PARAM: &str = "q";
/// The `User-Agent` header the site expects.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:10.0) Gecko/20100101 Firefox/10.0";
/// The number of redirects to follow; the search endpoint redirects to the article page.
pub const MAX_REDIRECTS: usize = 10;

/// An asynchronous client for the Collins English Dictionary.
///
/// This client handles the construction of HTTP requests, sending them to the dictionary service,
/// and parsing the HTML response.
#[derive(Debug)]
pub struct Client {
    /// The base URL of the service endpoint, without a trailing slash.
    base_url: String,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. This can happen in environments with
    /// misconfigured network or TLS dependencies. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`]. It configures the client with gzip
    /// support, a 30-second timeout, the site's expected user agent, and follows up to
    /// [`MAX_REDIRECTS`] redirects.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build. See
    /// [`ClientBuilder::build`] for more details on potential failures.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .gzip(true)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// The given client should send a browser-like `User-Agent` and follow redirects, as the
    /// search endpoint redirects to the article page.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let base_url = String::from(BASE_URL);

        Client { base_url, client }
    }

    /// Replaces the base URL of the service, e.g. to point the client at a mirror.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Client, Error> {
        let url = Url::parse(base_url).map_err(Error::InvalidUrl)?;

        self.base_url = url.as_str().trim_end_matches('/').to_string();

        Ok(self)
    }

    /// Fetches the raw search result page for `term`.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`]: If the HTTP request fails due to network issues or a timeout.
    /// - [`Error::UnexpectedStatus`]: If the server responds with anything but `200 OK`.
    pub async fn fetch_page(&self, term: &str) -> Result<String, Error> {
        let url = format!("{base_url}{SEARCH_PATH}", base_url = self.base_url);

        #[cfg(feature = "log")]
        tracing::debug!(%url, %term, "requesting search page");

        let request = self
            .client
            .get(url)
            .query(&[(DICTIONARY_PARAM, DICTIONARY), (QUERY_PARAM, term)]);
        let response = request.send().await.map_err(Error::Request)?;
        let status = response.status();

        #[cfg(feature = "log")]
        tracing::debug!(%status, url = %response.url(), "received search page");

        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus(status));
        }

        response.text().await.map_err(Error::Request)
    }

    /// Looks up `term` and returns the parsed result.
    ///
    /// This function performs the entire process of sending a request, awaiting the response, and
    /// parsing the HTML body into a [`Lookup`].
    ///
    /// # Errors
    ///
    /// Fails with the errors of [`Client::fetch_page`], or with [`Error::MissingElement`] if the
    /// page does not match the expected structure.
    pub async fn search(&self, term: &str) -> Result<Lookup, Error> {
        let page = self.fetch_page(term).await?;

        Lookup::from_html(page)
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Serves a single canned HTTP response on localhost, returning the base URL and a handle that
    /// resolves to the raw request.
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0; 8192];
            let len = socket.read(&mut buf).await.unwrap();

            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&buf[..len]).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_with_client() {
        let http_client = reqwest::Client::new();
        let _ = Client::with_client(http_client);
    }

    #[test]
    fn test_with_base_url_rejects_relative_url() {
        let client = Client::with_client(reqwest::Client::new());
        let err = client.with_base_url("/relative").unwrap_err();

        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_search_sends_query_parameters() {
        let html = include_str!("../tests/fixtures/queries/apple.html");
        let (base_url, server) = serve_once("200 OK", html).await;
        let client = Client::try_new()
            .unwrap()
            .with_base_url(&base_url)
            .unwrap();

        let lookup = client.search("apple").await.expect("lookup");
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /us/search/?dictCode=english&q=apple HTTP/1.1"));
        assert!(request.to_lowercase().contains(&format!(
            "user-agent: {}",
            USER_AGENT.to_lowercase()
        )));
        assert!(matches!(lookup, Lookup::Entries(ref entries) if entries.len() == 1));
    }

    #[tokio::test]
    async fn test_search_encodes_phrases() {
        let (base_url, server) = serve_once("200 OK", "<html><body></body></html>").await;
        let client = Client::try_new()
            .unwrap()
            .with_base_url(&base_url)
            .unwrap();

        let lookup = client.search("ice cream").await.expect("lookup");
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /us/search/?dictCode=english&q=ice+cream HTTP/1.1"));
        assert_eq!(lookup, Lookup::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_ok_status() {
        let (base_url, _server) = serve_once("404 Not Found", "gone").await;
        let client = Client::try_new()
            .unwrap()
            .with_base_url(&base_url)
            .unwrap();

        let err = client.fetch_page("apple").await.unwrap_err();

        assert!(matches!(err, Error::UnexpectedStatus(status) if status == StatusCode::NOT_FOUND));
        assert!(err.is_network());
    }
}
