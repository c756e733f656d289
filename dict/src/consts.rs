use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str = collins::client::USER_AGENT;

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The number of redirects to follow before giving up on a request.
pub const HTTP_MAX_REDIRECTS: usize = collins::client::MAX_REDIRECTS;

/// The default base URL of the dictionary.
pub const BASE_URL: &str = collins::client::BASE_URL;

/// The number of columns to render for when the width of the terminal is unknown.
pub const DEFAULT_COLUMNS: u16 = 80;

/// The prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "DICT_";

/// The name of the configuration file, relative to the platform's configuration directory.
pub const CONFIG_FILE: &str = "dict/config.toml";
