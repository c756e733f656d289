//! Configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::consts;
use crate::render::SynonymJoin;

/// Application configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// HTTP client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// The base URL of the dictionary's website
    pub base_url: Url,
    /// The `User-Agent` header to send
    pub user_agent: String,
    /// Maximum duration to wait for a response
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Maximum number of redirects to follow
    pub max_redirects: usize,
}

/// Rendering configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of columns to render for when the terminal width is unknown
    pub fallback_width: u16,
    /// How lists of synonyms are joined
    pub synonyms: SynonymJoin,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives, used unless `RUST_LOG` is set
    pub filter: String,
    /// Format of log lines
    pub format: Format,
}

/// Format of log lines written to standard error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line, human-readable events.
    #[default]
    Compact,
    /// Multi-line, human-readable events.
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl Config {
    /// Loads the configuration from the defaults, the TOML file at `path` and the environment, in
    /// increasing order of precedence.
    ///
    /// When `path` is `None`, the configuration file is looked up in the platform's configuration
    /// directory. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed, or if a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Config, figment::Error> {
        let path = path.map(Path::to_path_buf).or_else(default_path);

        Config::figment(path.as_deref()).extract()
    }

    /// Returns the layered configuration sources.
    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: default_base_url(),
            user_agent: String::from(consts::HTTP_USER_AGENT),
            timeout: consts::HTTP_TIMEOUT,
            max_redirects: consts::HTTP_MAX_REDIRECTS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            fallback_width: consts::DEFAULT_COLUMNS,
            synonyms: SynonymJoin::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: String::from("warn"),
            format: Format::default(),
        }
    }
}

/// Returns the path of the configuration file in the platform's configuration directory.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(consts::CONFIG_FILE))
}

fn default_base_url() -> Url {
    Url::parse(consts::BASE_URL).unwrap_or_else(|_| unreachable!("base url is valid"))
}
