//! Client configuration
//!
//! Credentials are resolved once, when the configuration is built. Nothing in
//! the lookup path reads the process environment.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{IsbnDbError, Result};

/// Environment variable consulted by [`ClientConfig::from_env`]
pub const ACCESS_KEY_ENV: &str = "ISBNDB_ACCESS_KEY";

const DEFAULT_BASE_URL: &str = "http://isbndb.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`IsbnDbClient`](crate::IsbnDbClient)
///
/// # Example
///
/// ```
/// use isbndb_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_access_key("ABCDEFGH")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.effective_base_url(), "http://isbndb.com/api");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// ISBNdb access key sent with every request
    #[serde(default)]
    pub access_key: Option<String>,

    /// Base URL of the API, without a trailing slash
    #[serde(default)]
    pub base_url: Option<String>,

    /// User agent header
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl ClientConfig {
    /// Create a configuration with defaults and no access key
    pub fn new() -> Self {
        Self {
            access_key: None,
            base_url: None,
            user_agent: None,
            timeout: default_timeout(),
        }
    }

    /// Create a configuration whose access key comes from `ISBNDB_ACCESS_KEY`
    ///
    /// An unset or empty variable leaves the key unset; the client will refuse
    /// to build from such a configuration.
    pub fn from_env() -> Self {
        let access_key = env::var(ACCESS_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            access_key,
            ..Self::new()
        }
    }

    pub fn with_access_key<S: Into<String>>(mut self, access_key: S) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with any trailing slash removed
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )
        })
    }

    /// The configured access key, or [`IsbnDbError::MissingAccessKey`]
    pub fn require_access_key(&self) -> Result<&str> {
        match self.access_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(IsbnDbError::MissingAccessKey),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
