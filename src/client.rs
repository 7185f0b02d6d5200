use std::fmt;
use std::iter;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{IsbnDbError, Result};
use crate::query::{RequestParams, encode_request_params};
use crate::transport::{Method, Transport};
use crate::xml::XmlDocument;

/// Blocking HTTP client for the ISBNdb API
///
/// Adds the access key to every request and parses each successful response
/// into an [`XmlDocument`].
#[derive(Clone)]
pub struct IsbnDbClient {
    client: Client,
    base_url: String,
    access_key: String,
}

impl IsbnDbClient {
    /// Create a client for `access_key` with otherwise default configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use isbndb_client::IsbnDbClient;
    ///
    /// let client = IsbnDbClient::new("ABCDEFGH").unwrap();
    /// ```
    pub fn new<S: Into<String>>(access_key: S) -> Result<Self> {
        Self::with_config(ClientConfig::new().with_access_key(access_key))
    }

    /// Create a client from a configuration
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::MissingAccessKey` - If the configuration carries no access key
    /// * `IsbnDbError::RequestError` - If the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```no_run
    /// use isbndb_client::{ClientConfig, IsbnDbClient};
    ///
    /// let client = IsbnDbClient::with_config(ClientConfig::from_env()).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()?;
        Self::with_client(client, config)
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Result<Self> {
        let access_key = config.require_access_key()?.to_string();
        Ok(Self {
            client,
            base_url: config.effective_base_url().to_string(),
            access_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Usage statistics for the access key in use
    pub fn keystats(&self) -> Result<XmlDocument> {
        let params = encode_request_params("keystats", iter::empty::<(&str, &str)>());
        self.request("books.xml", Method::Get, &params)
    }
}

impl Transport for IsbnDbClient {
    #[instrument(skip(self, params), fields(path = %path, method = %method))]
    fn request(&self, path: &str, method: Method, params: &RequestParams) -> Result<XmlDocument> {
        let trimmed = path.trim().trim_start_matches('/');
        if trimmed.is_empty() {
            warn!("Rejected request with an empty path");
            return Err(IsbnDbError::InvalidPath {
                path: path.to_string(),
            });
        }
        let uri = format!("{}/{}", self.base_url, trimmed);

        let mut params = params.clone();
        params.insert("access_key", self.access_key.as_str());
        let encoded = params.to_query_string();

        debug!(results = params.get("results"), "Making ISBNdb API request");
        let response = match method {
            Method::Get => self.client.get(format!("{uri}?{encoded}")).send()?,
            Method::Post => self
                .client
                .post(&uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded)
                .send()?,
        };

        let status = response.status();
        if !status.is_success() {
            warn!("API request failed with status: {}", status);
            return Err(IsbnDbError::Http {
                status: status.as_u16(),
                uri,
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        debug!("Received successful API response, parsing XML");
        let body = response.text()?;
        let result = XmlDocument::parse(&body);
        match &result {
            Ok(document) => info!(root = document.root().name(), "Parsed API response"),
            Err(e) => warn!("Failed to parse response XML: {}", e),
        }
        result
    }
}

impl fmt::Debug for IsbnDbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsbnDbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
