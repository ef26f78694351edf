//! Quandl API client.

use bytes::Bytes;
use quandl_types::{QuandlError, RawTable, Result, TimeSeriesResponse, TrimRange};

use crate::csv::{Dialect, load_table};
use crate::transport::{HttpTransport, Transport, TransportError};
use crate::{decode_response, url};

/// Environment variable read by [`ClientConfig::from_env`].
pub const AUTH_TOKEN_ENV: &str = "QUANDL_AUTH_TOKEN";

/// Configuration for the Quandl client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API auth token. Without one, requests use the rate-limited anonymous tier.
    pub auth_token: Option<String>,
    /// Root of the dataset endpoint.
    pub api_root: String,
    /// Search endpoint.
    pub search_root: String,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            api_root: url::API_ROOT.to_string(),
            search_root: url::SEARCH_ROOT.to_string(),
            user_agent: format!("quandl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates the default configuration with the token taken from
    /// `QUANDL_AUTH_TOKEN`, if set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let token = std::env::var(AUTH_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty());
        Self {
            auth_token: token,
            ..Self::default()
        }
    }

    /// Sets the auth token.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Sets the dataset endpoint root.
    #[must_use]
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into();
        self
    }

    /// Sets the search endpoint.
    #[must_use]
    pub fn with_search_root(mut self, root: impl Into<String>) -> Self {
        self.search_root = root.into();
        self
    }

    fn token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

/// Client for the Quandl dataset API.
///
/// The configuration, including the auth token, is fixed at construction.
/// Every call performs one blocking request; nothing is cached.
#[derive(Debug, Clone)]
pub struct QuandlClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl QuandlClient<HttpTransport> {
    /// Creates a client over HTTP with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Ok(Self { transport, config })
    }

    /// Creates an anonymous client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> std::result::Result<Self, TransportError> {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> QuandlClient<T> {
    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub const fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches a dataset restricted to the given date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a valid
    /// dataset payload.
    pub fn data(&self, identifier: &str, trim: &TrimRange) -> Result<TimeSeriesResponse> {
        let url = url::dataset_url(&self.config.api_root, identifier, trim, self.config.token());
        self.fetch_dataset(&url)
    }

    /// Fetches the complete history of a dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a valid
    /// dataset payload.
    pub fn history(&self, identifier: &str) -> Result<TimeSeriesResponse> {
        let url = url::history_url(&self.config.api_root, identifier, self.config.token());
        self.fetch_dataset(&url)
    }

    /// Runs a dataset search and returns the raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn search(&self, query: &str) -> Result<Bytes> {
        let url = url::search_url(&self.config.search_root, query, self.config.token());
        self.get(&url)
    }

    /// Runs a dataset search and parses the body as generic JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub fn search_json(&self, query: &str) -> Result<serde_json::Value> {
        let body = self.search(query)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches and parses a delimited reference file.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub fn load_table(&self, url: &str, dialect: Dialect) -> Result<RawTable> {
        load_table(&self.transport, url, dialect)
    }

    fn fetch_dataset(&self, url: &str) -> Result<TimeSeriesResponse> {
        let body = self.get(url)?;
        decode_response(&body).map_err(|e| QuandlError::Decode(e.to_string()))
    }

    fn get(&self, url: &str) -> Result<Bytes> {
        self.transport
            .get(url)
            .map_err(|e| QuandlError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTransport;

    const BOE: &str = r#"{"source_code":"BOE","source_name":"Bank of England","code":"XUDLBK73",
        "frequency":"daily","from_date":"2005-04-01","to_date":"2014-05-22",
        "column_names":["Date","Value"],
        "data":[["2013-01-04",6.2303],["2013-01-03",6.2301],["2013-01-02",6.2301]]}"#;

    fn client(transport: MemoryTransport, config: ClientConfig) -> QuandlClient<MemoryTransport> {
        QuandlClient::with_transport(transport, config)
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert!(config.auth_token.is_none());
        assert_eq!(config.api_root, url::API_ROOT);
        assert_eq!(config.search_root, url::SEARCH_ROOT);
        assert!(config.user_agent.starts_with("quandl/"));
    }

    #[test]
    fn test_client_creation() {
        assert!(QuandlClient::with_defaults().is_ok());
    }

    #[test]
    fn test_data_with_token() {
        let url = "http://www.quandl.com/api/v1/datasets/BOE/XUDLBK73.json?trim_start=2013-01-01&trim_end=2013-01-05&auth_token=tok";
        let transport = MemoryTransport::new().with_body(url, BOE);
        let client = client(transport, ClientConfig::default().with_auth_token("tok"));

        let response = client
            .data("BOE/XUDLBK73", &TrimRange::new("2013-01-01", "2013-01-05"))
            .unwrap();

        assert_eq!(response.code, "XUDLBK73");
        assert!(response.row_count() <= 5);
        assert!(response.has_column("Date"));
        assert_eq!(client.transport().requests(), [url]);
    }

    #[test]
    fn test_history_anonymous() {
        let url = "http://www.quandl.com/api/v1/datasets/BOE/XUDLBK73.json";
        let transport = MemoryTransport::new().with_body(url, BOE);
        let client = client(transport, ClientConfig::default());

        let response = client.history("BOE/XUDLBK73").unwrap();
        assert_eq!(response.row_count(), 3);
    }

    #[test]
    fn test_transport_failure_is_returned() {
        let client = client(MemoryTransport::new(), ClientConfig::default());
        let result = client.history("WIKI/NOPE");
        assert!(matches!(result, Err(QuandlError::Transport(_))));
    }

    #[test]
    fn test_decode_failure_is_returned() {
        let url = "http://www.quandl.com/api/v1/datasets/WIKI/AAPL.json";
        let transport = MemoryTransport::new().with_body(url, "not json");
        let client = client(transport, ClientConfig::default());

        assert!(matches!(
            client.history("WIKI/AAPL"),
            Err(QuandlError::Decode(_))
        ));
    }

    #[test]
    fn test_search() {
        let url = "http://search/datasets.json?query=crude+oil";
        let transport = MemoryTransport::new().with_body(url, r#"{"total_count":1,"docs":[]}"#);
        let config = ClientConfig::default().with_search_root("http://search/datasets.json");
        let client = client(transport, config);

        let raw = client.search("crude oil").unwrap();
        assert!(raw.starts_with(b"{"));
        let value = client.search_json("crude oil").unwrap();
        assert_eq!(value["total_count"], 1);
    }

    #[test]
    fn test_custom_api_root() {
        let url = "http://mirror/v1/WIKI/AAPL.json";
        let transport = MemoryTransport::new().with_body(url, BOE);
        let client = client(transport, ClientConfig::default().with_api_root("http://mirror/v1/"));

        assert!(client.history("WIKI/AAPL").is_ok());
    }

    #[test]
    #[ignore = "requires network access"]
    fn test_live_dated_series() {
        let client = QuandlClient::new(ClientConfig::from_env()).unwrap();
        let response = client
            .data("WIKI/AAPL", &TrimRange::new("2013-01-01", "2013-01-05"))
            .unwrap();

        assert!(response.row_count() <= 5);
        assert!(response.has_column("Date"));
    }
}
