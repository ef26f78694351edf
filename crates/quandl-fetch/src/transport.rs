//! Blocking HTTP transport.

use bytes::Bytes;
use reqwest::blocking::Client;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while performing a request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No body is available for the URL.
    #[error("No response available for {0}")]
    NotFound(String),
}

/// Performs GET requests and returns the full response body.
///
/// Implementations block until the body has been read and must release the
/// underlying connection on every path. They do not retry.
pub trait Transport {
    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    fn get(&self, url: &str) -> Result<Bytes, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<Bytes, TransportError> {
        (**self).get(url)
    }
}

/// Transport backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport sending the given user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(user_agent).gzip(true).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Bytes, TransportError> {
        tracing::debug!(url, "GET");
        // The response owns the connection; it is released when dropped,
        // whether or not the body read succeeds.
        let response = self.client.get(url).send()?;
        tracing::debug!(url, status = response.status().as_u16(), "response");
        Ok(response.bytes()?)
    }
}

/// In-memory transport serving canned bodies keyed by URL.
///
/// Every requested URL is recorded, which makes it convenient for checking
/// request shaping without touching the network.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    bodies: HashMap<String, Bytes>,
    requests: Mutex<Vec<String>>,
}

impl MemoryTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the body returned for `url`.
    #[must_use]
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.insert(url, body);
        self
    }

    /// Registers the body returned for `url`.
    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<Bytes>) {
        self.bodies.insert(url.into(), body.into());
    }

    /// Returns every URL requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Transport for MemoryTransport {
    fn get(&self, url: &str) -> Result<Bytes, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::NotFound(url.to_string()))
    }
}
