//! CLI command implementations.

use anyhow::{Context, Result};
use quandl_lib::prelude::*;

pub(crate) mod data;
pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod search;

/// Builds an HTTP client, using `token` when it is set and non-empty.
pub(crate) fn client(token: Option<String>) -> Result<QuandlClient> {
    let mut config = ClientConfig::default();
    if let Some(token) = token.filter(|token| !token.is_empty()) {
        config = config.with_auth_token(token);
    }
    QuandlClient::new(config).context("Failed to create HTTP client")
}
