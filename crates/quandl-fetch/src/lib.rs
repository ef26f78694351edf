//! HTTP transport and payload handling for the quandl client.
//!
//! This crate provides the request side of the client:
//!
//! - [`url`] - Dataset, history and search URL construction
//! - [`Transport`] - Blocking GET abstraction, with [`HttpTransport`] and [`MemoryTransport`]
//! - [`decode_response`] - Dataset JSON decoding
//! - [`parse_table`] / [`load_table`] - Delimited reference file loading
//! - [`QuandlClient`] - Client holding the configuration and auth token

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quandl/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod csv;
mod decode;
mod transport;
pub mod url;

pub use crate::csv::{CrToLf, Dialect, load_table, parse_table};
pub use client::{AUTH_TOKEN_ENV, ClientConfig, QuandlClient};
pub use decode::{DecodeError, decode_response};
pub use transport::{HttpTransport, MemoryTransport, Transport, TransportError};
