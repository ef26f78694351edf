//! Output formatters for the quandl client.
//!
//! This crate writes extracted series and reference lists to various
//! output formats:
//!
//! - [`CsvFormatter`] - Delimited text
//! - [`JsonFormatter`] - JSON array or NDJSON

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quandl/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
