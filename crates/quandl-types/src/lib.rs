//! Core types for the quandl financial data client.
//!
//! This crate provides the fundamental data structures used throughout quandl:
//!
//! - [`TimeSeriesResponse`] - A decoded dataset response
//! - [`Cell`] - A tagged, untyped table cell
//! - [`TrimRange`] - Optional date bounds for dataset requests
//! - [`RawTable`] - Rows read from a delimited reference file
//! - [`ReferenceList`] - (identifier, description) catalog

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quandl/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod response;
mod table;
mod trim;

pub use cell::{Cell, CellKind};
pub use error::{DateRangeError, ExtractError, QuandlError, Result};
pub use response::{DATE_COLUMN, TimeSeriesResponse};
pub use table::{ListEntry, RawTable, ReferenceList, SkippedRow};
pub use trim::TrimRange;
