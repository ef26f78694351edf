//! Time series extraction for the quandl client.
//!
//! This crate turns decoded dataset responses into typed series:
//!
//! - [`extract_column`] - Dates and values of a named column
//! - [`likely_data_column`] - Heuristic choice of the primary column
//! - [`TimeSeries`] - Parallel date and value vectors
//! - [`TimeSeriesExt`] - The same operations as response methods

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quandl/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ext;
pub mod extract;
mod series;

pub use ext::TimeSeriesExt;
pub use extract::{
    ADJUSTED_CLOSE, NOT_APPLICABLE, column_values, extract_column, likely_data_column,
    likely_series, series_data, series_dates,
};
pub use series::{Point, TimeSeries};
