//! Rust client for the Quandl financial and economic data API.
//!
//! This is a facade crate that re-exports functionality from the quandl
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use quandl_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let client = QuandlClient::new(ClientConfig::from_env())
//!         .map_err(|e| QuandlError::Transport(e.to_string()))?;
//!
//!     let response = client.data("BOE/XUDLBK73", &TrimRange::since("2014-01-01"))?;
//!     let series = response.likely_series()?;
//!     println!("{}: {} observations of {}", response, series.len(), series.column);
//!
//!     let ratios = financial_ratios_list(client.transport())?;
//!     println!("{} ratio codes", ratios.len());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quandl/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use quandl_types::*;

// Re-export request building and transport
#[cfg(feature = "fetch")]
pub use quandl_fetch::{
    AUTH_TOKEN_ENV, ClientConfig, CrToLf, DecodeError, Dialect, HttpTransport, MemoryTransport,
    QuandlClient, Transport, TransportError, decode_response, load_table, parse_table, url,
};

// Re-export series extraction
#[cfg(feature = "series")]
pub use quandl_series::{
    ADJUSTED_CLOSE, NOT_APPLICABLE, Point, TimeSeries, TimeSeriesExt, column_values,
    extract_column, likely_data_column, likely_series, series_data, series_dates,
};

// Re-export reference lists
#[cfg(feature = "lists")]
pub use quandl_lists::{
    EmbeddedTable, FRED_PREFIX, ListLayout, ListSource, LoadedList, Origin, STATIC_ROOT,
    WIKI_PREFIX, all_securities, bitcoin_list, column_index, commodities_list, dow_constituents,
    economic_data_list, etf_list, etf_ticker_list, extract_columns, fetch_list, fetch_lists,
    financial_ratios_list, ftse100_constituents, nasdaq_composite_constituents,
    nasdaq100_constituents, prepend_list, sp500_constituents, sp500_sector_mappings,
    stock_index_list, stock_list, stock_ticker_list,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use quandl_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use quandl_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quandl_types::{
        Cell, DateRangeError, ExtractError, QuandlError, ReferenceList, Result,
        TimeSeriesResponse, TrimRange,
    };

    #[cfg(feature = "fetch")]
    pub use quandl_fetch::{ClientConfig, HttpTransport, QuandlClient, Transport};

    #[cfg(feature = "series")]
    pub use quandl_series::{TimeSeries, TimeSeriesExt};

    #[cfg(feature = "lists")]
    pub use quandl_lists::{
        ListSource, LoadedList, all_securities, fetch_list, financial_ratios_list,
    };

    #[cfg(feature = "format")]
    pub use quandl_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
