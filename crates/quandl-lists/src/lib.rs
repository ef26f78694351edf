//! Reference lists of quandl dataset identifiers.
//!
//! Each list is a catalog of (identifier, description) pairs built from a
//! static file with its own layout:
//!
//! - [`ListSource`] - The known sources and their [`ListLayout`]
//! - [`extract_columns`] / [`prepend_list`] - Column selection over raw tables
//! - [`fetch_list`] / [`all_securities`] - Loading lists through a transport
//!
//! # Example
//!
//! ```
//! use quandl_fetch::MemoryTransport;
//! use quandl_lists::financial_ratios_list;
//!
//! // Embedded lists never touch the transport.
//! let ratios = financial_ratios_list(&MemoryTransport::new())?;
//! assert_eq!(ratios.list.get(0).unwrap().identifier, "FLOAT");
//! # Ok::<(), quandl_types::QuandlError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quandl/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod embedded;
mod normalize;
mod source;

pub use catalog::{
    LoadedList, all_securities, bitcoin_list, commodities_list, dow_constituents,
    economic_data_list, etf_list, etf_ticker_list, fetch_list, fetch_lists,
    financial_ratios_list, ftse100_constituents, nasdaq_composite_constituents,
    nasdaq100_constituents, sp500_constituents, sp500_sector_mappings, stock_index_list,
    stock_list, stock_ticker_list,
};
pub use normalize::{column_index, extract_columns, prepend_list};
pub use source::{
    EmbeddedTable, FRED_PREFIX, ListLayout, ListSource, Origin, STATIC_ROOT, WIKI_PREFIX,
};
