//! Error types for quandl.

use chrono::NaiveDate;
use thiserror::Error;

use crate::CellKind;

/// Result type alias for quandl operations.
pub type Result<T> = std::result::Result<T, QuandlError>;

/// Errors that can occur while fetching and shaping Quandl data.
#[derive(Error, Debug)]
pub enum QuandlError {
    /// The request could not be completed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not a valid dataset payload.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A delimited reference file could not be read.
    #[error("CSV error: {0}")]
    Csv(String),

    /// A column could not be extracted from a response.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Unknown reference list source.
    #[error("Unknown list source: {0}")]
    UnknownSource(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error raised when a time series cannot be extracted from a response.
///
/// Extraction is all-or-nothing: one bad row invalidates the whole series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The response has no columns at all.
    #[error("Response has no columns")]
    NoColumns,

    /// A requested column is not present in the response.
    #[error("Column not found: {column:?}")]
    MissingColumn {
        /// The column name that was looked up.
        column: String,
    },

    /// A cell did not hold the expected kind of value.
    #[error("Row {row}, column {column:?}: expected {expected}, found {found}")]
    CellType {
        /// Zero-based index of the offending data row.
        row: usize,
        /// Name of the column being read.
        column: String,
        /// The kind of value the extractor needed.
        expected: CellKind,
        /// The kind of value actually present.
        found: CellKind,
    },
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_message_names_row_and_column() {
        let err = ExtractError::CellType {
            row: 3,
            column: "Adj. Close".to_string(),
            expected: CellKind::Number,
            found: CellKind::Text,
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 3"));
        assert!(msg.contains("Adj. Close"));
        assert!(msg.contains("number"));
    }

    #[test]
    fn test_extract_error_converts() {
        let err: QuandlError = ExtractError::NoColumns.into();
        assert!(matches!(err, QuandlError::Extract(ExtractError::NoColumns)));
    }
}
