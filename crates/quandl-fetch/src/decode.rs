//! Dataset payload decoding.

use quandl_types::TimeSeriesResponse;
use thiserror::Error;

/// Errors that can occur while decoding a dataset payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body is not JSON or does not match the dataset shape.
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A data row does not have one cell per column.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RowWidth {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of columns in the response.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}

/// Decodes a dataset response body.
///
/// Unknown fields are ignored and missing metadata fields default to empty,
/// but known fields of the wrong JSON type are rejected.
///
/// # Errors
///
/// Returns an error if the body is not a valid dataset object or if any row
/// width differs from the number of columns.
///
/// # Example
///
/// ```
/// use quandl_fetch::decode_response;
///
/// let body = br#"{"code":"XUDLBK73","column_names":["Date","Value"],"data":[["2013-01-04",6.2303]]}"#;
/// let response = decode_response(body)?;
/// assert_eq!(response.columns, ["Date", "Value"]);
/// # Ok::<(), quandl_fetch::DecodeError>(())
/// ```
pub fn decode_response(body: &[u8]) -> Result<TimeSeriesResponse, DecodeError> {
    let response: TimeSeriesResponse = serde_json::from_slice(body)?;

    let expected = response.columns.len();
    if let Some((row, cells)) = response
        .data
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(DecodeError::RowWidth {
            row,
            expected,
            found: cells.len(),
        });
    }

    Ok(response)
}
