//! Column extraction from dataset responses.

use quandl_types::{Cell, CellKind, DATE_COLUMN, ExtractError, TimeSeriesResponse};

use crate::TimeSeries;

/// Column preferred by [`likely_data_column`] when present.
pub const ADJUSTED_CLOSE: &str = "Adj. Close";

/// Display placeholder for "no likely data column".
pub const NOT_APPLICABLE: &str = "N/A";

/// Extracts the dates and the values of `column` from a response.
///
/// The date is read from the column named `"Date"`. Every date cell must be
/// text and every value cell must be numeric; a single mismatch fails the
/// whole call. Output order follows the input rows.
///
/// # Errors
///
/// Returns an error if either column is missing or any row holds a cell of
/// the wrong kind.
///
/// # Example
///
/// ```
/// use quandl_series::extract_column;
/// use quandl_types::{Cell, TimeSeriesResponse};
///
/// let response = TimeSeriesResponse {
///     columns: vec!["Date".into(), "Value".into()],
///     data: vec![vec![Cell::from("2013-01-04"), Cell::from(6.2303)]],
///     ..Default::default()
/// };
/// let series = extract_column(&response, "Value")?;
/// assert_eq!(series.dates, ["2013-01-04"]);
/// # Ok::<(), quandl_types::ExtractError>(())
/// ```
pub fn extract_column(
    response: &TimeSeriesResponse,
    column: &str,
) -> Result<TimeSeries, ExtractError> {
    let date_pos = position(response, DATE_COLUMN)?;
    let value_pos = position(response, column)?;

    let mut series = TimeSeries::with_capacity(column, response.data.len());
    for (row, cells) in response.data.iter().enumerate() {
        let date = read_cell(cells, row, date_pos, DATE_COLUMN, CellKind::Text, Cell::as_text)?;
        let value = read_cell(cells, row, value_pos, column, CellKind::Number, Cell::as_number)?;
        series.push(date, value);
    }

    Ok(series)
}

/// Returns the column most likely to hold the primary series.
///
/// Prefers `"Adj. Close"` (split-adjusted equity prices), otherwise the last
/// column. Returns `None` when the response has no columns.
#[must_use]
pub fn likely_data_column(response: &TimeSeriesResponse) -> Option<&str> {
    match response.column_position(ADJUSTED_CLOSE) {
        Some(pos) => Some(response.columns[pos].as_str()),
        None => response.columns.last().map(String::as_str),
    }
}

/// Extracts the series of the heuristically chosen column.
///
/// # Errors
///
/// Returns an error if the response has no columns or extraction fails.
pub fn likely_series(response: &TimeSeriesResponse) -> Result<TimeSeries, ExtractError> {
    let column = likely_data_column(response).ok_or(ExtractError::NoColumns)?;
    extract_column(response, column)
}

/// Returns only the values of `column`.
///
/// # Errors
///
/// Returns an error if extraction fails.
pub fn column_values(response: &TimeSeriesResponse, column: &str) -> Result<Vec<f64>, ExtractError> {
    extract_column(response, column).map(|series| series.values)
}

/// Returns the dates of the heuristically chosen column.
///
/// # Errors
///
/// Returns an error if the response has no columns or extraction fails.
pub fn series_dates(response: &TimeSeriesResponse) -> Result<Vec<String>, ExtractError> {
    likely_series(response).map(|series| series.dates)
}

/// Returns the values of the heuristically chosen column with its name.
///
/// # Errors
///
/// Returns an error if the response has no columns or extraction fails.
pub fn series_data(response: &TimeSeriesResponse) -> Result<(Vec<f64>, String), ExtractError> {
    likely_series(response).map(|series| (series.values, series.column))
}

fn position(response: &TimeSeriesResponse, column: &str) -> Result<usize, ExtractError> {
    response
        .column_position(column)
        .ok_or_else(|| ExtractError::MissingColumn {
            column: column.to_string(),
        })
}

fn read_cell<'a, T>(
    cells: &'a [Cell],
    row: usize,
    pos: usize,
    column: &str,
    expected: CellKind,
    read: impl Fn(&'a Cell) -> Option<T>,
) -> Result<T, ExtractError> {
    let cell = cells.get(pos);
    match cell.and_then(read) {
        Some(value) => Ok(value),
        None => {
            // Decoded responses have one cell per column, so a missing
            // cell only happens for hand-built responses.
            let found = cell.map_or(CellKind::Null, Cell::kind);
            tracing::warn!(row, column, ?cells, "unexpected {found} cell, expected {expected}");
            Err(ExtractError::CellType {
                row,
                column: column.to_string(),
                expected,
                found,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn response(columns: &[&str], data: serde_json::Value) -> TimeSeriesResponse {
        TimeSeriesResponse {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            data: serde_json::from_value(data).unwrap(),
            ..Default::default()
        }
    }

    fn stock() -> TimeSeriesResponse {
        response(
            &["Date", "Open", "Close", "Adj. Close"],
            json!([
                ["2013-01-04", 536.97, 527.0, 72.24650533822],
                ["2013-01-03", 547.88, 542.1, 74.316566496868],
                ["2013-01-02", 553.82, 549.03, 75.266601187558]
            ]),
        )
    }

    #[test]
    fn test_extract_column_keeps_row_order() {
        let series = extract_column(&stock(), "Close").unwrap();

        assert_eq!(series.column, "Close");
        assert_eq!(series.dates, ["2013-01-04", "2013-01-03", "2013-01-02"]);
        assert_eq!(series.values.len(), series.dates.len());
        assert_relative_eq!(series.values[0], 527.0);
        assert_relative_eq!(series.values[2], 549.03);
    }

    #[test]
    fn test_bad_value_cell_fails_whole_series() {
        let response = response(
            &["Date", "Value"],
            json!([["2013-01-04", 1.0], ["2013-01-03", "n/a"], ["2013-01-02", 3.0]]),
        );

        let err = extract_column(&response, "Value").unwrap_err();
        assert_eq!(
            err,
            ExtractError::CellType {
                row: 1,
                column: "Value".to_string(),
                expected: CellKind::Number,
                found: CellKind::Text,
            }
        );
    }

    #[test]
    fn test_bad_date_cell_fails_whole_series() {
        let response = response(&["Date", "Value"], json!([[20130104, 1.0]]));

        let err = extract_column(&response, "Value").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::CellType { row: 0, expected: CellKind::Text, found: CellKind::Number, .. }
        ));
    }

    #[test]
    fn test_null_value_fails() {
        let response = response(&["Date", "Value"], json!([["2013-01-04", null]]));
        assert!(matches!(
            extract_column(&response, "Value"),
            Err(ExtractError::CellType { found: CellKind::Null, .. })
        ));
    }

    #[test]
    fn test_missing_columns() {
        assert_eq!(
            extract_column(&stock(), "Volume"),
            Err(ExtractError::MissingColumn {
                column: "Volume".to_string()
            })
        );

        let no_date = response(&["Period", "Value"], json!([]));
        assert_eq!(
            extract_column(&no_date, "Value"),
            Err(ExtractError::MissingColumn {
                column: "Date".to_string()
            })
        );
    }

    #[test]
    fn test_empty_data_is_empty_series() {
        let series = extract_column(&response(&["Date", "Value"], json!([])), "Value").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_likely_data_column() {
        assert_eq!(likely_data_column(&stock()), Some("Adj. Close"));

        let economic = response(&["Date", "Value"], json!([]));
        assert_eq!(likely_data_column(&economic), Some("Value"));

        let empty = response(&[], json!([]));
        assert_eq!(likely_data_column(&empty), None);
    }

    #[test]
    fn test_likely_data_column_prefers_adjusted_close_anywhere() {
        let response = response(&["Date", "Adj. Close", "Adj. Volume"], json!([]));
        assert_eq!(likely_data_column(&response), Some("Adj. Close"));
    }

    #[test]
    fn test_wrappers() {
        let response = response(
            &["Date", "Market Capitalization"],
            json!([["2012-06-30", 227057.1], ["2011-06-30", 217062.1]]),
        );

        let values = column_values(&response, "Market Capitalization").unwrap();
        assert_eq!(values.len(), 2);
        assert_relative_eq!(values[1], 217_062.1);

        assert_eq!(series_dates(&response).unwrap(), ["2012-06-30", "2011-06-30"]);

        let (data, column) = series_data(&response).unwrap();
        assert_eq!(column, "Market Capitalization");
        assert_relative_eq!(data[0], 227_057.1);
    }

    #[test]
    fn test_wrappers_without_columns() {
        let empty = response(&[], json!([]));
        assert_eq!(series_dates(&empty), Err(ExtractError::NoColumns));
        assert_eq!(series_data(&empty), Err(ExtractError::NoColumns));
    }
}
