//! Decoded dataset responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Cell;

/// Name of the column holding observation dates.
pub const DATE_COLUMN: &str = "Date";

/// One decoded dataset response.
///
/// Rows in [`data`](Self::data) are positionally aligned with
/// [`columns`](Self::columns): cell `i` of every row belongs to column `i`.
/// The first cell is conventionally the observation date, the rest numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    /// Code of the data source (e.g., "WIKI").
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_code: String,
    /// Human-readable source name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_name: String,
    /// Dataset code within the source (e.g., "AAPL").
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Sampling frequency as reported by the API (e.g., "daily").
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: String,
    /// First available date, as returned by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_date: String,
    /// Last available date, as returned by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_date: String,
    /// Ordered column names.
    #[serde(default, rename = "column_names", deserialize_with = "null_as_default")]
    pub columns: Vec<String>,
    /// Data rows, one cell per column.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Vec<Cell>>,
}

/// Reads an explicit `null` as the field's default. Other type mismatches
/// still fail.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TimeSeriesResponse {
    /// Returns the fully qualified identifier (`SOURCE/CODE`).
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.source_code, self.code)
    }

    /// Returns the position of the first column with exactly this name.
    #[must_use]
    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Returns true if a column with exactly this name exists.
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.column_position(column).is_some()
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the response carries no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Display for TimeSeriesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} to {}, {} rows)",
            self.identifier(),
            self.frequency,
            self.from_date,
            self.to_date,
            self.data.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TimeSeriesResponse {
        TimeSeriesResponse {
            source_code: "BOE".to_string(),
            source_name: "Bank of England".to_string(),
            code: "XUDLBK73".to_string(),
            frequency: "daily".to_string(),
            from_date: "2005-04-01".to_string(),
            to_date: "2014-05-22".to_string(),
            columns: vec!["Date".to_string(), "Value".to_string()],
            data: vec![vec![Cell::from("2013-01-04"), Cell::from(6.2303)]],
        }
    }

    #[test]
    fn test_column_position_is_exact() {
        let response = sample();
        assert_eq!(response.column_position("Date"), Some(0));
        assert_eq!(response.column_position("Value"), Some(1));
        assert_eq!(response.column_position("value"), None);
        assert!(!response.has_column("Close"));
    }

    #[test]
    fn test_identifier_and_display() {
        let response = sample();
        assert_eq!(response.identifier(), "BOE/XUDLBK73");
        assert_eq!(
            response.to_string(),
            "BOE/XUDLBK73 (daily, 2005-04-01 to 2014-05-22, 1 rows)"
        );
        assert_eq!(response.row_count(), 1);
    }
}
