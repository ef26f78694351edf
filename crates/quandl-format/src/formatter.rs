//! Output format abstraction.

use quandl_series::TimeSeries;
use quandl_types::ReferenceList;
use std::io::Write;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson]
    }

    /// Writes a series in this format with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_series<W: Write + Send>(
        &self,
        series: &TimeSeries,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Csv => CsvFormatter::new().write_series(series, writer),
            Self::Json => JsonFormatter::new().write_series(series, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_series(series, writer),
        }
    }

    /// Writes a reference list in this format with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_list<W: Write + Send>(
        &self,
        list: &ReferenceList,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Csv => CsvFormatter::new().write_list(list, writer),
            Self::Json => JsonFormatter::new().write_list(list, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_list(list, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a series as (date, value) records.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_series<W: Write + Send>(
        &self,
        series: &TimeSeries,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a reference list as (identifier, description) records.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_list<W: Write + Send>(
        &self,
        list: &ReferenceList,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!(matches!(
            "parquet".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(s)) if s == "parquet"
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for format in OutputFormat::all() {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn test_write_list_dispatch() {
        let list = ReferenceList::from_pairs([("WIKI/AAPL", "Apple Inc.")]);
        let mut output = Vec::new();
        OutputFormat::Ndjson.write_list(&list, &mut output).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(
            result,
            "{\"identifier\":\"WIKI/AAPL\",\"description\":\"Apple Inc.\"}\n"
        );
    }
}
