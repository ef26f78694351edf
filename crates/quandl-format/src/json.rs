//! JSON output format.

use quandl_series::TimeSeries;
use quandl_types::ReferenceList;
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_records<T, W>(
        &self,
        records: impl Iterator<Item = T>,
        mut writer: W,
    ) -> Result<(), FormatError>
    where
        T: Serialize,
        W: Write,
    {
        match self.style {
            JsonStyle::Array => {
                let records: Vec<T> = records.collect();
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &records)?;
                } else {
                    serde_json::to_writer(&mut writer, &records)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, &record)?;
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &TimeSeries,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_records(series.points(), writer)
    }

    fn write_list<W: Write + Send>(
        &self,
        list: &ReferenceList,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_records(list.entries(), writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
