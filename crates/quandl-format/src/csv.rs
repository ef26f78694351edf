//! CSV output format.

use quandl_series::TimeSeries;
use quandl_types::ReferenceList;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Fields are quoted by the `csv` writer whenever needed, so descriptions
/// containing the delimiter survive a round trip.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            include_header: true,
        }
    }

    fn writer<W: Write>(&self, writer: W) -> ::csv::Writer<W> {
        ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer)
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &TimeSeries,
        writer: W,
    ) -> Result<(), FormatError> {
        let mut out = self.writer(writer);

        if self.include_header {
            out.write_record(["date", series.column.as_str()])?;
        }

        for point in series.points() {
            out.write_record([point.date, point.value.to_string().as_str()])?;
        }

        out.flush()?;
        Ok(())
    }

    fn write_list<W: Write + Send>(
        &self,
        list: &ReferenceList,
        writer: W,
    ) -> Result<(), FormatError> {
        let mut out = self.writer(writer);

        if self.include_header {
            out.write_record(["identifier", "description"])?;
        }

        for entry in list.entries() {
            out.write_record([entry.identifier, entry.description])?;
        }

        out.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == b'\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_series() -> TimeSeries {
        let mut series = TimeSeries::new("Value");
        series.push("2013-01-04", 6.2303);
        series.push("2013-01-03", 6.2301);
        series
    }

    #[test]
    fn test_csv_series() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result, "date,Value\n2013-01-04,6.2303\n2013-01-03,6.2301\n");
    }

    #[test]
    fn test_csv_list_quotes_descriptions() {
        let formatter = CsvFormatter::new();
        let list = ReferenceList::from_pairs([("WIKI/ACT", "Actavis, Inc.")]);
        let mut output = Cursor::new(Vec::new());

        formatter.write_list(&list, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result, "identifier,description\nWIKI/ACT,\"Actavis, Inc.\"\n");
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("date,Value"));
        assert_eq!(result.lines().count(), 2);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("date\tValue\n"));
        assert_eq!(formatter.extension(), "tsv");
    }
}
