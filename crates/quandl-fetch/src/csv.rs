//! Delimited reference file loading.

use quandl_types::{QuandlError, RawTable, SkippedRow};
use std::io::{self, BufRead, BufReader, Read};

use crate::Transport;

/// Layout variant of a delimited reference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Comma separated, canonical line endings.
    #[default]
    Comma,
    /// Pipe (`|`) separated.
    Pipe,
    /// Comma separated with legacy lone-CR line endings.
    CarriageReturn,
}

impl Dialect {
    /// Returns the field delimiter byte.
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        match self {
            Self::Comma | Self::CarriageReturn => b',',
            Self::Pipe => b'|',
        }
    }
}

/// Reader adapter turning a lone `\r` into `\n`.
///
/// A `\r` immediately followed by `\n` is left alone, so CRLF input passes
/// through unchanged. The byte after a chunk-final `\r` is peeked from the
/// inner buffer without being consumed.
#[derive(Debug)]
pub struct CrToLf<R> {
    inner: BufReader<R>,
}

impl<R: Read> CrToLf<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
        }
    }
}

impl<R: Read> Read for CrToLf<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for i in 0..n {
            if buf[i] != b'\r' {
                continue;
            }
            let next = if i + 1 < n {
                Some(buf[i + 1])
            } else {
                match self.inner.fill_buf() {
                    Ok(rest) => rest.first().copied(),
                    // Hand back what was read; the next call reports the error.
                    Err(_) => return Ok(n),
                }
            };
            if next != Some(b'\n') {
                buf[i] = b'\n';
            }
        }
        Ok(n)
    }
}

/// Parses a delimited body into a raw table.
///
/// No header handling is done: row 0 stays in the table. The first record
/// fixes the expected width; rows that fail to parse (wrong width, invalid
/// UTF-8) are recorded in [`RawTable::skipped`] and parsing continues.
///
/// # Errors
///
/// Returns an error only if reading the underlying data fails.
pub fn parse_table(body: &[u8], dialect: Dialect) -> Result<RawTable, ::csv::Error> {
    match dialect {
        Dialect::CarriageReturn => read_records(CrToLf::new(body), dialect),
        Dialect::Comma | Dialect::Pipe => read_records(body, dialect),
    }
}

fn read_records<R: Read>(source: R, dialect: Dialect) -> Result<RawTable, ::csv::Error> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(dialect.delimiter())
        .from_reader(source);

    let mut table = RawTable::default();
    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => table.rows.push(record.iter().map(str::to_string).collect()),
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => table.skipped.push(SkippedRow::new(index, e.to_string())),
        }
    }

    Ok(table)
}

/// Fetches a delimited file and parses it into a raw table.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be read.
pub fn load_table<T: Transport>(
    transport: &T,
    url: &str,
    dialect: Dialect,
) -> Result<RawTable, QuandlError> {
    let body = transport
        .get(url)
        .map_err(|e| QuandlError::Transport(e.to_string()))?;
    let table = parse_table(&body, dialect).map_err(|e| QuandlError::Csv(e.to_string()))?;

    if !table.skipped.is_empty() {
        tracing::warn!(
            url,
            skipped = table.skipped.len(),
            parsed = table.rows.len(),
            "skipped malformed rows"
        );
    }

    Ok(table)
}
