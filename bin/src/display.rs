//! Display utilities and output formatting for the quandl CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use quandl_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for downloaded data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Opens the output file, or stdout when no path is given.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    })
}

/// Write a series to a file or stdout in the specified format.
pub(crate) fn write_series(
    series: &TimeSeries,
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let writer = open_output(output)?;
    OutputFormat::from(format).write_series(series, writer)?;
    Ok(())
}

/// Write a reference list to a file or stdout in the specified format.
pub(crate) fn write_list(list: &ReferenceList, output: Option<&Path>, format: Format) -> Result<()> {
    let writer = open_output(output)?;
    OutputFormat::from(format).write_list(list, writer)?;
    Ok(())
}

/// Report rows that were dropped while reading list files.
pub(crate) fn report_skipped(loaded: &LoadedList, quiet: bool) {
    if quiet || loaded.skipped.is_empty() {
        return;
    }
    eprintln!(
        "Skipped {} malformed rows ({} entries written)",
        loaded.skipped.len(),
        loaded.len()
    );
}
