//! Data command implementation.
//!
//! This module downloads a dataset, extracts one column and writes it as a
//! (date, value) series.

use crate::display::{Format, write_series};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use quandl_lib::prelude::*;
use std::path::Path;

/// Download a dataset and write one of its columns.
///
/// Without dates the full history is requested.
pub(crate) fn fetch_data(
    client: &QuandlClient,
    identifier: &str,
    start: Option<&str>,
    end: Option<&str>,
    column: Option<&str>,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let trim = parse_trim(start, end)?;

    let response = if trim.is_unbounded() {
        client.history(identifier)?
    } else {
        client.data(identifier, &trim)?
    };
    tracing::info!(%response, "fetched dataset");

    let series = match column {
        Some(column) => response.time_series(column)?,
        None => response
            .likely_series()
            .with_context(|| format!("No data column found in {identifier}"))?,
    };

    write_series(&series, output, format)?;

    if let Some(path) = output {
        tracing::info!(
            observations = series.len(),
            column = %series.column,
            path = %path.display(),
            "wrote series"
        );
    }

    Ok(())
}

/// Validates the date bounds and turns them into a trim range.
fn parse_trim(start: Option<&str>, end: Option<&str>) -> Result<TrimRange> {
    let parse = |s: &str, which: &str| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid {which} date: {s}"))
    };

    Ok(match (start, end) {
        (Some(start), Some(end)) => {
            TrimRange::between(parse(start, "start")?, parse(end, "end")?)?
        }
        (Some(start), None) => TrimRange::since(parse(start, "start")?.to_string()),
        (None, Some(end)) => TrimRange::until(parse(end, "end")?.to_string()),
        (None, None) => TrimRange::unbounded(),
    })
}
