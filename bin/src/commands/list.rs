//! List command implementations.
//!
//! This module handles listing the known reference lists and downloading
//! them, alone or combined into the securities catalog.

use crate::display::{Format, report_skipped, write_list};
use anyhow::Result;
use quandl_lib::Origin;
use quandl_lib::prelude::*;
use std::path::Path;

/// Print the available reference lists.
pub(crate) fn list_sources() -> Result<()> {
    println!("{:<18} {:<10} {}", "NAME", "ORIGIN", "DESCRIPTION");
    println!("{}", "-".repeat(70));

    for source in ListSource::ALL {
        let origin = match source.layout().origin {
            Origin::Remote { .. } => "remote",
            Origin::Embedded(_) => "embedded",
        };
        println!("{:<18} {:<10} {}", source.name(), origin, source.description());
    }

    println!("\nTotal: {} lists", ListSource::ALL.len());
    Ok(())
}

/// Download one reference list.
pub(crate) fn download_list(
    client: &QuandlClient,
    name: &str,
    format: Format,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let source: ListSource = name.parse()?;
    let loaded = fetch_list(client.transport(), source)?;

    write_list(&loaded.list, output, format)?;
    report_skipped(&loaded, quiet);
    Ok(())
}

/// Download every security list into one catalog.
pub(crate) fn download_securities(
    client: &QuandlClient,
    format: Format,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let loaded = all_securities(client.transport())?;

    write_list(&loaded.list, output, format)?;
    report_skipped(&loaded, quiet);
    Ok(())
}
