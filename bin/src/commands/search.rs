//! Search command implementation.

use anyhow::Result;
use quandl_lib::prelude::*;

/// Run a dataset search and print the raw result as pretty JSON.
pub(crate) fn search(client: &QuandlClient, terms: &[String]) -> Result<()> {
    let results = client.search_json(&terms.join(" "))?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
