//! Info command implementation.

use anyhow::Result;
use quandl_lib::prelude::*;

/// Show metadata for a dataset, including the column the data would be read from.
pub(crate) fn show_info(client: &QuandlClient, identifier: &str) -> Result<()> {
    let response = client.history(identifier)?;

    println!("Dataset:     {}", response.identifier());
    println!("Source:      {}", response.source_name);
    println!("Frequency:   {}", response.frequency);
    println!("From:        {}", response.from_date);
    println!("To:          {}", response.to_date);
    println!("Rows:        {}", response.row_count());
    println!("Columns:     {}", response.columns.join(", "));
    println!(
        "Data column: {}",
        response.likely_data_column().unwrap_or(quandl_lib::NOT_APPLICABLE)
    );

    Ok(())
}
