//! Tables compiled into the crate.
//!
//! No remote file exists for these lists, so their rows ship as JSON and
//! are parsed once on first access.

use std::sync::OnceLock;

use crate::source::EmbeddedTable;

/// Financial ratio codes and names, embedded at compile time.
const FINANCIAL_RATIOS_JSON: &str = include_str!("../data/financial_ratios.json");

/// The bitcoin series, embedded at compile time.
const BITCOIN_JSON: &str = include_str!("../data/bitcoin.json");

static FINANCIAL_RATIOS: OnceLock<Vec<Vec<String>>> = OnceLock::new();
static BITCOIN: OnceLock<Vec<Vec<String>>> = OnceLock::new();

/// Returns the rows of an embedded table. These tables have no header row.
#[must_use]
pub(crate) fn rows(table: EmbeddedTable) -> &'static [Vec<String>] {
    match table {
        EmbeddedTable::FinancialRatios => {
            FINANCIAL_RATIOS.get_or_init(|| parse(FINANCIAL_RATIOS_JSON, "financial_ratios.json"))
        }
        EmbeddedTable::Bitcoin => BITCOIN.get_or_init(|| parse(BITCOIN_JSON, "bitcoin.json")),
    }
}

fn parse(json: &str, name: &str) -> Vec<Vec<String>> {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("Invalid {name}: {e}"))
}
