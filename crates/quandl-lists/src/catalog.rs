//! Fetching reference lists.

use quandl_fetch::{Transport, load_table};
use quandl_types::{ReferenceList, Result, SkippedRow};

use crate::source::{ListSource, Origin, STATIC_ROOT};
use crate::{embedded, extract_columns, prepend_list};

/// A reference list together with the source rows that could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedList {
    /// The (identifier, description) pairs.
    pub list: ReferenceList,
    /// Malformed source rows left out of the list.
    pub skipped: Vec<SkippedRow>,
}

impl LoadedList {
    /// Returns the number of entries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Appends another loaded list, entries and diagnostics alike.
    pub fn extend(&mut self, other: Self) {
        self.list.extend(other.list);
        self.skipped.extend(other.skipped);
    }
}

/// Loads one reference list.
///
/// Remote sources are fetched on every call; nothing is cached.
///
/// # Errors
///
/// Returns an error if a remote file cannot be fetched or read.
pub fn fetch_list<T: Transport>(transport: &T, source: ListSource) -> Result<LoadedList> {
    let layout = source.layout();

    let (list, skipped) = match layout.origin {
        Origin::Remote { path, dialect } => {
            let url = format!("{STATIC_ROOT}{path}");
            let table = load_table(transport, &url, dialect)?;
            let list = extract_columns(
                &table.rows,
                layout.id_column,
                layout.description_column,
                layout.skip_header,
            );
            (list, table.skipped)
        }
        Origin::Embedded(table) => {
            let list = extract_columns(
                embedded::rows(table),
                layout.id_column,
                layout.description_column,
                layout.skip_header,
            );
            (list, Vec::new())
        }
    };

    let list = match layout.prefix {
        Some(prefix) => {
            let (identifiers, descriptions) = list.into_parts();
            let identifiers = prepend_list(prefix, &identifiers);
            ReferenceList::from_pairs(identifiers.into_iter().zip(descriptions))
        }
        None => list,
    };
    tracing::debug!(%source, entries = list.len(), skipped = skipped.len(), "loaded list");

    Ok(LoadedList { list, skipped })
}

/// Loads several lists and concatenates them in the given order.
///
/// # Errors
///
/// Returns the first error raised by any source.
pub fn fetch_lists<T: Transport>(transport: &T, sources: &[ListSource]) -> Result<LoadedList> {
    let mut combined = LoadedList::default();
    for source in sources {
        combined.extend(fetch_list(transport, *source)?);
    }
    Ok(combined)
}

/// Loads every security list into one catalog.
///
/// Sources are combined in the order of [`ListSource::SECURITIES`]: stocks,
/// stock tickers, ETFs, ETF tickers, stock indices, commodities, bitcoin.
///
/// # Errors
///
/// Returns the first error raised by any source.
pub fn all_securities<T: Transport>(transport: &T) -> Result<LoadedList> {
    fetch_lists(transport, ListSource::SECURITIES)
}

macro_rules! list_fetchers {
    ($($(#[$doc:meta])* $name:ident => $source:ident;)*) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Returns an error if the source cannot be fetched or read.
            pub fn $name<T: Transport>(transport: &T) -> Result<LoadedList> {
                fetch_list(transport, ListSource::$source)
            }
        )*
    };
}

list_fetchers! {
    /// WIKI stock codes and company names.
    stock_list => Stocks;
    /// Stock price codes, described by their ticker.
    stock_ticker_list => StockTickers;
    /// ETF codes and descriptions.
    etf_list => Etfs;
    /// ETF codes, described by their ticker.
    etf_ticker_list => EtfTickers;
    /// Stock index codes and descriptions.
    stock_index_list => StockIndices;
    /// Commodity codes and names.
    commodities_list => Commodities;
    /// The Bitstamp bitcoin series.
    bitcoin_list => Bitcoin;
    /// Damodaran financial ratio codes. The ticker still has to be combined
    /// with the code to form a dataset identifier.
    financial_ratios_list => FinancialRatios;
    /// FRED economic series, prefixed with `FRED/`.
    economic_data_list => EconomicData;
    /// S&P 500 constituents as `WIKI/` codes with company names.
    sp500_constituents => Sp500;
    /// Dow Jones Industrial Average constituents as `WIKI/` codes.
    dow_constituents => Dow;
    /// NASDAQ Composite constituents as `WIKI/` codes.
    nasdaq_composite_constituents => NasdaqComposite;
    /// NASDAQ-100 constituents as `WIKI/` codes.
    nasdaq100_constituents => Nasdaq100;
    /// FTSE 100 constituents.
    ftse100_constituents => Ftse100;
    /// S&P 500 constituents as `WIKI/` codes with their sector.
    sp500_sector_mappings => Sp500Sectors;
}

#[cfg(test)]
mod tests {
    use super::*;
    use quandl_fetch::MemoryTransport;
    use quandl_types::QuandlError;

    fn url(source: ListSource) -> String {
        source.layout().url().unwrap()
    }

    fn transport() -> MemoryTransport {
        let mut transport = MemoryTransport::new();
        transport.insert(
            url(ListSource::Stocks),
            "code,name\nWIKI/ACT,\"Actavis, Inc.\"\nWIKI/AAPL,Apple Inc.\n",
        );
        transport.insert(
            url(ListSource::StockTickers),
            "Ticker,Stock Name,Price Code,Ratios Code,In Market?\n\
             A,Agilent Technologies,GOOG/NYSE_A,DMDRN/A_ALLFINANCIALRATIOS,Active\n",
        );
        transport.insert(
            url(ListSource::Etfs),
            "Ticker,Code,Name\nTDTT,GOOG/NYSEARCA_TDTT,FlexShares iBoxx 3-Year Target Duration TIPS\n\
             SPY,GOOG/NYSEARCA_SPY,SPDR S&P 500\n",
        );
        transport.insert(
            url(ListSource::StockIndices),
            "Ticker,Code,Name\nSPX,YAHOO/INDEX_GSPC,S&P 500 Index\n",
        );
        transport.insert(
            url(ListSource::Commodities),
            "Name,Code\nGold,WGC/GOLD_DAILY_USD\nBrent,CHRIS/ICE_B1\nbad\n",
        );
        transport.insert(
            url(ListSource::EconomicData),
            "Code|Description\nLAWFIN|Finance and Insurance Wages and Salaries in Louisiana\n",
        );
        transport.insert(
            url(ListSource::Sp500),
            "Ticker,Code,Name,Sector\rMMM,WIKI/MMM,3M Co,Industrials\rACE,WIKI/ACE,ACE Limited,Financials\r",
        );
        transport
    }

    #[test]
    fn test_stock_list() {
        let loaded = stock_list(&transport()).unwrap();
        let first = loaded.list.get(0).unwrap();
        assert_eq!(first.identifier, "WIKI/ACT");
        assert_eq!(first.description, "Actavis, Inc.");
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_stock_ticker_list_uses_price_code() {
        let loaded = stock_ticker_list(&transport()).unwrap();
        assert_eq!(loaded.list.identifiers(), ["GOOG/NYSE_A"]);
        assert_eq!(loaded.list.descriptions(), ["A"]);
    }

    #[test]
    fn test_etf_lists_share_file() {
        let transport = transport();
        let described = etf_list(&transport).unwrap();
        let tickers = etf_ticker_list(&transport).unwrap();

        assert_eq!(described.list.identifiers(), tickers.list.identifiers());
        assert_eq!(tickers.list.descriptions(), ["TDTT", "SPY"]);
    }

    #[test]
    fn test_economic_data_prefixed() {
        let loaded = economic_data_list(&transport()).unwrap();
        let first = loaded.list.get(0).unwrap();
        assert_eq!(first.identifier, "FRED/LAWFIN");
        assert_eq!(
            first.description,
            "Finance and Insurance Wages and Salaries in Louisiana"
        );
    }

    #[test]
    fn test_prefix_keeps_descriptions_aligned() {
        let mut transport = MemoryTransport::new();
        transport.insert(
            url(ListSource::Dow),
            "Ticker,Sector,Name\nMMM,Industrials,3M Co\nAXP,Financials,American Express\n",
        );

        let loaded = dow_constituents(&transport).unwrap();
        assert_eq!(loaded.list.identifiers(), ["WIKI/MMM", "WIKI/AXP"]);
        assert_eq!(loaded.list.descriptions(), ["3M Co", "American Express"]);
        assert_eq!(
            transport.requests(),
            ["https://s3.amazonaws.com/quandl-static-content/Ticker+CSV%27s/Indicies/dowjonesIA.csv"]
        );
    }

    #[test]
    fn test_sp500_lists() {
        let transport = transport();
        let constituents = sp500_constituents(&transport).unwrap();
        assert_eq!(constituents.list.identifiers(), ["WIKI/MMM", "WIKI/ACE"]);
        assert_eq!(constituents.list.descriptions(), ["3M Co", "ACE Limited"]);

        let sectors = sp500_sector_mappings(&transport).unwrap();
        assert_eq!(sectors.list.descriptions(), ["Industrials", "Financials"]);
    }

    #[test]
    fn test_embedded_lists_need_no_transport() {
        let empty = MemoryTransport::new();

        let ratios = financial_ratios_list(&empty).unwrap();
        assert_eq!(ratios.len(), 70);
        let entry = ratios.list.get(10).unwrap();
        assert_eq!((entry.identifier, entry.description), ("PE_FWD", "Forward PE Ratio"));

        let bitcoin = bitcoin_list(&empty).unwrap();
        assert_eq!(bitcoin.list.identifiers(), ["BITCOIN/BITSTAMPUSD"]);
        assert!(empty.requests().is_empty());
    }

    #[test]
    fn test_skipped_rows_are_reported() {
        let loaded = commodities_list(&transport()).unwrap();
        assert_eq!(loaded.list.identifiers(), ["WGC/GOLD_DAILY_USD", "CHRIS/ICE_B1"]);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].index, 3);
    }

    #[test]
    fn test_all_securities_concatenates_in_order() {
        let transport = transport();
        let all = all_securities(&transport).unwrap();

        let expected: usize = ListSource::SECURITIES
            .iter()
            .map(|source| fetch_list(&transport, *source).unwrap().len())
            .sum();
        assert_eq!(all.len(), expected);
        assert_eq!(all.list.identifiers().len(), all.list.descriptions().len());

        assert_eq!(all.list.get(0).unwrap().identifier, "WIKI/ACT");
        assert_eq!(
            all.list.get(all.len() - 1).unwrap().identifier,
            "BITCOIN/BITSTAMPUSD"
        );
        assert_eq!(all.skipped.len(), 1);
    }

    #[test]
    fn test_missing_source_fails() {
        let result = dow_constituents(&transport());
        assert!(matches!(result, Err(QuandlError::Transport(_))));
    }
}
