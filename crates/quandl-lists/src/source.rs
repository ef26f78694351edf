//! Reference list sources and their file layouts.

use quandl_fetch::Dialect;
use quandl_types::QuandlError;
use std::str::FromStr;

/// Base URL of the static reference files.
pub const STATIC_ROOT: &str = "https://s3.amazonaws.com/quandl-static-content/";

const STOCK_CODE_LIST: &str = "quandl-stock-code-list.csv";
const WIKI_TICKERS: &str = "Ticker+CSV%27s/WIKI_tickers.csv";
const ETFS: &str = "Ticker+CSV%27s/ETFs.csv";
const STOCK_INDICES: &str = "Ticker+CSV%27s/Stock+Exchanges/Indicies.csv";
const COMMODITIES: &str = "Ticker+CSV%27s/commodities.csv";
const FRED_CODES: &str = "Ticker+CSV%27s/FRED/fred_allcodes.csv";
const SP500: &str = "Ticker+CSV%27s/Indicies/SP500.csv";
const DOW: &str = "Ticker+CSV%27s/Indicies/dowjonesIA.csv";
const NASDAQ_COMPOSITE: &str = "Ticker+CSV%27s/Indicies/NASDAQComposite.csv";
const NASDAQ_100: &str = "Ticker+CSV%27s/Indicies/nasdaq100.csv";
const FTSE_100: &str = "Ticker+CSV%27s/Indicies/FTSE100.csv";

/// Prefix for end-of-day US equity datasets.
pub const WIKI_PREFIX: &str = "WIKI/";

/// Prefix for Federal Reserve economic datasets.
pub const FRED_PREFIX: &str = "FRED/";

/// Embedded tables shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddedTable {
    /// Damodaran financial ratio codes.
    FinancialRatios,
    /// The Bitstamp bitcoin series.
    Bitcoin,
}

/// Where a list's rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A static file under [`STATIC_ROOT`].
    Remote {
        /// Path relative to [`STATIC_ROOT`], already URL-encoded.
        path: &'static str,
        /// Delimiter and line ending variant of the file.
        dialect: Dialect,
    },
    /// A table compiled into the crate.
    Embedded(EmbeddedTable),
}

/// Column layout of a reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListLayout {
    /// Where the rows come from.
    pub origin: Origin,
    /// Position of the identifier column.
    pub id_column: usize,
    /// Position of the description column.
    pub description_column: usize,
    /// Whether row 0 is a header to leave out.
    pub skip_header: bool,
    /// Prefix prepended to every identifier.
    pub prefix: Option<&'static str>,
}

impl ListLayout {
    const fn remote(
        path: &'static str,
        dialect: Dialect,
        id_column: usize,
        description_column: usize,
        prefix: Option<&'static str>,
    ) -> Self {
        Self {
            origin: Origin::Remote { path, dialect },
            id_column,
            description_column,
            skip_header: true,
            prefix,
        }
    }

    const fn embedded(table: EmbeddedTable) -> Self {
        Self {
            origin: Origin::Embedded(table),
            id_column: 0,
            description_column: 1,
            skip_header: false,
            prefix: None,
        }
    }

    /// Returns the full URL of a remote list.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        match self.origin {
            Origin::Remote { path, .. } => Some(format!("{STATIC_ROOT}{path}")),
            Origin::Embedded(_) => None,
        }
    }
}

/// A known reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSource {
    /// WIKI stock codes and company names.
    Stocks,
    /// Price codes and tickers of the stock code list.
    StockTickers,
    /// ETF codes and descriptions.
    Etfs,
    /// ETF codes and tickers.
    EtfTickers,
    /// Stock index codes and descriptions.
    StockIndices,
    /// Commodity codes and names.
    Commodities,
    /// The Bitstamp bitcoin series.
    Bitcoin,
    /// Damodaran financial ratio codes.
    FinancialRatios,
    /// FRED economic series.
    EconomicData,
    /// S&P 500 constituents.
    Sp500,
    /// Dow Jones Industrial Average constituents.
    Dow,
    /// NASDAQ Composite constituents.
    NasdaqComposite,
    /// NASDAQ-100 constituents.
    Nasdaq100,
    /// FTSE 100 constituents.
    Ftse100,
    /// S&P 500 constituents mapped to their sector.
    Sp500Sectors,
}

impl ListSource {
    /// Every known source.
    pub const ALL: &'static [Self] = &[
        Self::Stocks,
        Self::StockTickers,
        Self::Etfs,
        Self::EtfTickers,
        Self::StockIndices,
        Self::Commodities,
        Self::Bitcoin,
        Self::FinancialRatios,
        Self::EconomicData,
        Self::Sp500,
        Self::Dow,
        Self::NasdaqComposite,
        Self::Nasdaq100,
        Self::Ftse100,
        Self::Sp500Sectors,
    ];

    /// Sources combined into the all-securities catalog, in order.
    pub const SECURITIES: &'static [Self] = &[
        Self::Stocks,
        Self::StockTickers,
        Self::Etfs,
        Self::EtfTickers,
        Self::StockIndices,
        Self::Commodities,
        Self::Bitcoin,
    ];

    /// Returns the file layout of this source.
    #[must_use]
    pub const fn layout(&self) -> ListLayout {
        use Dialect::{CarriageReturn, Comma, Pipe};

        match self {
            Self::Stocks => ListLayout::remote(WIKI_TICKERS, Comma, 0, 1, None),
            Self::StockTickers => ListLayout::remote(STOCK_CODE_LIST, Comma, 2, 0, None),
            Self::Etfs => ListLayout::remote(ETFS, Comma, 1, 2, None),
            Self::EtfTickers => ListLayout::remote(ETFS, Comma, 1, 0, None),
            Self::StockIndices => ListLayout::remote(STOCK_INDICES, Comma, 1, 2, None),
            // Codes in this file already carry their source.
            Self::Commodities => ListLayout::remote(COMMODITIES, Comma, 1, 0, None),
            Self::Bitcoin => ListLayout::embedded(EmbeddedTable::Bitcoin),
            Self::FinancialRatios => ListLayout::embedded(EmbeddedTable::FinancialRatios),
            Self::EconomicData => ListLayout::remote(FRED_CODES, Pipe, 0, 1, Some(FRED_PREFIX)),
            Self::Sp500 => ListLayout::remote(SP500, CarriageReturn, 0, 2, Some(WIKI_PREFIX)),
            Self::Dow => ListLayout::remote(DOW, Comma, 0, 2, Some(WIKI_PREFIX)),
            Self::NasdaqComposite => {
                ListLayout::remote(NASDAQ_COMPOSITE, Comma, 0, 2, Some(WIKI_PREFIX))
            }
            Self::Nasdaq100 => ListLayout::remote(NASDAQ_100, Comma, 0, 2, Some(WIKI_PREFIX)),
            Self::Ftse100 => ListLayout::remote(FTSE_100, Comma, 1, 2, None),
            Self::Sp500Sectors => {
                ListLayout::remote(SP500, CarriageReturn, 0, 3, Some(WIKI_PREFIX))
            }
        }
    }

    /// Returns the command-line name of this source.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::StockTickers => "stock-tickers",
            Self::Etfs => "etfs",
            Self::EtfTickers => "etf-tickers",
            Self::StockIndices => "stock-indices",
            Self::Commodities => "commodities",
            Self::Bitcoin => "bitcoin",
            Self::FinancialRatios => "financial-ratios",
            Self::EconomicData => "economic",
            Self::Sp500 => "sp500",
            Self::Dow => "dow",
            Self::NasdaqComposite => "nasdaq-composite",
            Self::Nasdaq100 => "nasdaq100",
            Self::Ftse100 => "ftse100",
            Self::Sp500Sectors => "sp500-sectors",
        }
    }

    /// Returns a short description of what the list contains.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Stocks => "WIKI stock codes and company names",
            Self::StockTickers => "Stock price codes and tickers",
            Self::Etfs => "ETF codes and descriptions",
            Self::EtfTickers => "ETF codes and tickers",
            Self::StockIndices => "Stock index codes and descriptions",
            Self::Commodities => "Commodity codes and names",
            Self::Bitcoin => "Bitcoin exchange rate on Bitstamp",
            Self::FinancialRatios => "Damodaran financial ratio codes",
            Self::EconomicData => "FRED economic series",
            Self::Sp500 => "S&P 500 constituents",
            Self::Dow => "Dow Jones Industrial Average constituents",
            Self::NasdaqComposite => "NASDAQ Composite constituents",
            Self::Nasdaq100 => "NASDAQ-100 constituents",
            Self::Ftse100 => "FTSE 100 constituents",
            Self::Sp500Sectors => "S&P 500 constituents and sectors",
        }
    }
}

impl std::fmt::Display for ListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ListSource {
    type Err = QuandlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|source| source.name() == wanted)
            .ok_or_else(|| QuandlError::UnknownSource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for source in ListSource::ALL {
            assert_eq!(source.name().parse::<ListSource>().unwrap(), *source);
        }
        assert_eq!("SP500_SECTORS".parse::<ListSource>().unwrap(), ListSource::Sp500Sectors);
        assert!(matches!(
            "nikkei".parse::<ListSource>(),
            Err(QuandlError::UnknownSource(_))
        ));
    }

    #[test]
    fn test_layouts() {
        let sp500 = ListSource::Sp500.layout();
        assert_eq!(
            sp500.origin,
            Origin::Remote {
                path: SP500,
                dialect: Dialect::CarriageReturn
            }
        );
        assert_eq!((sp500.id_column, sp500.description_column), (0, 2));
        assert_eq!(sp500.prefix, Some("WIKI/"));

        let economic = ListSource::EconomicData.layout();
        assert_eq!(economic.prefix, Some("FRED/"));
        assert!(matches!(economic.origin, Origin::Remote { dialect: Dialect::Pipe, .. }));

        let ratios = ListSource::FinancialRatios.layout();
        assert!(!ratios.skip_header);
        assert!(ratios.url().is_none());
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            ListSource::StockTickers.layout().url().unwrap(),
            "https://s3.amazonaws.com/quandl-static-content/quandl-stock-code-list.csv"
        );
        assert_eq!(
            ListSource::Dow.layout().url().unwrap(),
            "https://s3.amazonaws.com/quandl-static-content/Ticker+CSV%27s/Indicies/dowjonesIA.csv"
        );
    }

    #[test]
    fn test_securities_order() {
        assert_eq!(ListSource::SECURITIES.first(), Some(&ListSource::Stocks));
        assert_eq!(ListSource::SECURITIES.last(), Some(&ListSource::Bitcoin));
        assert!(!ListSource::SECURITIES.contains(&ListSource::EconomicData));
    }
}
