use async_trait::async_trait;

use dalal_types::{Bar, DalalError, NewsItem, SearchResult, StockInfo};

/// Focused role trait for connectors that provide OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Produce the historical series of `symbol` for a timeframe code such as `"1mo"`.
    ///
    /// Connectors decide how unknown codes and symbols are treated (substitute
    /// or `DalalError::UnknownTimeframe` / `DalalError::UnknownSymbol`).
    async fn history(&self, symbol: &str, timeframe: &str) -> Result<Vec<Bar>, DalalError>;
}

/// Focused role trait for connectors that provide quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch a point-in-time quote snapshot for the given symbol.
    async fn quote(&self, symbol: &str) -> Result<StockInfo, DalalError>;
}

/// Focused role trait for connectors that provide symbol search.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the symbol catalog. An empty query returns the default listing.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DalalError>;
}

/// Focused role trait for connectors that provide news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch recent headlines for the given symbol, newest first.
    async fn news(&self, symbol: &str) -> Result<Vec<NewsItem>, DalalError>;
}

/// Market data source consumed by the HTTP service.
///
/// Capabilities are advertised through the `as_*_provider` accessors; the
/// defaults report every capability as absent.
pub trait DalalConnector: Send + Sync {
    /// A stable identifier for logs and health output (e.g. "dalal-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// If implemented, returns a trait object for symbol search.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }

    /// If implemented, returns a trait object for news headlines.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}
