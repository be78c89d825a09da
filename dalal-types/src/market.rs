//! Quote, search and news payloads served next to the historical series.

use serde::{Deserialize, Serialize};

/// Point-in-time quote snapshot for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    /// Company display name.
    pub name: String,
    /// Last traded price.
    pub current_price: f64,
    /// Absolute change against the previous close.
    pub change: f64,
    /// Relative change against the previous close, in percent.
    pub change_percent: f64,
    /// Session open.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Session volume.
    pub volume: u64,
    /// Pre-formatted market capitalisation, e.g. `₹17.2T`.
    pub market_cap: String,
    /// Price/earnings ratio.
    pub pe: f64,
    /// Dividend yield in percent.
    pub dividend: f64,
}

/// One row of the symbol search catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Ticker symbol.
    pub symbol: String,
    /// Company display name.
    pub name: String,
    /// Listing exchange code.
    pub exchange: String,
    /// Instrument type, e.g. `Equity`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A news headline attached to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub title: String,
    /// Publisher name.
    pub source: String,
    /// Publication date, formatted `%d %b %Y`.
    pub date: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Link to the article.
    pub url: String,
}
