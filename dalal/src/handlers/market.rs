//! Market-data endpoints: quote, history, search and news.

use axum::Json;
use axum::extract::{Path, Query, State};
use dalal_core::{Bar, DalalError, NewsItem, SearchResult, StockInfo, Timeframe};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::server::AppState;

/// Query string of `GET /api/historical/{symbol}`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Timeframe code; `1mo` when absent.
    pub timeframe: Option<String>,
}

/// Query string of `GET /api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Free-text query matched against symbols and company names.
    #[serde(default)]
    pub q: String,
}

/// `GET /api/stock/{symbol}`
pub async fn stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<StockInfo>, ApiError> {
    let provider = state
        .connector
        .as_quote_provider()
        .ok_or_else(|| DalalError::unsupported("quote"))?;
    info!(%symbol, "quote");
    Ok(Json(provider.quote(&symbol).await?))
}

/// `GET /api/historical/{symbol}?timeframe={code}`
pub async fn historical(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<Bar>>, ApiError> {
    let provider = state
        .connector
        .as_history_provider()
        .ok_or_else(|| DalalError::unsupported("history"))?;
    let timeframe = query
        .timeframe
        .unwrap_or_else(|| Timeframe::default().code().to_string());
    let bars = provider.history(&symbol, &timeframe).await?;
    info!(%symbol, %timeframe, bars = bars.len(), "history");
    Ok(Json(bars))
}

/// `GET /api/search?q={query}`
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let provider = state
        .connector
        .as_search_provider()
        .ok_or_else(|| DalalError::unsupported("search"))?;
    let results = provider.search(&query.q).await?;
    info!(q = %query.q, hits = results.len(), "search");
    Ok(Json(results))
}

/// `GET /api/news/{symbol}`
pub async fn news(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let provider = state
        .connector
        .as_news_provider()
        .ok_or_else(|| DalalError::unsupported("news"))?;
    info!(%symbol, "news");
    Ok(Json(provider.news(&symbol).await?))
}
