//! dalal serves mock NSE market data over HTTP.
//!
//! Overview
//! - `GET /api/historical/{symbol}?timeframe=` returns a synthetic OHLCV
//!   series from `dalal_core::SeriesGenerator`, sampled on the exchange
//!   calendar and session window.
//! - `GET /api/stock/{symbol}`, `/api/search?q=` and `/api/news/{symbol}`
//!   answer from the fixtures in `dalal-mock`.
//! - Handlers talk to a `DalalConnector` through its role traits, so any
//!   connector (including `DynamicMockConnector` in tests) can sit behind
//!   the router. A connector without a capability answers `501`.
//!
//! Resolution
//! - Lenient (default): unknown timeframes fall back to `1mo`, unknown
//!   symbols get randomized prices and quotes.
//! - Strict: unknown timeframes answer `400`, unknown symbols `404`.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use dalal::{ServiceConfig, mock_market, router};
//!
//! let config = ServiceConfig::default();
//! let app = router(Arc::new(mock_market(&config)), &config);
//! let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use server::{AppState, ROUTES, mock_market, print_routes, router, serve};
