//! Router assembly and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use dalal_core::{DalalConnector, SystemClock};
use dalal_mock::MockMarket;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServiceConfig;
use crate::handlers;

/// Routes served by [`router`], as `(method, path, description)`.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/health", "liveness probe"),
    ("GET", "/api/stock/{symbol}", "quote for a symbol"),
    (
        "GET",
        "/api/historical/{symbol}?timeframe={code}",
        "synthetic OHLCV history (1d, 1w, 1mo, 3mo, 6mo, 1y, 5y)",
    ),
    ("GET", "/api/search?q={query}", "symbol and company search"),
    ("GET", "/api/news/{symbol}", "recent headlines for a symbol"),
];

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Connector answering market-data requests.
    pub connector: Arc<dyn DalalConnector>,
    /// When the router was built.
    pub started: Instant,
}

impl AppState {
    /// State over `connector`, starting the uptime clock now.
    #[must_use]
    pub fn new(connector: Arc<dyn DalalConnector>) -> Self {
        Self {
            connector,
            started: Instant::now(),
        }
    }
}

/// Mock market configured from `config`: exchange clock, resolution mode and seed.
#[must_use]
pub fn mock_market(config: &ServiceConfig) -> MockMarket {
    let mut builder = MockMarket::builder()
        .clock(Arc::new(SystemClock::new(config.timezone)))
        .mode(config.resolution);
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    builder.build()
}

/// Build the HTTP router over `connector`.
///
/// Unmatched paths are served from `config.static_dir` when set, falling back
/// to its `index.html` so client-side routes resolve.
pub fn router(connector: Arc<dyn DalalConnector>, config: &ServiceConfig) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/stock/:symbol", get(handlers::stock))
        .route("/api/historical/:symbol", get(handlers::historical))
        .route("/api/search", get(handlers::search))
        .route("/api/news/:symbol", get(handlers::news))
        .with_state(AppState::new(connector));

    let app = match &config.static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            api.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => api,
    };

    let app = if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };
    app.layer(TraceLayer::new_for_http())
}

/// Print [`ROUTES`] to stdout.
pub fn print_routes() {
    println!("dalal v{}", env!("CARGO_PKG_VERSION"));
    for (method, path, description) in ROUTES {
        println!("  {method:<6} {path:<45} {description}");
    }
}

/// Bind `config.server_address()` and serve until Ctrl-C.
///
/// # Errors
/// Returns an error if the address does not parse, the port cannot be bound
/// or the server fails while running.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let addr: SocketAddr = config
        .server_address()
        .parse()
        .with_context(|| format!("invalid server address '{}'", config.server_address()))?;

    let market = Arc::new(mock_market(&config));
    let app = router(market, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, resolution = ?config.resolution, timezone = %config.timezone, "dalal listening");
    if let Some(dir) = &config.static_dir {
        info!(static_dir = %dir.display(), "serving static files");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("dalal stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
