//! Liveness probe.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::server::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Name of the connector answering market-data requests.
    pub connector: &'static str,
    /// Seconds since the router was built.
    pub uptime_seconds: u64,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        connector: state.connector.name(),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}
