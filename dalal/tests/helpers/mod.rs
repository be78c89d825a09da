#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use dalal::ServiceConfig;
use dalal_core::{DalalConnector, FixedClock, ResolutionMode};
use dalal_mock::MockMarket;
use serde_json::Value;
use tower::ServiceExt;

/// Wednesday 2025-03-05 16:00, after the session closed.
pub fn clock() -> Arc<FixedClock> {
    let now = NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(16, 0, 0)
        .unwrap();
    Arc::new(FixedClock(now))
}

pub fn market(mode: ResolutionMode, seed: u64) -> Arc<dyn DalalConnector> {
    Arc::new(
        MockMarket::builder()
            .clock(clock())
            .mode(mode)
            .seed(seed)
            .build(),
    )
}

pub fn app(mode: ResolutionMode, seed: u64) -> Router {
    dalal::router(market(mode, seed), &ServiceConfig::default())
}

pub fn lenient() -> Router {
    app(ResolutionMode::Lenient, 42)
}

pub fn strict() -> Router {
    app(ResolutionMode::Strict, 42)
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(app, req).await;
    (status, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
