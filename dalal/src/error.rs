//! Mapping from domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dalal_core::DalalError;
use serde_json::json;

/// A `DalalError` on its way out of a handler.
///
/// Rendered as `{"error": "<message>"}` with a status derived from the variant.
#[derive(Debug)]
pub struct ApiError(pub DalalError);

impl ApiError {
    /// Status code for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DalalError::UnknownTimeframe { .. } | DalalError::InvalidArg(_) => {
                StatusCode::BAD_REQUEST
            }
            DalalError::UnknownSymbol { .. } | DalalError::NotFound { .. } => StatusCode::NOT_FOUND,
            DalalError::Unsupported { .. } => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DalalError> for ApiError {
    fn from(err: DalalError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_map_to_client_errors() {
        assert_eq!(
            ApiError(DalalError::unknown_timeframe("2h")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DalalError::invalid_arg("empty symbol")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DalalError::unknown_symbol("ZZZZ")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(DalalError::not_found("news for ZZZZ")).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn missing_capability_is_not_implemented() {
        assert_eq!(
            ApiError(DalalError::unsupported("news")).status(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            ApiError(DalalError::Other("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
