//! Liveness endpoint.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Reports process liveness.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
