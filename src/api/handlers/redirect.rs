//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::header,
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 308 Permanent Redirect. Each successful redirect counts
/// one click and records the caller's address as a visit.
///
/// # Errors
///
/// Returns 404 Not Found when the code is unknown.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .redirect_service
        .resolve(&code, &addr.ip().to_string())
        .await?;

    // 308s are cacheable; no-store keeps clients coming back so clicks are
    // counted and expired links stop resolving once swept.
    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Redirect::permanent(&original_url),
    ))
}
