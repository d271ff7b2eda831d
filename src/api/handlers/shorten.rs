//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, parse_expires_at};
use crate::application::services::ShortenStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "alias": "my-link",                      // optional
///   "expiresAt": "2026-03-20T21:12:00Z"      // optional
/// }
/// ```
///
/// # Response
///
/// The short code as plain text. 201 Created for a new link; 200 OK when
/// the URL was already shortened and the existing code is returned.
///
/// # Errors
///
/// Returns 400 Bad Request when `originalUrl` is missing or empty, the
/// alias is too long or already taken, or `expiresAt` cannot be parsed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, String), AppError> {
    payload.validate()?;

    let expires_at = payload
        .expires_at
        .as_deref()
        .map(parse_expires_at)
        .transpose()?;

    let outcome = state
        .link_service
        .shorten(payload.original_url, payload.alias, expires_at)
        .await?;

    let status = match outcome.status {
        ShortenStatus::Created => StatusCode::CREATED,
        ShortenStatus::AlreadyExisted => StatusCode::OK,
    };

    Ok((status, outcome.link.code))
}
