//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Request to shorten a URL.
///
/// The successful response body is the resolved short code as plain text,
/// with 201 for a newly created link and 200 for a deduplicated one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Required and non-empty; content is otherwise
    /// unrestricted.
    #[serde(default)]
    #[validate(length(min = 1, message = "originalUrl must not be empty"))]
    pub original_url: String,

    /// Optional caller-chosen short code, at most 19 characters.
    pub alias: Option<String>,

    /// Optional expiry timestamp, RFC 3339 or RFC 2822.
    pub expires_at: Option<String>,
}

/// Parses an expiry timestamp in either RFC 3339 or RFC 2822 form.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for anything else.
pub fn parse_expires_at(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| {
            AppError::bad_request(
                "expiresAt is not a recognized timestamp",
                json!({ "expiresAt": value }),
            )
        })
}
