//! DTO for the link info endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata returned for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfoResponse {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}
