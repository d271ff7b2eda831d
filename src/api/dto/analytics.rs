//! DTO for the analytics endpoint.

use serde::Serialize;

/// Usage statistics returned for a short link.
///
/// `ip_addresses` holds the most recent visitor addresses, newest first,
/// capped at five entries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub click_count: i64,
    pub ip_addresses: Vec<String>,
}
