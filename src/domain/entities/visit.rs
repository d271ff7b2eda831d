//! Visit entity representing a single redirect event.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A visit recorded when a short link is resolved.
///
/// Append-only. Visits reference their link by code only and deliberately
/// survive the link's deletion.
#[derive(Debug, Clone, FromRow)]
pub struct Visit {
    pub id: i64,
    pub code: String,
    pub source_address: String,
    pub occurred_at: DateTime<Utc>,
}

/// Input data for recording a new visit.
///
/// `source_address` may be empty when the client address is unavailable.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub code: String,
    pub source_address: String,
}
