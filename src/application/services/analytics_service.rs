//! Usage statistics for short links.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;

/// Number of recent source addresses returned by analytics.
const RECENT_VISIT_LIMIT: i64 = 5;

/// Usage summary for a single link.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub click_count: i64,
    /// Most recent first, capped at five entries.
    pub source_addresses: Vec<String>,
}

/// Read-only service for link metadata and usage statistics.
pub struct AnalyticsService {
    links: Arc<dyn LinkRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(links: Arc<dyn LinkRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { links, visits }
    }

    /// Retrieves a link's metadata by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown.
    pub async fn get_info(&self, code: &str) -> Result<Link, AppError> {
        self.links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Retrieves the click count and recent visitor addresses for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown.
    pub async fn get_analytics(&self, code: &str) -> Result<LinkAnalytics, AppError> {
        let link = self.get_info(code).await?;

        let visits = self.visits.list_recent(code, RECENT_VISIT_LIMIT).await?;

        Ok(LinkAnalytics {
            click_count: link.click_count,
            source_addresses: visits.into_iter().map(|v| v.source_address).collect(),
        })
    }
}
