//! Short code resolution with click tracking.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::NewVisit;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;

/// Service for resolving short codes to their original URLs.
///
/// Every successful resolve increments the link's click counter (atomically
/// in the store) and appends one visit record. The two writes are not a
/// single transaction; a crash in between under-counts visits relative to
/// clicks, which is accepted.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(links: Arc<dyn LinkRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { links, visits }
    }

    /// Resolves a short code and records the visit.
    ///
    /// Expired links that the reaper has not swept yet still resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown, or when the
    /// link was deleted between lookup and counter update.
    pub async fn resolve(&self, code: &str, source_address: &str) -> Result<String, AppError> {
        let link = self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })?;

        if !self.links.increment_clicks(code).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        let new_visit = NewVisit {
            code: code.to_string(),
            source_address: source_address.to_string(),
        };

        if let Err(e) = self.visits.record(new_visit).await {
            // The click is already counted; serve the redirect anyway.
            tracing::warn!(error = %e, code, "Failed to record visit");
        }

        Ok(link.original_url)
    }
}
