//! Periodic cleanup of expired links.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Removes links whose expiry instant has passed.
///
/// `sweep` holds the cleanup logic; the schedule that drives it lives in
/// server bootstrap. Sweeps rely solely on the store's atomic bulk delete
/// and are safe to run while requests are being served: a link expiring
/// mid-redirect may cause that one redirect to miss, which is accepted.
///
/// Visit rows are left untouched; the log outlives its links.
pub struct ExpiryReaper {
    links: Arc<dyn LinkRepository>,
}

impl ExpiryReaper {
    /// Creates a new reaper over the given link store.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Runs one cleanup pass and returns the number of removed links.
    ///
    /// Links with `expires_at` strictly before now are deleted together with
    /// their content index entries. A pass with nothing to do is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the underlying storage error; the scheduler logs it and
    /// retries on the next tick.
    pub async fn sweep(&self) -> Result<u64, AppError> {
        let expired = self.links.find_expired_before(Utc::now()).await?;

        if expired.is_empty() {
            return Ok(0);
        }

        let codes: Vec<String> = expired.into_iter().map(|link| link.code).collect();
        let removed = self.links.delete_many(&codes).await?;

        tracing::info!(removed, "Deleted expired links");

        Ok(removed)
    }
}
