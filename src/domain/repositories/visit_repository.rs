//! Repository trait for the visit log.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and querying visits.
///
/// The visit log is append-only; nothing in the system mutates or removes
/// rows once written.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit. Single-row atomic insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Returns up to `limit` visits for a code, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, code: &str, limit: i64) -> Result<Vec<Visit>, AppError>;
}
