//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing short links and the content index.
///
/// The store is the single source of truth: uniqueness of `code`, atomicity
/// of the link/content-index pair, and click-counter serialization are all
/// enforced here, never in process memory.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// When `new_link.digest` is present, the content index entry is written
    /// in the same transaction as the link row: both are durable or neither.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] when the code (or, for a racing
    /// duplicate submission, the digest) already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// Indexed primary-key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by the content fingerprint of its original URL.
    ///
    /// Only links created without an alias are reachable this way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_digest(&self, digest: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter for a code.
    ///
    /// Single read-modify-write in the store; concurrent increments for the
    /// same code serialize there and none are lost, even across multiple
    /// service instances.
    ///
    /// Returns `Ok(true)` when a row was updated, `Ok(false)` when the code
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Deletes a link and its content index entry together.
    ///
    /// Returns `Ok(true)` when the link existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all links whose expiry lies strictly before `cutoff`.
    ///
    /// Links without an expiry are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_expired_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<Link>, AppError>;

    /// Bulk-deletes links and their content index entries.
    ///
    /// Returns the number of link rows removed. Codes that no longer exist
    /// are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_many(&self, codes: &[String]) -> Result<u64, AppError>;
}
