//! Link creation and deletion service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_alias};
use crate::utils::fingerprint::fingerprint;

/// Attempts at allocating a generated code before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Whether a shorten call created a new link or found an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortenStatus {
    Created,
    AlreadyExisted,
}

/// Result of a shorten call: the resolved link and how it was obtained.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub status: ShortenStatus,
    pub link: Link,
}

/// Service for creating and deleting shortened links.
///
/// Handles content deduplication, alias validation, and code generation.
/// Deduplication applies only to submissions without an alias: every aliased
/// call creates a fresh link and is never indexed by content.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Shortens a URL, reusing an existing link for already-seen content.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to shorten; must be non-empty
    /// - `alias` - Optional caller-chosen short code; an empty string is
    ///   treated as absent
    /// - `expires_at` - Optional expiry instant, enforced by the reaper
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `original_url` is empty or the
    /// alias exceeds the length limit.
    /// Returns [`AppError::AliasTaken`] when the alias belongs to another link.
    pub async fn shorten(
        &self,
        original_url: String,
        alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortenOutcome, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "originalUrl must not be empty",
                json!({ "field": "originalUrl" }),
            ));
        }

        let digest = fingerprint(&original_url);
        let alias = alias.filter(|a| !a.is_empty());

        let Some(alias) = alias else {
            if let Some(existing) = self.links.find_by_digest(&digest).await? {
                return Ok(ShortenOutcome {
                    status: ShortenStatus::AlreadyExisted,
                    link: existing,
                });
            }

            return self
                .create_with_generated_code(original_url, digest, expires_at)
                .await;
        };

        validate_alias(&alias)?;

        // Aliased links skip content dedup and are not indexed by digest.
        let new_link = NewLink {
            code: alias.clone(),
            original_url,
            digest: None,
            expires_at,
        };

        match self.links.create(new_link).await {
            Ok(link) => Ok(ShortenOutcome {
                status: ShortenStatus::Created,
                link,
            }),
            Err(AppError::AliasTaken { .. }) => Err(AppError::alias_taken(
                "Alias already in use",
                json!({ "alias": alias }),
            )),
            Err(e) => Err(e),
        }
    }

    /// Deletes a link together with its content index entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.links.delete(code).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Creates a link under a freshly generated code, retrying on conflict.
    ///
    /// A conflict means either a generated-code collision or a concurrent
    /// request shortening the same content first; in the latter case the
    /// winner's link is returned instead of creating a duplicate.
    async fn create_with_generated_code(
        &self,
        original_url: String,
        digest: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortenOutcome, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                original_url: original_url.clone(),
                digest: Some(digest.clone()),
                expires_at,
            };

            match self.links.create(new_link).await {
                Ok(link) => {
                    return Ok(ShortenOutcome {
                        status: ShortenStatus::Created,
                        link,
                    });
                }
                Err(AppError::AliasTaken { .. }) => {
                    if let Some(existing) = self.links.find_by_digest(&digest).await? {
                        return Ok(ShortenOutcome {
                            status: ShortenStatus::AlreadyExisted,
                            link: existing,
                        });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}
