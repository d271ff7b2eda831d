//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened URL with its usage counter and optional expiry.
///
/// `code` is the unique token appearing in the short URL path, either chosen
/// by the caller (alias) or generated by the service.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Input data for creating a new link.
///
/// `digest` carries the content fingerprint to index alongside the link;
/// it is `None` for aliased submissions, which are never deduplicated.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub digest: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link {
            code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            click_count: 0,
            created_at: now,
            expires_at: None,
        };

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.click_count, 0);
        assert_eq!(link.created_at, now);
        assert!(link.expires_at.is_none());
    }

    #[test]
    fn test_new_link_without_digest_is_not_indexed() {
        let new_link = NewLink {
            code: "my-alias".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            digest: None,
            expires_at: None,
        };

        assert!(new_link.digest.is_none());
    }
}
