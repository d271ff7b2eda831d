//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for links and the content index.
///
/// The link row and its content index entry share a transaction on create
/// and on delete, so the pair is always durable or absent together.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        let link: Link = sqlx::query_as(
            r#"
            INSERT INTO links (code, original_url, expires_at)
            VALUES ($1, $2, $3)
            RETURNING code, original_url, click_count, created_at, expires_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .bind(new_link.expires_at)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(digest) = &new_link.digest {
            sqlx::query("INSERT INTO content_index (digest, code) VALUES ($1, $2)")
                .bind(digest)
                .bind(&new_link.code)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as(
            r#"
            SELECT code, original_url, click_count, created_at, expires_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_digest(&self, digest: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as(
            r#"
            SELECT l.code, l.original_url, l.click_count, l.created_at, l.expires_at
            FROM content_index ci
            JOIN links l ON l.code = ci.code
            WHERE ci.digest = $1
            "#,
        )
        .bind(digest)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM content_index WHERE code = $1")
            .bind(code)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_expired_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as(
            r#"
            SELECT code, original_url, click_count, created_at, expires_at
            FROM links
            WHERE expires_at IS NOT NULL AND expires_at < $1
            "#,
        )
        .bind(cutoff)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn delete_many(&self, codes: &[String]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM content_index WHERE code = ANY($1)")
            .bind(codes)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM links WHERE code = ANY($1)")
            .bind(codes)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
