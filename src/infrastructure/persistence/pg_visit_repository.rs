//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only visit log.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let visit = sqlx::query_as(
            r#"
            INSERT INTO visits (code, source_address)
            VALUES ($1, $2)
            RETURNING id, code, source_address, occurred_at
            "#,
        )
        .bind(&new_visit.code)
        .bind(&new_visit.source_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(visit)
    }

    async fn list_recent(&self, code: &str, limit: i64) -> Result<Vec<Visit>, AppError> {
        let visits = sqlx::query_as(
            r#"
            SELECT id, code, source_address, occurred_at
            FROM visits
            WHERE code = $1
            ORDER BY occurred_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(code)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(visits)
    }
}
