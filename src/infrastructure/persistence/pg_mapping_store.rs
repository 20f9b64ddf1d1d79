//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

type MappingRow = (i64, String, String, DateTime<Utc>);

/// PostgreSQL store for short code mappings.
///
/// Atomicity comes from the `url_mappings_short_code_key` unique constraint:
/// `ON CONFLICT DO NOTHING` lets exactly one of several racing inserts return a row.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn try_insert(&self, new_mapping: NewUrlMapping) -> Result<bool, AppError> {
        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO url_mappings (short_code, long_url)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(inserted.is_some())
    }

    async fn lookup(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(id, short_code, long_url, created_at)| {
            UrlMapping::new(id, short_code, long_url, created_at)
        }))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
