//! PostgreSQL implementation of LinkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Link;
use folio_core::traits::{LinkRepository, RepoResult};

use crate::models::LinkModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Link>> {
        let rows = sqlx::query_as::<_, LinkModel>(
            r"
            SELECT id, profile_id, label, url, created_at
            FROM links
            WHERE profile_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn create(&self, link: &Link) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO links (id, profile_id, label, url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(link.id)
        .bind(link.profile_id)
        .bind(&link.label)
        .bind(&link.url)
        .bind(link.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND profile_id = $2")
            .bind(id)
            .bind(profile_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
