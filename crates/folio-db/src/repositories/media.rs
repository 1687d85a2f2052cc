//! PostgreSQL implementation of MediaRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Media;
use folio_core::traits::{MediaRepository, RepoResult};

use crate::models::MediaModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MediaRepository
#[derive(Clone)]
pub struct PgMediaRepository {
    pool: PgPool,
}

impl PgMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Media>> {
        let rows = sqlx::query_as::<_, MediaModel>(
            r"
            SELECT id, profile_id, type, url, title, created_at
            FROM media
            WHERE profile_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Media::try_from).collect()
    }

    #[instrument(skip(self, media), fields(media_id = %media.id))]
    async fn create(&self, media: &Media) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO media (id, profile_id, type, url, title, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(media.id)
        .bind(media.profile_id)
        .bind(media.media_type.as_str())
        .bind(&media.url)
        .bind(&media.title)
        .bind(media.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<Option<Media>> {
        let row = sqlx::query_as::<_, MediaModel>(
            r"
            DELETE FROM media
            WHERE id = $1 AND profile_id = $2
            RETURNING id, profile_id, type, url, title, created_at
            ",
        )
        .bind(id)
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Media::try_from).transpose()
    }
}
