//! PostgreSQL implementation of SocialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Social;
use folio_core::traits::{RepoResult, SocialRepository};

use crate::models::SocialModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SocialRepository
#[derive(Clone)]
pub struct PgSocialRepository {
    pool: PgPool,
}

impl PgSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialRepository for PgSocialRepository {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Social>> {
        let rows = sqlx::query_as::<_, SocialModel>(
            r"
            SELECT id, profile_id, platform, handle, url, created_at
            FROM socials
            WHERE profile_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Social::try_from).collect()
    }

    #[instrument(skip(self, social), fields(social_id = %social.id))]
    async fn create(&self, social: &Social) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO socials (id, profile_id, platform, handle, url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(social.id)
        .bind(social.profile_id)
        .bind(social.platform.as_str())
        .bind(&social.handle)
        .bind(&social.url)
        .bind(social.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM socials WHERE id = $1 AND profile_id = $2")
            .bind(id)
            .bind(profile_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
