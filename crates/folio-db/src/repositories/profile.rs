//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::{Profile, ProfileStats};
use folio_core::error::DomainError;
use folio_core::traits::{ProfileRepository, RepoResult};
use folio_core::value_objects::ApprovalState;

use crate::mappers::approval_filter;
use crate::models::{ProfileModel, ProfileStatsModel};

use super::error::{map_db_error, map_unique_violation};

const PROFILE_COLUMNS: &str =
    "id, user_id, handle, headline, bio, avatar_url, is_approved, created_at, updated_at";

/// Unique constraint on `profiles.handle`
const HANDLE_CONSTRAINT: &str = "profiles_handle_key";

fn profile_conflict(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(HANDLE_CONSTRAINT) => DomainError::HandleTaken,
        _ => DomainError::ProfileAlreadyExists,
    }
}

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_public_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE handle = $1 AND is_approved = TRUE"
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn handle_taken(&self, handle: &str, exclude_id: Option<Uuid>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM profiles
                WHERE handle = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            ",
        )
        .bind(handle)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, user_id, handle, headline, bio, avatar_url, is_approved, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(profile.handle.as_str())
        .bind(&profile.headline)
        .bind(&profile.bio)
        .bind(&profile.avatar_url)
        .bind(profile.is_approved)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, profile_conflict))?;

        Ok(())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET handle = $2, headline = $3, bio = $4, avatar_url = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(profile.id)
        .bind(profile.handle.as_str())
        .bind(&profile.headline)
        .bind(&profile.bio)
        .bind(&profile.avatar_url)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, profile_conflict))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::profile_not_found(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_approval(
        &self,
        id: Uuid,
        approved: bool,
        at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET is_approved = $2, updated_at = $3
            WHERE id = $1 AND is_approved <> $2
            ",
        )
        .bind(id)
        .bind(approved)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list(&self, state: Option<ApprovalState>) -> RepoResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileModel>(&format!(
            r"
            SELECT {PROFILE_COLUMNS} FROM profiles
            WHERE ($1::boolean IS NULL OR is_approved = $1)
            ORDER BY created_at DESC, id DESC
            "
        ))
        .bind(approval_filter(state))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<ProfileStats> {
        let row = sqlx::query_as::<_, ProfileStatsModel>(
            r"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE is_approved) AS approved
            FROM profiles
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_conflict_by_constraint() {
        assert!(matches!(
            profile_conflict(Some("profiles_handle_key")),
            DomainError::HandleTaken
        ));
        assert!(matches!(
            profile_conflict(Some("profiles_user_id_key")),
            DomainError::ProfileAlreadyExists
        ));
    }
}
