//! Admin service
//!
//! Admin capability checks and the review dashboard queries.

use folio_core::value_objects::ApprovalState;
use folio_core::DomainError;
use tracing::instrument;
use uuid::Uuid;

use crate::dto::{ListProfilesQuery, ProfileResponse, ProfileStatsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check whether a user holds the admin capability
    #[instrument(skip(self))]
    pub async fn is_admin(&self, user_id: Uuid) -> ServiceResult<bool> {
        Ok(self.ctx.admin_repo().is_admin(user_id).await?)
    }

    /// Fail with `NotAdmin` unless the user is an admin
    pub async fn require_admin(&self, user_id: Uuid) -> ServiceResult<()> {
        if self.is_admin(user_id).await? {
            Ok(())
        } else {
            Err(DomainError::NotAdmin.into())
        }
    }

    /// List profiles newest first, optionally filtered by approval state
    #[instrument(skip(self))]
    pub async fn list_profiles(
        &self,
        actor: Uuid,
        query: ListProfilesQuery,
    ) -> ServiceResult<Vec<ProfileResponse>> {
        self.require_admin(actor).await?;

        let state = parse_state_filter(query.state.as_deref())?;
        let profiles = self.ctx.profile_repo().list(state).await?;

        Ok(profiles.iter().map(ProfileResponse::from).collect())
    }

    /// Count profiles by approval state
    #[instrument(skip(self))]
    pub async fn stats(&self, actor: Uuid) -> ServiceResult<ProfileStatsResponse> {
        self.require_admin(actor).await?;

        let stats = self.ctx.profile_repo().stats().await?;
        Ok(ProfileStatsResponse::from(stats))
    }
}

/// An empty or missing filter lists every profile
fn parse_state_filter(value: Option<&str>) -> ServiceResult<Option<ApprovalState>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => ApprovalState::parse(raw).map(Some).ok_or_else(|| {
            ServiceError::validation(format!(
                "state must be 'pending' or 'approved', got '{raw}'"
            ))
        }),
    }
}
