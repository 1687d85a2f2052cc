//! Approval service
//!
//! The two-state approval machine: `Pending <-> Approved`. Only admins move a
//! profile between states and repeating a transition changes nothing.

use chrono::Utc;
use folio_core::value_objects::ApprovalState;
use folio_core::DomainError;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::ProfileResponse;

use super::admin::AdminService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Approval service
pub struct ApprovalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApprovalService<'a> {
    /// Create a new ApprovalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Make a profile publicly visible
    #[instrument(skip(self))]
    pub async fn approve(&self, actor: Uuid, profile_id: Uuid) -> ServiceResult<ProfileResponse> {
        self.transition(actor, profile_id, ApprovalState::Approved).await
    }

    /// Take a profile back to pending
    #[instrument(skip(self))]
    pub async fn revoke(&self, actor: Uuid, profile_id: Uuid) -> ServiceResult<ProfileResponse> {
        self.transition(actor, profile_id, ApprovalState::Pending).await
    }

    async fn transition(
        &self,
        actor: Uuid,
        profile_id: Uuid,
        to: ApprovalState,
    ) -> ServiceResult<ProfileResponse> {
        AdminService::new(self.ctx).require_admin(actor).await?;

        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(profile_id))?;

        let from = profile.approval_state();
        let at = Utc::now();
        let changed = self
            .ctx
            .profile_repo()
            .set_approval(profile_id, to.is_approved(), at)
            .await?;

        if changed {
            profile.is_approved = to.is_approved();
            profile.updated_at = Some(at);
            info!(
                actor = %actor,
                profile_id = %profile_id,
                from = from.as_str(),
                to = to.as_str(),
                "Profile approval changed"
            );
        } else {
            debug!(profile_id = %profile_id, state = to.as_str(), "Approval already in requested state");
        }

        Ok(ProfileResponse::from(&profile))
    }
}
