//! Social service
//!
//! Social platform accounts shown on a profile.

use folio_core::entities::Social;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{CreateSocialRequest, SocialResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::profile::ProfileService;

/// Social service
pub struct SocialService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SocialService<'a> {
    /// Create a new SocialService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
    ) -> ServiceResult<Vec<SocialResponse>> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let socials = self.ctx.social_repo().find_by_profile(profile_id).await?;
        Ok(socials.iter().map(SocialResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(platform = %request.platform.as_str()))]
    pub async fn add(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        request: CreateSocialRequest,
    ) -> ServiceResult<SocialResponse> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let social = Social::create(profile_id, request.platform, request.handle, request.url)?;
        self.ctx.social_repo().create(&social).await?;

        info!(social_id = %social.id, profile_id = %profile_id, "Social account added");
        Ok(SocialResponse::from(&social))
    }

    /// Remove a social account; an unknown id is a no-op
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        social_id: Uuid,
    ) -> ServiceResult<()> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        if self.ctx.social_repo().delete(profile_id, social_id).await? {
            info!(social_id = %social_id, profile_id = %profile_id, "Social account removed");
        } else {
            debug!(social_id = %social_id, "Social account not present");
        }
        Ok(())
    }
}
