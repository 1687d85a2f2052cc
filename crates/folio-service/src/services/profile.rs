//! Profile service
//!
//! Handles the owner's profile: creation, edits, deletion and the dashboard.

use folio_core::entities::{Profile, ProfileDraft};
use folio_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    DashboardResponse, LinkResponse, MediaResponse, ProfileResponse, SocialResponse,
    UpsertProfileRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::media::discard_blob;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the caller's profile
    #[instrument(skip(self))]
    pub async fn get_own(&self, user_id: Uuid) -> ServiceResult<ProfileResponse> {
        let profile = self.own_profile(user_id).await?;
        Ok(ProfileResponse::from(&profile))
    }

    /// Create or update the caller's profile.
    ///
    /// Returns the stored profile and whether it was newly created. Approval
    /// is never changed here.
    #[instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn upsert(
        &self,
        user_id: Uuid,
        request: UpsertProfileRequest,
    ) -> ServiceResult<(ProfileResponse, bool)> {
        let existing = self.ctx.profile_repo().find_by_user(user_id).await?;

        let mut draft = ProfileDraft::from(request);
        // Echoing the current avatar back keeps it, even when it is a stored blob
        if draft.avatar_url.is_some()
            && draft.avatar_url == existing.as_ref().and_then(|p| p.avatar_url.clone())
        {
            draft.avatar_url = None;
        }
        let handle = draft.validate()?;

        let own_id = existing.as_ref().map(|p| p.id);

        if self
            .ctx
            .profile_repo()
            .handle_taken(handle.as_str(), own_id)
            .await?
        {
            return Err(DomainError::HandleTaken.into());
        }

        match existing {
            Some(mut profile) => {
                profile.apply(handle, draft);
                self.ctx.profile_repo().update(&profile).await?;

                info!(profile_id = %profile.id, user_id = %user_id, "Profile updated");
                Ok((ProfileResponse::from(&profile), false))
            }
            None => {
                let profile = Profile::new(user_id, handle, draft);
                self.ctx.profile_repo().create(&profile).await?;

                info!(profile_id = %profile.id, user_id = %user_id, "Profile created");
                Ok((ProfileResponse::from(&profile), true))
            }
        }
    }

    /// Delete the caller's profile together with its children
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Uuid) -> ServiceResult<()> {
        let profile = self.own_profile(user_id).await?;
        let media = self.ctx.media_repo().find_by_profile(profile.id).await?;

        self.ctx.profile_repo().delete(profile.id).await?;
        info!(profile_id = %profile.id, user_id = %user_id, "Profile deleted");

        // Records are gone; blobs are cleaned up best-effort
        for item in &media {
            discard_blob(self.ctx, profile.id, &item.url).await;
        }
        if let Some(avatar_url) = &profile.avatar_url {
            discard_blob(self.ctx, profile.id, avatar_url).await;
        }

        Ok(())
    }

    /// Profile, children, approval state and public URL in one read
    #[instrument(skip(self))]
    pub async fn dashboard(&self, user_id: Uuid) -> ServiceResult<DashboardResponse> {
        let profile = self.own_profile(user_id).await?;

        let (media, links, socials) = tokio::try_join!(
            self.ctx.media_repo().find_by_profile(profile.id),
            self.ctx.link_repo().find_by_profile(profile.id),
            self.ctx.social_repo().find_by_profile(profile.id),
        )?;

        Ok(DashboardResponse {
            public_url: self.ctx.settings().profile_url(profile.handle.as_str()),
            approval_state: profile.approval_state(),
            media: media.iter().map(MediaResponse::from).collect(),
            links: links.iter().map(LinkResponse::from).collect(),
            socials: socials.iter().map(SocialResponse::from).collect(),
            profile: ProfileResponse::from(&profile),
        })
    }

    /// Load the caller's profile entity
    pub async fn own_profile(&self, user_id: Uuid) -> ServiceResult<Profile> {
        self.ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| DomainError::OwnProfileMissing.into())
    }

    /// Load a profile by id and check the caller owns it.
    ///
    /// Runs before any child mutation.
    pub async fn require_owned(&self, user_id: Uuid, profile_id: Uuid) -> ServiceResult<Profile> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(profile_id))?;

        if !profile.is_owned_by(user_id) {
            return Err(DomainError::NotProfileOwner.into());
        }

        Ok(profile)
    }
}
