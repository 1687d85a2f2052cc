//! Link service
//!
//! Labelled links shown on a profile.

use folio_core::entities::Link;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{CreateLinkRequest, LinkResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::profile::ProfileService;

/// Link service
pub struct LinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkService<'a> {
    /// Create a new LinkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a profile's links in creation order
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid, profile_id: Uuid) -> ServiceResult<Vec<LinkResponse>> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let links = self.ctx.link_repo().find_by_profile(profile_id).await?;
        Ok(links.iter().map(LinkResponse::from).collect())
    }

    /// Add a link to a profile the caller owns
    #[instrument(skip(self, request))]
    pub async fn add(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        request: CreateLinkRequest,
    ) -> ServiceResult<LinkResponse> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let link = Link::create(profile_id, request.label, request.url)?;
        self.ctx.link_repo().create(&link).await?;

        info!(link_id = %link.id, profile_id = %profile_id, "Link added");
        Ok(LinkResponse::from(&link))
    }

    /// Remove a link; an unknown id is a no-op
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: Uuid, profile_id: Uuid, link_id: Uuid) -> ServiceResult<()> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        if self.ctx.link_repo().delete(profile_id, link_id).await? {
            info!(link_id = %link_id, profile_id = %profile_id, "Link removed");
        } else {
            debug!(link_id = %link_id, profile_id = %profile_id, "Link not present, nothing removed");
        }
        Ok(())
    }
}
