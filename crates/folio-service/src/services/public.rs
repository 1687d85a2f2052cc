//! Public resolution
//!
//! Resolves `/p/{handle}` to an approved profile and its children. Unknown,
//! malformed and pending handles all produce the same not-found error.

use folio_core::entities::PublicProfileView;
use folio_core::value_objects::Handle;
use folio_core::DomainError;
use tracing::instrument;

use crate::dto::PublicProfileResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Public profile service
pub struct PublicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PublicService<'a> {
    /// Create a new PublicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve an exact, case-sensitive handle to its public view
    #[instrument(skip(self))]
    pub async fn resolve(&self, handle: &str) -> ServiceResult<PublicProfileResponse> {
        if !Handle::is_valid(handle) {
            return Err(not_found(handle));
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_public_by_handle(handle)
            .await?
            .ok_or_else(|| not_found(handle))?;

        let (media, links, socials) = tokio::try_join!(
            self.ctx.media_repo().find_by_profile(profile.id),
            self.ctx.link_repo().find_by_profile(profile.id),
            self.ctx.social_repo().find_by_profile(profile.id),
        )?;

        let view = PublicProfileView::assemble(profile, media, links, socials);
        Ok(PublicProfileResponse::from(view))
    }
}

fn not_found(handle: &str) -> crate::ServiceError {
    DomainError::ProfileNotFound(handle.to_string()).into()
}
