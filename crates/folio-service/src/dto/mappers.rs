//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use folio_core::entities::{Link, Media, Profile, ProfileStats, PublicProfileView, Social};

use super::responses::{
    LinkResponse, MediaResponse, ProfileResponse, ProfileStatsResponse, PublicProfileResponse,
    SocialResponse,
};

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            handle: profile.handle.to_string(),
            headline: profile.headline.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            is_approved: profile.is_approved,
            approval_state: profile.approval_state(),
            public_path: profile.handle.public_path(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl From<PublicProfileView> for PublicProfileResponse {
    fn from(view: PublicProfileView) -> Self {
        Self {
            handle: view.handle.into_inner(),
            headline: view.headline,
            bio: view.bio,
            avatar_url: view.avatar_url,
            media: view.media.iter().map(MediaResponse::from).collect(),
            links: view.links.iter().map(LinkResponse::from).collect(),
            socials: view.socials.iter().map(SocialResponse::from).collect(),
        }
    }
}

impl From<ProfileStats> for ProfileStatsResponse {
    fn from(stats: ProfileStats) -> Self {
        Self {
            total: stats.total,
            approved: stats.approved,
            pending: stats.pending,
        }
    }
}

// ============================================================================
// Child Mappers
// ============================================================================

impl From<&Media> for MediaResponse {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id.to_string(),
            media_type: media.media_type,
            url: media.url.clone(),
            title: media.title.clone(),
            created_at: media.created_at,
        }
    }
}

impl From<&Link> for LinkResponse {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id.to_string(),
            label: link.label.clone(),
            url: link.url.clone(),
            created_at: link.created_at,
        }
    }
}

impl From<&Social> for SocialResponse {
    fn from(social: &Social) -> Self {
        Self {
            id: social.id.to_string(),
            platform: social.platform,
            handle: social.handle.clone(),
            url: social.url.clone(),
            created_at: social.created_at,
        }
    }
}
