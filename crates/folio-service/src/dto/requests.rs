//! Request DTOs for API endpoints
//!
//! Child-entity requests implement `Validate`; profile fields are checked by
//! the domain so every violated rule is reported at once.

use folio_core::entities::ProfileDraft;
use folio_core::value_objects::{MediaType, SocialPlatform};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Profile Requests
// ============================================================================

/// Create or update the caller's profile
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfileRequest {
    pub handle: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    /// Omit to keep the current avatar; empty string removes it
    pub avatar_url: Option<String>,
}

impl From<UpsertProfileRequest> for ProfileDraft {
    fn from(request: UpsertProfileRequest) -> Self {
        Self {
            handle: request.handle,
            headline: request.headline,
            bio: request.bio,
            avatar_url: request.avatar_url,
        }
    }
}

// ============================================================================
// Child Requests
// ============================================================================

/// Attach externally hosted media
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMediaRequest {
    #[serde(rename = "type")]
    pub media_type: MediaType,

    #[validate(url(message = "Media url must be a valid URL"))]
    pub url: String,

    #[validate(length(max = 200, message = "Media title must be at most 200 characters"))]
    pub title: Option<String>,
}

/// Add a link
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Link label must be 1-100 characters"))]
    pub label: String,

    #[validate(url(message = "Link url must be a valid URL"))]
    pub url: String,
}

/// Add a social account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSocialRequest {
    pub platform: SocialPlatform,

    #[validate(length(min = 1, max = 100, message = "Social handle must be 1-100 characters"))]
    pub handle: String,

    #[validate(url(message = "Social url must be a valid URL"))]
    pub url: String,
}

/// One file of a multipart upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Name used in per-file failure reports
    pub fn display_name(&self) -> String {
        self.filename.clone().unwrap_or_else(|| "unnamed".to_string())
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Admin profile listing filter (`?state=pending|approved`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProfilesQuery {
    pub state: Option<String>,
}

/// QR code options (`?format=png|svg&size=512`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QrQuery {
    pub format: Option<String>,
    pub size: Option<u32>,
}
