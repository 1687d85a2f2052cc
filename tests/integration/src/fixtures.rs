//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A handle no other test uses
pub fn unique_handle(prefix: &str) -> String {
    format!("{prefix}-{}", unique_suffix())
}

// ============================================================================
// Requests
// ============================================================================

/// Profile create/update request
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpsertProfileRequest {
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UpsertProfileRequest {
    pub fn handle(handle: &str) -> Self {
        Self {
            handle: handle.to_string(),
            ..Self::default()
        }
    }

    pub fn with_headline(mut self, headline: &str) -> Self {
        self.headline = Some(headline.to_string());
        self
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
pub struct CreateLinkRequest {
    pub label: String,
    pub url: String,
}

impl CreateLinkRequest {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateSocialRequest {
    pub platform: String,
    pub handle: String,
    pub url: String,
}

impl CreateSocialRequest {
    pub fn github(handle: &str) -> Self {
        Self {
            platform: "GITHUB".to_string(),
            handle: handle.to_string(),
            url: format!("https://github.com/{handle}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateMediaRequest {
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CreateMediaRequest {
    pub fn image(url: &str) -> Self {
        Self {
            media_type: "IMAGE".to_string(),
            url: url.to_string(),
            title: None,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub handle: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_approved: bool,
    pub approval_state: String,
    pub public_path: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinkResponse {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SocialResponse {
    pub id: String,
    pub platform: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub profile: ProfileResponse,
    pub media: Vec<MediaResponse>,
    pub links: Vec<LinkResponse>,
    pub socials: Vec<SocialResponse>,
    pub approval_state: String,
    pub public_url: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadFailure {
    pub filename: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadResult {
    pub uploaded: Vec<MediaResponse>,
    pub failed: Vec<UploadFailure>,
}

#[derive(Debug, Deserialize)]
pub struct AdminStatusResponse {
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProfileStatsResponse {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub retryable: bool,
}
