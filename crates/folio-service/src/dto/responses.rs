//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUIDs are serialized as strings.

use chrono::{DateTime, Utc};
use folio_core::value_objects::{ApprovalState, MediaType, SocialPlatform};
use serde::Serialize;

// ============================================================================
// Profile Responses
// ============================================================================

/// Owner view of a profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub handle: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_approved: bool,
    pub approval_state: ApprovalState,
    /// Path of the public page, reachable only once approved
    pub public_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Media response
#[derive(Debug, Clone, Serialize)]
pub struct MediaResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Link response
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub label: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Social account response
#[derive(Debug, Clone, Serialize)]
pub struct SocialResponse {
    pub id: String,
    pub platform: SocialPlatform,
    pub handle: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the owner's dashboard shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub profile: ProfileResponse,
    pub media: Vec<MediaResponse>,
    pub links: Vec<LinkResponse>,
    pub socials: Vec<SocialResponse>,
    pub approval_state: ApprovalState,
    /// Absolute URL of the public page
    pub public_url: String,
}

/// Public page payload; carries no owner id and no approval flag
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfileResponse {
    pub handle: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub media: Vec<MediaResponse>,
    pub links: Vec<LinkResponse>,
    pub socials: Vec<SocialResponse>,
}

// ============================================================================
// Upload Responses
// ============================================================================

/// Outcome of a batch upload; files succeed or fail independently
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadResult {
    pub uploaded: Vec<MediaResponse>,
    pub failed: Vec<UploadFailure>,
}

/// A file that could not be stored
#[derive(Debug, Clone, Serialize)]
pub struct UploadFailure {
    pub filename: String,
    pub code: String,
    pub message: String,
}

// ============================================================================
// Admin Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminStatusResponse {
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileStatsResponse {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }

    #[test]
    fn test_upload_result_shape() {
        let result = UploadResult {
            uploaded: vec![],
            failed: vec![UploadFailure {
                filename: "notes.txt".to_string(),
                code: "UNSUPPORTED_MEDIA_TYPE".to_string(),
                message: "Unsupported media type: text/plain".to_string(),
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["uploaded"], serde_json::json!([]));
        assert_eq!(json["failed"][0]["filename"], "notes.txt");
    }
}
