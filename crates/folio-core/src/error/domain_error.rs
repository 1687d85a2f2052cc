//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// Unknown profile id, or a handle that is absent or not yet approved.
    /// The public read path must never distinguish the two.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("No profile exists for this user")]
    OwnProfileMissing,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid profile: {}", .0.join("; "))]
    InvalidProfile(Vec<String>),

    #[error("Invalid content: {}", .0.join("; "))]
    InvalidContent(Vec<String>),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large: max {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin capability required")]
    NotAdmin,

    #[error("Not profile owner")]
    NotProfileOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("handle taken")]
    HandleTaken,

    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Backend call failed for reasons outside the caller's control; retryable
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Blob storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Not-found error for a profile id
    pub fn profile_not_found(id: Uuid) -> Self {
        Self::ProfileNotFound(id.to_string())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::OwnProfileMissing => "PROFILE_NOT_CREATED",

            // Validation
            Self::InvalidProfile(_) | Self::InvalidContent(_) | Self::ValidationError(_) => {
                "VALIDATION_ERROR"
            }
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",

            // Authorization
            Self::NotAdmin => "NOT_ADMIN",
            Self::NotProfileOwner => "NOT_PROFILE_OWNER",

            // Conflict
            Self::HandleTaken => "HANDLE_TAKEN",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",

            // Infrastructure
            Self::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::StorageError(_) => "STORAGE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound(_) | Self::OwnProfileMissing)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidProfile(_)
                | Self::InvalidContent(_)
                | Self::ValidationError(_)
                | Self::UnsupportedMediaType(_)
                | Self::FileTooLarge { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotAdmin | Self::NotProfileOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::HandleTaken | Self::ProfileAlreadyExists)
    }

    /// Check if the caller may retry the same request unchanged
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_) | Self::StorageError(_))
    }

    /// Violated rules for validation errors, if any
    pub fn violations(&self) -> Option<&[String]> {
        match self {
            Self::InvalidProfile(rules) | Self::InvalidContent(rules) => Some(rules),
            _ => None,
        }
    }
}
