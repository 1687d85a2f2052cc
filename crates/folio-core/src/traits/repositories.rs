//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Admin, Link, Media, Profile, ProfileStats, Social};
use crate::error::DomainError;
use crate::value_objects::ApprovalState;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Profile>>;

    /// Find a profile by exact handle, only if it is approved
    async fn find_public_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>>;

    /// Check if a handle is used by any profile other than `exclude_id`
    async fn handle_taken(&self, handle: &str, exclude_id: Option<Uuid>) -> RepoResult<bool>;

    /// Insert a new profile.
    ///
    /// A concurrent insert of the same handle fails with `HandleTaken`.
    async fn create(&self, profile: &Profile) -> RepoResult<()>;

    /// Persist owner-editable fields (handle, headline, bio, avatar, updated_at)
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Set the approval flag if it differs from the stored value.
    ///
    /// Returns `true` when a row changed.
    async fn set_approval(&self, id: Uuid, approved: bool, at: DateTime<Utc>)
        -> RepoResult<bool>;

    /// Delete a profile and, by cascade, its children
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;

    /// List profiles newest first, optionally filtered by approval state
    async fn list(&self, state: Option<ApprovalState>) -> RepoResult<Vec<Profile>>;

    /// Count profiles by approval state
    async fn stats(&self) -> RepoResult<ProfileStats>;
}

// ============================================================================
// Media Repository
// ============================================================================

#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// List media of a profile ordered by creation time then id
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Media>>;

    /// Insert a media record
    async fn create(&self, media: &Media) -> RepoResult<()>;

    /// Delete a media record scoped to its profile, returning it if it existed
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<Option<Media>>;
}

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// List links of a profile ordered by creation time then id
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Link>>;

    /// Insert a link
    async fn create(&self, link: &Link) -> RepoResult<()>;

    /// Delete a link scoped to its profile
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Social Repository
// ============================================================================

#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// List social accounts of a profile ordered by creation time then id
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Social>>;

    /// Insert a social account
    async fn create(&self, social: &Social) -> RepoResult<()>;

    /// Delete a social account scoped to its profile
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Check if a user holds the admin capability
    async fn is_admin(&self, user_id: Uuid) -> RepoResult<bool>;

    /// Grant the admin capability (idempotent)
    async fn grant(&self, admin: &Admin) -> RepoResult<()>;
}
