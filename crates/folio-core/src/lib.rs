//! # folio-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Admin, Link, Media, Profile, ProfileDraft, ProfileStats, PublicProfileView, Social,
};
pub use error::DomainError;
pub use traits::{
    AdminRepository, BlobStore, LinkRepository, MediaRepository, ProfileRepository, RepoResult,
    SocialRepository, StoredBlob,
};
pub use value_objects::{
    ApprovalState, Handle, MediaType, SocialPlatform, BIO_MAX_CHARS, HANDLE_MIN_CHARS,
    HEADLINE_MAX_CHARS,
};
