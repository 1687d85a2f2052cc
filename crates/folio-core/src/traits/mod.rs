//! Repository and storage traits (ports)

mod repositories;
mod storage;

pub use repositories::{
    AdminRepository, LinkRepository, MediaRepository, ProfileRepository, RepoResult,
    SocialRepository,
};
pub use storage::{BlobStore, StoredBlob};
