//! Database models - SQLx-compatible structs for PostgreSQL tables

mod link;
mod media;
mod profile;
mod social;

pub use link::LinkModel;
pub use media::MediaModel;
pub use profile::{ProfileModel, ProfileStatsModel};
pub use social::SocialModel;
