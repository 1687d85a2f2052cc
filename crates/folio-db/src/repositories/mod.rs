//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in folio-core.
//! Each repository handles database operations for a specific domain entity.

mod admin;
mod error;
mod link;
mod media;
mod profile;
mod social;

pub use admin::PgAdminRepository;
pub use error::map_db_error;
pub use link::PgLinkRepository;
pub use media::PgMediaRepository;
pub use profile::PgProfileRepository;
pub use social::PgSocialRepository;
