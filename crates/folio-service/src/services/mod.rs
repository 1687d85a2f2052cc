//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod approval;
pub mod context;
pub mod error;
pub mod link;
pub mod media;
pub mod profile;
pub mod public;
pub mod qr;
pub mod social;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use admin::AdminService;
pub use approval::ApprovalService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use error::{ServiceError, ServiceResult};
pub use link::LinkService;
pub use media::MediaService;
pub use profile::ProfileService;
pub use public::PublicService;
pub use qr::{QrFormat, QrImage, QrService};
pub use social::SocialService;
