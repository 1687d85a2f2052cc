//! # folio-service
//!
//! Application layer containing the profile workflow, the approval state
//! machine, public resolution, uploads, QR generation and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AdminService, ApprovalService, LinkService, MediaService, ProfileService, PublicService,
    QrFormat, QrImage, QrService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, ServiceSettings, SocialService,
};
