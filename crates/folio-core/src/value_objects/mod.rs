//! Value objects - immutable types that represent domain concepts

mod approval;
mod handle;
mod media_type;
mod social_platform;

pub use approval::ApprovalState;
pub use handle::{Handle, HANDLE_MIN_CHARS};
pub use media_type::MediaType;
pub use social_platform::SocialPlatform;

/// Maximum headline length in characters
pub const HEADLINE_MAX_CHARS: usize = 100;

/// Maximum bio length in characters
pub const BIO_MAX_CHARS: usize = 500;
