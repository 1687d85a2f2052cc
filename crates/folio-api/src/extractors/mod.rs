//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path ids, validation and uploads.

mod auth;
mod multipart;
mod path;
mod validated;

pub use auth::AuthUser;
pub use multipart::{read_single_file, read_upload_files};
pub use path::ApiPath;
pub use validated::ValidatedJson;
pub(crate) use validated::json_rejection;
