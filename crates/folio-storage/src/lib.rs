//! # folio-storage
//!
//! Blob store adapters implementing `folio_core::BlobStore`:
//!
//! - [`LocalBlobStore`]: files under an upload directory, served by the API
//!   under a public path such as `/uploads`
//! - [`MemoryBlobStore`]: a `DashMap`, for tests and the memory backend

mod keys;
mod local;
mod memory;

pub use keys::{blob_key, extension_for, is_safe_key};
pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
