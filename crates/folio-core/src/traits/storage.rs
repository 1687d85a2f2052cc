//! Blob storage port

use async_trait::async_trait;

use super::RepoResult;

/// A stored blob and the URL it is served under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub key: String,
    pub url: String,
    pub size: u64,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under `key`, returning the public URL
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> RepoResult<StoredBlob>;

    /// Remove a blob; missing keys are not an error
    async fn delete(&self, key: &str) -> RepoResult<()>;

    /// Map a public URL back to its key, if this store served it
    fn key_for_url(&self, url: &str) -> Option<String>;
}
