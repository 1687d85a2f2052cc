//! Local filesystem blob store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use folio_core::error::DomainError;
use folio_core::traits::{BlobStore, RepoResult, StoredBlob};

use crate::keys::is_safe_key;

/// Stores blobs as files below `root`; URLs are `{public_prefix}/{key}`
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> RepoResult<PathBuf> {
        if is_safe_key(key) {
            Ok(self.root.join(key))
        } else {
            Err(DomainError::ValidationError(format!("invalid blob key {key:?}")))
        }
    }
}

fn storage_error(e: std::io::Error) -> DomainError {
    DomainError::StorageError(e.to_string())
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> RepoResult<StoredBlob> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(storage_error)?;
        }
        fs::write(&path, bytes).await.map_err(storage_error)?;
        debug!(path = %path.display(), "Blob written");

        Ok(StoredBlob {
            key: key.to_string(),
            url: format!("{}/{key}", self.public_prefix),
            size: bytes.len() as u64,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> RepoResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(e)),
        }
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| is_safe_key(key))
            .map(str::to_string)
    }
}
