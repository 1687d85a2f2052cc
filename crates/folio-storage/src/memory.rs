//! In-memory blob store

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use folio_core::error::DomainError;
use folio_core::traits::{BlobStore, RepoResult, StoredBlob};

const MEMORY_PREFIX: &str = "/memory-blobs";

/// A stored object
#[derive(Debug, Clone)]
struct Blob {
    bytes: Vec<u8>,
    content_type: String,
}

/// Keeps blobs in a `DashMap`; URLs are `/memory-blobs/{key}`
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<String, Blob>,
    failing: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail with a storage error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }

    /// Stored bytes and content type of a blob
    pub fn get(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.blobs
            .get(key)
            .map(|blob| (blob.bytes.clone(), blob.content_type.clone()))
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> RepoResult<StoredBlob> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError(
                "in-memory blob store marked failing".to_string(),
            ));
        }

        self.blobs.insert(
            key.to_string(),
            Blob {
                bytes: bytes.to_vec(),
                content_type: content_type.to_string(),
            },
        );

        Ok(StoredBlob {
            key: key.to_string(),
            url: format!("{MEMORY_PREFIX}/{key}"),
            size: bytes.len() as u64,
        })
    }

    async fn delete(&self, key: &str) -> RepoResult<()> {
        self.blobs.remove(key);
        Ok(())
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(MEMORY_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(str::to_string)
    }
}
