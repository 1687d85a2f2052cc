//! Shared fixtures for service tests

use std::sync::Arc;

use folio_common::auth::JwtService;
use folio_db::MemoryBackend;
use folio_storage::MemoryBlobStore;
use uuid::Uuid;

use crate::dto::{ProfileResponse, UpsertProfileRequest};

use super::context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
use super::profile::ProfileService;

pub(crate) struct TestEnv {
    pub ctx: ServiceContext,
    pub backend: MemoryBackend,
    pub blobs: Arc<MemoryBlobStore>,
    pub admin_id: Uuid,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_settings(ServiceSettings {
            public_base_url: "https://folio.example.com".to_string(),
            max_upload_bytes: 1024,
        })
    }

    pub fn with_settings(settings: ServiceSettings) -> Self {
        let backend = MemoryBackend::new();
        let admin_id = Uuid::new_v4();
        backend.seed_admin(admin_id);
        let blobs = Arc::new(MemoryBlobStore::new());

        let ctx = ServiceContextBuilder::new()
            .memory(backend.clone())
            .blob_store(blobs.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
            .settings(settings)
            .build()
            .expect("test context builds");

        Self {
            ctx,
            backend,
            blobs,
            admin_id,
        }
    }

    /// Create a pending profile for a fresh user
    pub async fn create_profile(&self, handle: &str) -> (Uuid, ProfileResponse) {
        let user_id = Uuid::new_v4();
        let (profile, created) = ProfileService::new(&self.ctx)
            .upsert(user_id, upsert_request(handle))
            .await
            .expect("profile is created");
        assert!(created);
        (user_id, profile)
    }
}

pub(crate) fn upsert_request(handle: &str) -> UpsertProfileRequest {
    UpsertProfileRequest {
        handle: handle.to_string(),
        headline: None,
        bio: None,
        avatar_url: None,
    }
}

pub(crate) fn profile_id(profile: &ProfileResponse) -> Uuid {
    profile.id.parse().expect("profile id is a uuid")
}
