//! Service context - dependency container for services
//!
//! Holds all repositories, the blob store and other dependencies needed by services.

use std::sync::Arc;

use folio_common::auth::JwtService;
use folio_common::AppConfig;
use folio_core::traits::{
    AdminRepository, BlobStore, LinkRepository, MediaRepository, ProfileRepository,
    SocialRepository,
};
use folio_db::{
    map_db_error, MemoryBackend, PgAdminRepository, PgLinkRepository, PgMediaRepository, PgPool,
    PgProfileRepository, PgSocialRepository,
};
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Default upload limit when no configuration is supplied (10 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Runtime settings the services read
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Base URL public pages are published under
    pub public_base_url: String,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: u64,
}

impl ServiceSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            public_base_url: config.public.base_url.clone(),
            max_upload_bytes: config.storage.max_file_size_bytes(),
        }
    }

    /// Absolute URL of the public page for `handle`
    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}/p/{handle}", self.public_base_url.trim_end_matches('/'))
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:3000".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Profile, media, link, social and admin repositories
/// - The blob store uploads are written to
/// - JWT service for authentication
/// - Runtime settings (public base URL, upload limit)
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent on the in-memory backend
    pool: Option<PgPool>,

    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    media_repo: Arc<dyn MediaRepository>,
    link_repo: Arc<dyn LinkRepository>,
    social_repo: Arc<dyn SocialRepository>,
    admin_repo: Arc<dyn AdminRepository>,

    // Storage
    blob_store: Arc<dyn BlobStore>,

    // Services
    jwt_service: Arc<JwtService>,
    settings: ServiceSettings,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the service runs on one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn media_repo(&self) -> &dyn MediaRepository {
        self.media_repo.as_ref()
    }

    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    pub fn social_repo(&self) -> &dyn SocialRepository {
        self.social_repo.as_ref()
    }

    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    // === Storage ===

    pub fn blob_store(&self) -> &dyn BlobStore {
        self.blob_store.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Probe the backend with a trivial read
    pub async fn check_backend(&self) -> ServiceResult<()> {
        match &self.pool {
            Some(pool) => {
                sqlx::query("SELECT 1")
                    .execute(pool)
                    .await
                    .map_err(map_db_error)?;
            }
            None => {
                self.admin_repo.is_admin(Uuid::nil()).await?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    media_repo: Option<Arc<dyn MediaRepository>>,
    link_repo: Option<Arc<dyn LinkRepository>>,
    social_repo: Option<Arc<dyn SocialRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    blob_store: Option<Arc<dyn BlobStore>>,
    jwt_service: Option<Arc<JwtService>>,
    settings: Option<ServiceSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire every repository to PostgreSQL
    pub fn postgres(self, pool: PgPool) -> Self {
        Self {
            profile_repo: Some(Arc::new(PgProfileRepository::new(pool.clone()))),
            media_repo: Some(Arc::new(PgMediaRepository::new(pool.clone()))),
            link_repo: Some(Arc::new(PgLinkRepository::new(pool.clone()))),
            social_repo: Some(Arc::new(PgSocialRepository::new(pool.clone()))),
            admin_repo: Some(Arc::new(PgAdminRepository::new(pool.clone()))),
            pool: Some(pool),
            ..self
        }
    }

    /// Wire every repository to one in-memory backend
    pub fn memory(self, backend: MemoryBackend) -> Self {
        Self {
            profile_repo: Some(Arc::new(backend.clone())),
            media_repo: Some(Arc::new(backend.clone())),
            link_repo: Some(Arc::new(backend.clone())),
            social_repo: Some(Arc::new(backend.clone())),
            admin_repo: Some(Arc::new(backend)),
            pool: None,
            ..self
        }
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn media_repo(mut self, repo: Arc<dyn MediaRepository>) -> Self {
        self.media_repo = Some(repo);
        self
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn social_repo(mut self, repo: Arc<dyn SocialRepository>) -> Self {
        self.social_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn blob_store(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.blob_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            profile_repo: self
                .profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            media_repo: self
                .media_repo
                .ok_or_else(|| ServiceError::validation("media_repo is required"))?,
            link_repo: self
                .link_repo
                .ok_or_else(|| ServiceError::validation("link_repo is required"))?,
            social_repo: self
                .social_repo
                .ok_or_else(|| ServiceError::validation("social_repo is required"))?,
            admin_repo: self
                .admin_repo
                .ok_or_else(|| ServiceError::validation("admin_repo is required"))?,
            blob_store: self
                .blob_store
                .ok_or_else(|| ServiceError::validation("blob_store is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            settings: self.settings.unwrap_or_default(),
        })
    }
}
