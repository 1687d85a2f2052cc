//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers on the in-memory backend,
//! minting tokens and making HTTP requests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use folio_api::{create_app, AppState};
use folio_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseBackend, DatabaseConfig, Environment, JwtConfig,
    JwtService, PublicConfig, RateLimitConfig, ServerConfig, StorageConfig,
};
use folio_db::MemoryBackend;
use folio_service::{ServiceContextBuilder, ServiceSettings};
use folio_storage::LocalBlobStore;
use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19400);

/// Secret shared by the server and the token minting helpers
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Public base URL the test server builds page URLs from
pub const TEST_PUBLIC_BASE_URL: &str = "https://folio.test";

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Backing store, for seeding admins and simulating outages
    pub backend: MemoryBackend,
    pub upload_dir: PathBuf,
    pub admin_id: Uuid,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with one seeded admin
    pub async fn start() -> Result<Self> {
        let upload_dir = std::env::temp_dir().join(format!("folio-uploads-{}", Uuid::new_v4()));
        let config = test_config(&upload_dir);

        let backend = MemoryBackend::new();
        let admin_id = Uuid::new_v4();
        backend.seed_admin(admin_id);

        let jwt = JwtService::new(TEST_JWT_SECRET, config.jwt.access_token_expiry);
        let service_context = ServiceContextBuilder::new()
            .memory(backend.clone())
            .blob_store(Arc::new(LocalBlobStore::new(
                &upload_dir,
                &config.storage.public_path,
            )))
            .jwt_service(Arc::new(jwt.clone()))
            .settings(ServiceSettings::from_config(&config))
            .build()?;

        let app = create_app(AppState::new(service_context, config))?;

        let addr = SocketAddr::from(([127, 0, 0, 1], get_test_port()));
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(50)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            backend,
            upload_dir,
            admin_id,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Mint an access token for a user
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.jwt
            .generate_access_token(user_id)
            .expect("token is minted")
    }

    /// A fresh user id and its token
    pub fn new_user(&self) -> (Uuid, String) {
        let user_id = Uuid::new_v4();
        (user_id, self.token_for(user_id))
    }

    /// Token of the seeded admin
    pub fn admin_token(&self) -> String {
        self.token_for(self.admin_id)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token and JSON body
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with a multipart body
    pub async fn post_multipart_auth(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?)
    }

    /// Make a PUT request with a multipart body
    pub async fn put_multipart_auth(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

/// Configuration for a server on the in-memory backend
pub fn test_config(upload_dir: &std::path::Path) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "folio-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            backend: DatabaseBackend::Memory,
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry: 900,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        storage: StorageConfig {
            upload_dir: upload_dir.to_string_lossy().into_owned(),
            max_file_size_mb: 1,
            public_path: "/uploads".to_string(),
        },
        public: PublicConfig {
            base_url: TEST_PUBLIC_BASE_URL.to_string(),
        },
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
