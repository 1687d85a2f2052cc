//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use folio_common::{AppConfig, AppError, AppResult, DatabaseBackend, JwtService};
use folio_db::{create_pool, run_migrations, MemoryBackend, PoolConfig, DEFAULT_MIGRATIONS_DIR};
use folio_service::{ServiceContextBuilder, ServiceSettings};
use folio_storage::LocalBlobStore;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, upload_body_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();

    let router = apply_middleware(
        create_router(upload_body_limit(config.storage.max_file_size_bytes())),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    // Health probes and stored uploads bypass rate limiting
    let router = router
        .merge(health_routes())
        .nest_service(
            &config.storage.public_path,
            ServeDir::new(&config.storage.upload_dir),
        );

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let builder = match config.database.backend {
        DatabaseBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(&config.database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if config.database.run_migrations {
                run_migrations(&pool, DEFAULT_MIGRATIONS_DIR)
                    .await
                    .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
                info!("Database migrations applied");
            }

            ServiceContextBuilder::new().postgres(pool)
        }
        DatabaseBackend::Memory => {
            warn!("Using the in-memory backend; data is lost on restart");
            ServiceContextBuilder::new().memory(MemoryBackend::new())
        }
    };

    let blob_store = Arc::new(LocalBlobStore::new(
        &config.storage.upload_dir,
        &config.storage.public_path,
    ));
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = builder
        .blob_store(blob_store)
        .jwt_service(jwt_service)
        .settings(ServiceSettings::from_config(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
