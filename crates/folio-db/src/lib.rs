//! # folio-db
//!
//! Database layer implementing the repository traits of `folio-core`.
//!
//! - PostgreSQL via SQLx: connection pool, migrations runner, models,
//!   model -> entity mappers and `Pg*Repository` implementations
//! - [`MemoryBackend`]: a single in-process store implementing every
//!   repository trait, for development and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_db::{create_pool, PgProfileRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     let profiles = PgProfileRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryBackend;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig, DEFAULT_MIGRATIONS_DIR};
pub use repositories::{
    map_db_error, PgAdminRepository, PgLinkRepository, PgMediaRepository, PgProfileRepository,
    PgSocialRepository,
};
