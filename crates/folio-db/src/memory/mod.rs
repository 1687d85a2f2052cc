//! In-memory backend
//!
//! Implements every repository trait over process-local tables. Used for
//! development (`DATABASE_BACKEND=memory`) and by the test suites.

mod backend;

pub use backend::MemoryBackend;
