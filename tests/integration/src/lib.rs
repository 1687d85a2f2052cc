//! Integration test utilities for the folio server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API on the in-memory backend.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
