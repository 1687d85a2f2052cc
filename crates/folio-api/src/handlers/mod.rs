//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod health;
pub mod links;
pub mod media;
pub mod profiles;
pub mod public;
pub mod socials;
pub mod users;
