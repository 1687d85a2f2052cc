//! Model to entity mappers
//!
//! Rows are converted into domain entities with `From`/`TryFrom`; enum
//! columns stored as text go through the value objects' parsers.

mod link;
mod media;
mod profile;
mod social;

pub use profile::approval_filter;
