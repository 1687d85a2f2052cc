//! Domain entities - core business objects

mod admin;
mod link;
mod media;
mod profile;
mod public_view;
mod social;
mod validation;

pub use admin::Admin;
pub use link::{Link, LINK_LABEL_MAX_CHARS};
pub use media::{Media, MEDIA_TITLE_MAX_CHARS};
pub use profile::{Profile, ProfileDraft, ProfileStats};
pub use public_view::PublicProfileView;
pub use social::{Social, SOCIAL_HANDLE_MAX_CHARS};
pub use validation::is_http_url;
