//! Public profile view - the read-only aggregate served at `/p/{handle}`

use super::{Link, Media, Profile, Social};
use crate::value_objects::Handle;

/// Composite of an approved profile and its children.
///
/// Carries neither the owner's user id nor the approval flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicProfileView {
    pub handle: Handle,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub media: Vec<Media>,
    pub links: Vec<Link>,
    pub socials: Vec<Social>,
}

impl PublicProfileView {
    /// Assemble the view, ordering children by creation time then id
    pub fn assemble(
        profile: Profile,
        mut media: Vec<Media>,
        mut links: Vec<Link>,
        mut socials: Vec<Social>,
    ) -> Self {
        media.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        links.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        socials.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        Self {
            handle: profile.handle,
            headline: profile.headline,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            media,
            links,
            socials,
        }
    }
}
