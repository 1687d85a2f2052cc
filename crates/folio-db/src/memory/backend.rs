//! In-memory implementation of the repository traits

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::{Admin, Link, Media, Profile, ProfileStats, Social};
use folio_core::error::DomainError;
use folio_core::traits::{
    AdminRepository, LinkRepository, MediaRepository, ProfileRepository, RepoResult,
    SocialRepository,
};
use folio_core::value_objects::ApprovalState;

#[derive(Debug, Default)]
struct Tables {
    profiles: HashMap<Uuid, Profile>,
    media: HashMap<Uuid, Media>,
    links: HashMap<Uuid, Link>,
    socials: HashMap<Uuid, Social>,
    /// Keyed by user id
    admins: HashMap<Uuid, Admin>,
}

impl Tables {
    fn handle_owner(&self, handle: &str) -> Option<Uuid> {
        self.profiles
            .values()
            .find(|p| p.handle.as_str() == handle)
            .map(|p| p.id)
    }
}

/// Shared in-memory store; clones see the same tables
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    tables: Arc<RwLock<Tables>>,
    available: Arc<AtomicBool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Grant the admin capability to a user
    pub fn seed_admin(&self, user_id: Uuid) {
        self.tables
            .write()
            .admins
            .entry(user_id)
            .or_insert_with(|| Admin::new(user_id));
    }

    /// Simulate an outage: while unavailable every call fails with `BackendUnavailable`
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::BackendUnavailable(
                "in-memory backend marked unavailable".to_string(),
            ))
        }
    }
}

fn by_creation<T>(mut rows: Vec<T>, key: impl Fn(&T) -> (DateTime<Utc>, Uuid)) -> Vec<T> {
    rows.sort_by_key(key);
    rows
}

// ============================================================================
// Profiles
// ============================================================================

#[async_trait]
impl ProfileRepository for MemoryBackend {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        self.check()?;
        Ok(self.tables.read().profiles.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Profile>> {
        self.check()?;
        Ok(self
            .tables
            .read()
            .profiles
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn find_public_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>> {
        self.check()?;
        Ok(self
            .tables
            .read()
            .profiles
            .values()
            .find(|p| p.handle.as_str() == handle && p.is_approved)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn handle_taken(&self, handle: &str, exclude_id: Option<Uuid>) -> RepoResult<bool> {
        self.check()?;
        let owner = self.tables.read().handle_owner(handle);
        Ok(owner.is_some_and(|id| Some(id) != exclude_id))
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.tables.write();
        if tables.handle_owner(profile.handle.as_str()).is_some() {
            return Err(DomainError::HandleTaken);
        }
        if tables.profiles.values().any(|p| p.user_id == profile.user_id) {
            return Err(DomainError::ProfileAlreadyExists);
        }
        tables.profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.tables.write();
        if tables
            .handle_owner(profile.handle.as_str())
            .is_some_and(|id| id != profile.id)
        {
            return Err(DomainError::HandleTaken);
        }
        let stored = tables
            .profiles
            .get_mut(&profile.id)
            .ok_or_else(|| DomainError::profile_not_found(profile.id))?;

        stored.handle = profile.handle.clone();
        stored.headline.clone_from(&profile.headline);
        stored.bio.clone_from(&profile.bio);
        stored.avatar_url.clone_from(&profile.avatar_url);
        stored.updated_at = profile.updated_at;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_approval(
        &self,
        id: Uuid,
        approved: bool,
        at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        self.check()?;
        let mut tables = self.tables.write();
        match tables.profiles.get_mut(&id) {
            Some(profile) if profile.is_approved != approved => {
                profile.is_approved = approved;
                profile.updated_at = Some(at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        self.check()?;
        let mut tables = self.tables.write();
        if tables.profiles.remove(&id).is_none() {
            return Ok(false);
        }
        tables.media.retain(|_, m| m.profile_id != id);
        tables.links.retain(|_, l| l.profile_id != id);
        tables.socials.retain(|_, s| s.profile_id != id);
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn list(&self, state: Option<ApprovalState>) -> RepoResult<Vec<Profile>> {
        self.check()?;
        let mut profiles: Vec<Profile> = self
            .tables
            .read()
            .profiles
            .values()
            .filter(|p| state.is_none_or(|s| p.approval_state() == s))
            .cloned()
            .collect();
        profiles.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(profiles)
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<ProfileStats> {
        self.check()?;
        let tables = self.tables.read();
        let total = tables.profiles.len() as u64;
        let approved = tables.profiles.values().filter(|p| p.is_approved).count() as u64;
        Ok(ProfileStats::new(total, approved))
    }
}

// ============================================================================
// Children
// ============================================================================

#[async_trait]
impl MediaRepository for MemoryBackend {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Media>> {
        self.check()?;
        let rows = self
            .tables
            .read()
            .media
            .values()
            .filter(|m| m.profile_id == profile_id)
            .cloned()
            .collect();
        Ok(by_creation(rows, |m: &Media| (m.created_at, m.id)))
    }

    #[instrument(skip(self, media), fields(media_id = %media.id))]
    async fn create(&self, media: &Media) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.tables.write();
        if !tables.profiles.contains_key(&media.profile_id) {
            return Err(DomainError::profile_not_found(media.profile_id));
        }
        tables.media.insert(media.id, media.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<Option<Media>> {
        self.check()?;
        let mut tables = self.tables.write();
        if tables.media.get(&id).is_some_and(|m| m.profile_id == profile_id) {
            Ok(tables.media.remove(&id))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryBackend {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Link>> {
        self.check()?;
        let rows = self
            .tables
            .read()
            .links
            .values()
            .filter(|l| l.profile_id == profile_id)
            .cloned()
            .collect();
        Ok(by_creation(rows, |l: &Link| (l.created_at, l.id)))
    }

    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn create(&self, link: &Link) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.tables.write();
        if !tables.profiles.contains_key(&link.profile_id) {
            return Err(DomainError::profile_not_found(link.profile_id));
        }
        tables.links.insert(link.id, link.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool> {
        self.check()?;
        let mut tables = self.tables.write();
        if tables.links.get(&id).is_some_and(|l| l.profile_id == profile_id) {
            tables.links.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[async_trait]
impl SocialRepository for MemoryBackend {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Social>> {
        self.check()?;
        let rows = self
            .tables
            .read()
            .socials
            .values()
            .filter(|s| s.profile_id == profile_id)
            .cloned()
            .collect();
        Ok(by_creation(rows, |s: &Social| (s.created_at, s.id)))
    }

    #[instrument(skip(self, social), fields(social_id = %social.id))]
    async fn create(&self, social: &Social) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.tables.write();
        if !tables.profiles.contains_key(&social.profile_id) {
            return Err(DomainError::profile_not_found(social.profile_id));
        }
        tables.socials.insert(social.id, social.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool> {
        self.check()?;
        let mut tables = self.tables.write();
        if tables.socials.get(&id).is_some_and(|s| s.profile_id == profile_id) {
            tables.socials.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

// ============================================================================
// Admins
// ============================================================================

#[async_trait]
impl AdminRepository for MemoryBackend {
    #[instrument(skip(self))]
    async fn is_admin(&self, user_id: Uuid) -> RepoResult<bool> {
        self.check()?;
        Ok(self.tables.read().admins.contains_key(&user_id))
    }

    #[instrument(skip(self, admin), fields(user_id = %admin.user_id))]
    async fn grant(&self, admin: &Admin) -> RepoResult<()> {
        self.check()?;
        self.tables
            .write()
            .admins
            .entry(admin.user_id)
            .or_insert_with(|| admin.clone());
        Ok(())
    }
}
