//! Profile entity - a user's public portfolio page

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{char_len, is_http_url, non_empty};
use crate::error::DomainError;
use crate::value_objects::{ApprovalState, Handle, BIO_MAX_CHARS, HEADLINE_MAX_CHARS};

/// Profile entity, at most one per user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub handle: Handle,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Create a new profile from validated owner input.
    ///
    /// New profiles always start pending.
    pub fn new(user_id: Uuid, handle: Handle, draft: ProfileDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            handle,
            headline: non_empty(draft.headline),
            bio: non_empty(draft.bio),
            avatar_url: non_empty(draft.avatar_url),
            is_approved: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply an owner edit. Approval is not touched.
    ///
    /// Headline and bio are replaced; the avatar is only replaced when the
    /// draft carries one (an empty string clears it).
    pub fn apply(&mut self, handle: Handle, draft: ProfileDraft) {
        self.handle = handle;
        self.headline = non_empty(draft.headline);
        self.bio = non_empty(draft.bio);
        if let Some(avatar_url) = draft.avatar_url {
            self.avatar_url = non_empty(Some(avatar_url));
        }
        self.updated_at = Some(Utc::now());
    }

    /// Replace the avatar URL
    pub fn set_avatar(&mut self, avatar_url: String) {
        self.avatar_url = non_empty(Some(avatar_url));
        self.updated_at = Some(Utc::now());
    }

    #[inline]
    pub fn approval_state(&self) -> ApprovalState {
        ApprovalState::from_flag(self.is_approved)
    }

    /// Check if the profile is reachable through its public page
    #[inline]
    pub fn is_public(&self) -> bool {
        self.is_approved
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Owner-supplied profile fields, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub handle: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileDraft {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            ..Self::default()
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// List every rule the draft breaks, empty when valid
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Handle::violations(&self.handle);
        if let Some(headline) = &self.headline {
            if char_len(headline) > HEADLINE_MAX_CHARS {
                violations.push(format!(
                    "headline must be at most {HEADLINE_MAX_CHARS} characters"
                ));
            }
        }
        if let Some(bio) = &self.bio {
            if char_len(bio) > BIO_MAX_CHARS {
                violations.push(format!("bio must be at most {BIO_MAX_CHARS} characters"));
            }
        }
        if let Some(avatar_url) = self.avatar_url.as_deref().filter(|v| !v.is_empty()) {
            // Stored avatars are only set through the upload path
            if !is_http_url(avatar_url) {
                violations.push("avatar url must be an absolute http(s) URL".to_string());
            }
        }
        violations
    }

    /// Validate every field, returning the parsed handle
    pub fn validate(&self) -> Result<Handle, DomainError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(Handle::from_trusted(self.handle.clone()))
        } else {
            Err(DomainError::InvalidProfile(violations))
        }
    }
}

/// Profile counts for the review dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
}

impl ProfileStats {
    pub fn new(total: u64, approved: u64) -> Self {
        Self {
            total,
            approved,
            pending: total.saturating_sub(approved),
        }
    }
}
