//! Link entity - a labelled external link on a profile

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{check_required, check_url};
use crate::error::DomainError;

/// Maximum link label length in characters
pub const LINK_LABEL_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub label: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Create a validated link
    pub fn create(profile_id: Uuid, label: String, url: String) -> Result<Self, DomainError> {
        let mut violations = Vec::new();
        check_required("link label", &label, LINK_LABEL_MAX_CHARS, &mut violations);
        check_url("link url", &url, &mut violations);
        if !violations.is_empty() {
            return Err(DomainError::InvalidContent(violations));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            profile_id,
            label,
            url,
            created_at: Utc::now(),
        })
    }
}
