//! Social entity - an account on a social platform

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{check_required, check_url};
use crate::error::DomainError;
use crate::value_objects::SocialPlatform;

/// Maximum social handle length in characters
pub const SOCIAL_HANDLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Social {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub platform: SocialPlatform,
    pub handle: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Social {
    /// Create a validated social account entry
    pub fn create(
        profile_id: Uuid,
        platform: SocialPlatform,
        handle: String,
        url: String,
    ) -> Result<Self, DomainError> {
        let mut violations = Vec::new();
        check_required("social handle", &handle, SOCIAL_HANDLE_MAX_CHARS, &mut violations);
        check_url("social url", &url, &mut violations);
        if !violations.is_empty() {
            return Err(DomainError::InvalidContent(violations));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            profile_id,
            platform,
            handle,
            url,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_social() {
        let social = Social::create(
            Uuid::new_v4(),
            SocialPlatform::Github,
            "johndoe".to_string(),
            "https://github.com/johndoe".to_string(),
        )
        .unwrap();
        assert_eq!(social.platform, SocialPlatform::Github);
    }

    #[test]
    fn test_empty_handle_rejected() {
        let err = Social::create(
            Uuid::new_v4(),
            SocialPlatform::Other,
            String::new(),
            "https://example.com".to_string(),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
