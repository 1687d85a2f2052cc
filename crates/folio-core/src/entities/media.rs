//! Media entity - an image or video attached to a profile

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{check_max, check_url, non_empty};
use crate::error::DomainError;
use crate::value_objects::MediaType;

/// Maximum media title length in characters
pub const MEDIA_TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub media_type: MediaType,
    pub url: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Media {
    /// Create a validated media record
    pub fn create(
        profile_id: Uuid,
        media_type: MediaType,
        url: String,
        title: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = non_empty(title);
        let mut violations = Vec::new();
        check_url("media url", &url, &mut violations);
        if let Some(title) = &title {
            check_max("media title", title, MEDIA_TITLE_MAX_CHARS, &mut violations);
        }
        if !violations.is_empty() {
            return Err(DomainError::InvalidContent(violations));
        }

        Ok(Self::stored(profile_id, media_type, url, title))
    }

    /// Create a record for a blob this service just stored
    pub fn stored(
        profile_id: Uuid,
        media_type: MediaType,
        url: String,
        title: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile_id,
            media_type,
            url,
            title,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_media() {
        let media = Media::create(
            Uuid::new_v4(),
            MediaType::Image,
            "https://cdn.example.com/shot.png".to_string(),
            Some("Shot".to_string()),
        )
        .unwrap();
        assert!(!media.is_video());
        assert_eq!(media.title.as_deref(), Some("Shot"));
    }

    #[test]
    fn test_title_boundary() {
        let url = "https://cdn.example.com/v.mp4".to_string();
        let profile_id = Uuid::new_v4();
        assert!(Media::create(profile_id, MediaType::Video, url.clone(), Some("t".repeat(200))).is_ok());
        assert!(Media::create(profile_id, MediaType::Video, url, Some("t".repeat(201))).is_err());
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = Media::create(Uuid::new_v4(), MediaType::Image, "/a.png".to_string(), None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_stored_uses_local_urls() {
        let media = Media::stored(Uuid::new_v4(), MediaType::Image, "/uploads/a.png".to_string(), None);
        assert_eq!(media.url, "/uploads/a.png");
    }
}
