//! Media type - kind of a portfolio media item

use std::fmt;

use serde::{Deserialize, Serialize};

/// Media item kind, stored as `IMAGE` / `VIDEO`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Storage representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }

    /// Parse the storage representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "IMAGE" => Some(Self::Image),
            "VIDEO" => Some(Self::Video),
            _ => None,
        }
    }

    /// Classify an uploaded file by its MIME type
    ///
    /// `video/*` is a video, `image/*` is an image, anything else is rejected.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence.starts_with("video/") {
            Some(Self::Video)
        } else if essence.starts_with("image/") {
            Some(Self::Image)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
