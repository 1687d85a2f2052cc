//! Social platform - the network a social account lives on

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported social networks, stored in upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Linkedin,
    Github,
    Youtube,
    Facebook,
    Tiktok,
    Other,
}

impl SocialPlatform {
    pub const ALL: [Self; 8] = [
        Self::Twitter,
        Self::Instagram,
        Self::Linkedin,
        Self::Github,
        Self::Youtube,
        Self::Facebook,
        Self::Tiktok,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "TWITTER",
            Self::Instagram => "INSTAGRAM",
            Self::Linkedin => "LINKEDIN",
            Self::Github => "GITHUB",
            Self::Youtube => "YOUTUBE",
            Self::Facebook => "FACEBOOK",
            Self::Tiktok => "TIKTOK",
            Self::Other => "OTHER",
        }
    }

    /// Parse the storage representation
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
