//! Approval state - the public-visibility gate of a profile

use std::fmt;

use serde::{Deserialize, Serialize};

/// Review state of a profile
///
/// Backed by the `is_approved` flag: revoking an approved profile returns it
/// to `Pending`, there is no separate revoked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved,
}

impl ApprovalState {
    #[inline]
    pub const fn from_flag(is_approved: bool) -> Self {
        if is_approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }

    #[inline]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Whether the profile may be served to the public
    #[inline]
    pub const fn is_public(self) -> bool {
        self.is_approved()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
