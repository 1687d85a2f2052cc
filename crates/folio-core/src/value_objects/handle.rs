//! Handle - the unique slug a profile is published under (`/p/{handle}`)

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::DomainError;

/// Minimum handle length in characters
pub const HANDLE_MIN_CHARS: usize = 3;

static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("handle pattern is valid"));

/// Validated profile handle
///
/// Letters, digits, underscore and hyphen only, at least three characters.
/// Matching is case-sensitive: `John` and `john` are different handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(String);

impl Handle {
    /// Parse and validate a handle
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let violations = Self::violations(value);
        if violations.is_empty() {
            Ok(Self(value.to_string()))
        } else {
            Err(DomainError::InvalidProfile(violations))
        }
    }

    /// Wrap a value already known to be valid (e.g. read back from storage)
    pub fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// List every rule the value breaks, empty when valid
    pub fn violations(value: &str) -> Vec<String> {
        let mut violations = Vec::new();
        if value.chars().count() < HANDLE_MIN_CHARS {
            violations.push(format!(
                "handle must be at least {HANDLE_MIN_CHARS} characters"
            ));
        }
        if !value.is_empty() && !HANDLE_PATTERN.is_match(value) {
            violations.push(
                "handle may only contain letters, digits, underscores and hyphens".to_string(),
            );
        }
        violations
    }

    /// Check a value without allocating a handle
    pub fn is_valid(value: &str) -> bool {
        Self::violations(value).is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Public page path for this handle
    pub fn public_path(&self) -> String {
        format!("/p/{}", self.0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Handle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::parse(s)
    }
}

impl Serialize for Handle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
