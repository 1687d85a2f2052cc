//! Field checks shared by the profile and its children

use std::sync::LazyLock;

use regex::Regex;

static HTTP_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:https?)://[^\s/?#@]+(?:[/?#]\S*)?$").expect("url pattern is valid")
});

/// Absolute `http`/`https` URL with a non-empty host
pub fn is_http_url(value: &str) -> bool {
    HTTP_URL_PATTERN.is_match(value)
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn check_max(field: &str, value: &str, max: usize, violations: &mut Vec<String>) {
    if char_len(value) > max {
        violations.push(format!("{field} must be at most {max} characters"));
    }
}

pub(crate) fn check_required(
    field: &str,
    value: &str,
    max: usize,
    violations: &mut Vec<String>,
) {
    if value.is_empty() {
        violations.push(format!("{field} is required"));
    } else {
        check_max(field, value, max, violations);
    }
}

pub(crate) fn check_url(field: &str, value: &str, violations: &mut Vec<String>) {
    if !is_http_url(value) {
        violations.push(format!("{field} must be an absolute http(s) URL"));
    }
}

/// Empty strings mean "absent"
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
