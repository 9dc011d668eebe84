//! Slug rules for catalog records.
//!
//! A slug is one or more groups of lowercase ASCII letters and digits
//! joined by single hyphens, e.g. `kizuki-nao`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Regex pattern a valid slug must match in full.
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("valid regex"));

/// Return `true` when `value` is a URL-safe slug.
pub fn is_valid_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}

/// Validate a slug, naming the offending value in the error.
pub fn validate_slug(value: &str) -> Result<(), CoreError> {
    if !is_valid_slug(value) {
        return Err(CoreError::Validation(format!(
            "slug must be lowercase kebab-case, got '{value}'"
        )));
    }
    Ok(())
}
