//! Centralized validation for user-entered values.
//!
//! Everything the desktop client collects eventually lands in an argument
//! vector handed to the external CLI, so inputs are checked for format
//! correctness and for control characters before they get anywhere near a
//! process invocation.

use crate::error::{DevpodError, Result};

/// Validate a repository reference (a container image or build-cache
/// source such as `ghcr.io/org/repo` or `org/repo:tag`).
///
/// `field` is the canonical form field name reported on failure.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(DevpodError::Validation)` if invalid
pub fn validate_repository_reference(field: &'static str, reference: &str) -> Result<()> {
    if reference.is_empty() {
        return Err(DevpodError::validation(
            field,
            "repository reference must not be empty",
        ));
    }

    if reference.len() > 255 {
        return Err(DevpodError::validation(
            field,
            "repository reference must be at most 255 characters",
        ));
    }

    // Control characters and embedded whitespace would corrupt the
    // argument vector
    if reference.chars().any(|c| c.is_control()) {
        return Err(DevpodError::validation(
            field,
            "repository reference contains control characters",
        ));
    }
    if reference.chars().any(|c| c.is_whitespace()) {
        return Err(DevpodError::validation(
            field,
            format!("repository reference '{}' contains whitespace", reference),
        ));
    }

    // Path segments must all be non-empty
    if reference.starts_with('/') || reference.ends_with('/') || reference.contains("//") {
        return Err(DevpodError::validation(
            field,
            format!("repository reference '{}' has an empty path segment", reference),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "prebuildRepository";

    #[test]
    fn test_valid_references() {
        assert!(validate_repository_reference(FIELD, "org/repo").is_ok());
        assert!(validate_repository_reference(FIELD, "ghcr.io/org/repo").is_ok());
        assert!(validate_repository_reference(FIELD, "ghcr.io/org/repo:latest").is_ok());
        assert!(validate_repository_reference(FIELD, "registry.local:5000/cache").is_ok());
    }

    #[test]
    fn test_empty_reference() {
        let err = validate_repository_reference(FIELD, "").unwrap_err();
        assert_eq!(err.validation_field(), Some(FIELD));
    }

    #[test]
    fn test_whitespace_and_control_characters() {
        assert!(validate_repository_reference(FIELD, "org/my repo").is_err());
        assert!(validate_repository_reference(FIELD, "org/repo\n").is_err());
        assert!(validate_repository_reference(FIELD, "org/\trepo").is_err());
    }

    #[test]
    fn test_empty_path_segments() {
        assert!(validate_repository_reference(FIELD, "/org/repo").is_err());
        assert!(validate_repository_reference(FIELD, "org/repo/").is_err());
        assert!(validate_repository_reference(FIELD, "org//repo").is_err());
    }

    #[test]
    fn test_overlong_reference() {
        let long = "a".repeat(256);
        assert!(validate_repository_reference(FIELD, &long).is_err());
        let ok = "a".repeat(255);
        assert!(validate_repository_reference(FIELD, &ok).is_ok());
    }
}
