use crate::error::{Error, Result};
use crate::registry::AssetKind;

/// Normalize a user-supplied section name.
///
/// Trims surrounding whitespace and upper-cases the first character, so
/// `hero` and ` Hero ` both resolve to `Hero`. The rest of the name is kept
/// as typed.
pub fn normalize_section_name(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reject names that cannot be used as a single file stem.
///
/// Names end up as `<dir>/<segment>/<name>.tsx`, so anything that could
/// escape `<segment>` is refused.
pub fn validate_name(kind: AssetKind, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation(kind, "name must not be empty"));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::validation(
            kind,
            format!("name '{name}' must not contain path separators"),
        ));
    }

    if name.contains("..") || name == "." {
        return Err(Error::validation(
            kind,
            format!("name '{name}' must not contain relative path segments"),
        ));
    }

    if name.contains('\0') {
        return Err(Error::validation(kind, "name must not contain NUL bytes"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_capitalizes_first_letter() {
        assert_eq!(normalize_section_name("hero"), "Hero");
    }

    #[test]
    fn test_normalize_keeps_rest_of_name() {
        assert_eq!(normalize_section_name("imageText"), "ImageText");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_section_name("  hero \n"), "Hero");
    }

    #[test]
    fn test_normalize_already_normalized() {
        assert_eq!(normalize_section_name("Hero"), "Hero");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_section_name("   "), "");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize_section_name("éclair"), "Éclair");
    }

    #[test]
    fn test_validate_accepts_plain_names() {
        assert!(validate_name(AssetKind::Section, "Hero").is_ok());
        assert!(validate_name(AssetKind::Component, "Image-Text_2").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_name(AssetKind::Section, "").is_err());
        assert!(validate_name(AssetKind::Section, "  ").is_err());
    }

    #[test]
    fn test_validate_rejects_separators() {
        assert!(validate_name(AssetKind::Component, "a/b").is_err());
        assert!(validate_name(AssetKind::Component, "a\\b").is_err());
    }

    #[test]
    fn test_validate_rejects_traversal() {
        assert!(validate_name(AssetKind::Section, "..").is_err());
        assert!(validate_name(AssetKind::Section, ".").is_err());
        assert!(validate_name(AssetKind::Section, "..Hero").is_err());
    }

    #[test]
    fn test_validate_rejects_nul() {
        assert!(validate_name(AssetKind::Section, "He\0ro").is_err());
    }

    #[test]
    fn test_validate_error_carries_kind() {
        let err = validate_name(AssetKind::Component, "a/b").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                kind: AssetKind::Component,
                ..
            }
        ));
    }
}
