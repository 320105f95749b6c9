//! Registry addressing
//!
//! Pure functions that turn an asset kind and a name into the URL the
//! registry serves it from. No request is made here; the shell crate owns
//! the HTTP client.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::naming::validate_name;

/// The two kinds of asset the registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Section,
    Component,
}

impl AssetKind {
    /// Value of the payload's optional `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Section => "section",
            AssetKind::Component => "component",
        }
    }

    /// Path segment under the registry base URL (and under the target directory).
    pub fn path_segment(&self) -> &'static str {
        match self {
            AssetKind::Section => "sections",
            AssetKind::Component => "components",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry connection settings.
///
/// Built once by the CLI layer and handed to the client; nothing here reads
/// process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub base_url: Option<String>,
}

impl RegistryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    pub fn from_optional(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    /// Base URL without its trailing slash.
    ///
    /// Fails with [`Error::Configuration`] when unset or blank.
    pub fn base_url(&self) -> Result<&str> {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url.trim_end_matches('/')),
            _ => Err(Error::missing_base_url()),
        }
    }
}

/// Build `{base_url}/{sections|components}/{name}.json`.
///
/// The configuration is checked first so a missing base URL is reported
/// before anything about the name. The name is validated and then
/// percent-encoded.
pub fn build_registry_url(config: &RegistryConfig, kind: AssetKind, name: &str) -> Result<String> {
    let base_url = config.base_url()?;
    validate_name(kind, name)?;

    Ok(format!(
        "{}/{}/{}.json",
        base_url,
        kind.path_segment(),
        urlencoding::encode(name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RegistryConfig {
        RegistryConfig::new("https://registry.test/v1")
    }

    // ============================================================================
    // build_registry_url tests
    // ============================================================================

    #[test]
    fn test_build_registry_url_section() {
        let url = build_registry_url(&config(), AssetKind::Section, "Hero").unwrap();
        assert_eq!(url, "https://registry.test/v1/sections/Hero.json");
    }

    #[test]
    fn test_build_registry_url_component() {
        let url = build_registry_url(&config(), AssetKind::Component, "Badge").unwrap();
        assert_eq!(url, "https://registry.test/v1/components/Badge.json");
    }

    #[test]
    fn test_build_registry_url_is_deterministic() {
        let first = build_registry_url(&config(), AssetKind::Section, "ImageText").unwrap();
        let second = build_registry_url(&config(), AssetKind::Section, "ImageText").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_registry_url_trims_trailing_slash() {
        let config = RegistryConfig::new("https://registry.test/v1/");
        let url = build_registry_url(&config, AssetKind::Section, "Hero").unwrap();
        assert_eq!(url, "https://registry.test/v1/sections/Hero.json");
    }

    #[test]
    fn test_build_registry_url_percent_encodes_name() {
        let url = build_registry_url(&config(), AssetKind::Section, "Image Text").unwrap();
        assert_eq!(url, "https://registry.test/v1/sections/Image%20Text.json");
    }

    #[test]
    fn test_build_registry_url_missing_base_url() {
        let result = build_registry_url(&RegistryConfig::default(), AssetKind::Section, "Hero");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_build_registry_url_blank_base_url() {
        let config = RegistryConfig::new("   ");
        let result = build_registry_url(&config, AssetKind::Component, "Badge");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_build_registry_url_config_checked_before_name() {
        // An invalid name must not mask the missing configuration.
        let result = build_registry_url(&RegistryConfig::default(), AssetKind::Section, "");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_build_registry_url_rejects_traversal() {
        let result = build_registry_url(&config(), AssetKind::Section, "../secrets");
        assert!(matches!(
            result,
            Err(Error::Validation {
                kind: AssetKind::Section,
                ..
            })
        ));
    }

    // ============================================================================
    // AssetKind tests
    // ============================================================================

    #[test]
    fn test_asset_kind_segments() {
        assert_eq!(AssetKind::Section.path_segment(), "sections");
        assert_eq!(AssetKind::Component.path_segment(), "components");
        assert_eq!(AssetKind::Section.to_string(), "section");
        assert_eq!(AssetKind::Component.to_string(), "component");
    }
}
