//! Configuration Settings
//!
//! Defines the configuration structures for the folding engine.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default pattern for a comment that opens a region
pub const DEFAULT_REGION_START: &str = r"^\s*#region\b";

/// Default pattern for a comment that closes a region
pub const DEFAULT_REGION_END: &str = r"^\s*#endregion\b";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Range computation settings
    pub folding: FoldingSettings,
    /// Embedded language settings
    pub embedded: EmbeddedSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Range computation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldingSettings {
    /// Maximum number of ranges returned when the caller gives no limit
    pub range_limit: Option<usize>,
    /// Regex matched against comment text to open a region
    pub region_start: String,
    /// Regex matched against comment text to close a region
    pub region_end: String,
}

impl Default for FoldingSettings {
    fn default() -> Self {
        Self {
            range_limit: None,
            region_start: DEFAULT_REGION_START.to_string(),
            region_end: DEFAULT_REGION_END.to_string(),
        }
    }
}

/// Embedded language configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddedSettings {
    /// Fold `<script>` and `<style>` content at all
    pub enabled: bool,
    /// Built-in providers to register
    pub languages: Vec<String>,
}

impl Default for EmbeddedSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            languages: vec!["css".to_string(), "javascript".to_string()],
        }
    }
}

impl EmbeddedSettings {
    /// Check whether the built-in provider for `language` should be registered
    pub fn is_enabled_for(&self, language: &str) -> bool {
        self.enabled && self.languages.iter().any(|l| l == language)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_embedded_disabled_overrides_languages() {
        let embedded = EmbeddedSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(!embedded.is_enabled_for("css"));
    }

    #[test]
    fn test_settings_debug() {
        let settings = Settings::default();
        let debug_str = format!("{:?}", settings);
        assert!(debug_str.contains("Settings"));
    }
}
