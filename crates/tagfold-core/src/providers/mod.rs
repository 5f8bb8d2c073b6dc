//! Folding providers for embedded languages
//!
//! A provider is a plain function from the text of an embedded region to
//! ranges in region-local line numbers. Providers are looked up by language id
//! (`"css"`, `"javascript"`, ...), so the engine never needs to know which
//! embedded languages exist.

pub mod braces;

use std::collections::HashMap;

use crate::config::EmbeddedSettings;
use crate::error::Result;
use crate::folding::RegionMarkers;
use crate::range::FoldingRange;

pub use braces::BraceLanguage;

/// Folding function for one embedded language
pub type FoldingProvider = Box<dyn Fn(&str) -> Result<Vec<FoldingRange>> + Send + Sync>;

/// Lookup table from language id to folding provider
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, FoldingProvider>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in providers enabled by `settings`
    pub fn with_defaults(settings: &EmbeddedSettings, markers: &RegionMarkers) -> Self {
        let mut registry = Self::new();

        for language in [BraceLanguage::Css, BraceLanguage::JavaScript] {
            if settings.is_enabled_for(language.id()) {
                let markers = markers.clone();
                registry.register(language.id(), move |text: &str| {
                    Ok(braces::fold(text, language, &markers))
                });
            }
        }

        registry
    }

    /// Register (or replace) the provider for `language`
    pub fn register<F>(&mut self, language: impl Into<String>, provider: F)
    where
        F: Fn(&str) -> Result<Vec<FoldingRange>> + Send + Sync + 'static,
    {
        self.providers.insert(language.into(), Box::new(provider));
    }

    pub fn get(&self, language: &str) -> Option<&FoldingProvider> {
        self.providers.get(language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.providers.contains_key(language)
    }

    /// Registered language ids, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}
