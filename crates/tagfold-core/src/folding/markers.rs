//! `#region` / `#endregion` marker detection

use regex::Regex;
use std::sync::OnceLock;

use crate::config::{FoldingSettings, DEFAULT_REGION_END, DEFAULT_REGION_START};
use crate::error::Result;

/// Role of a comment in region matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

/// Compiled region marker patterns
///
/// Patterns are matched against comment text with the comment delimiters
/// already removed.
#[derive(Debug, Clone)]
pub struct RegionMarkers {
    start: Regex,
    end: Regex,
}

impl RegionMarkers {
    pub fn new(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: Regex::new(start)?,
            end: Regex::new(end)?,
        })
    }

    pub fn from_settings(settings: &FoldingSettings) -> Result<Self> {
        Self::new(&settings.region_start, &settings.region_end)
    }

    /// Classify a comment's text as a region start, region end, or neither
    pub fn classify(&self, comment_text: &str) -> Option<Marker> {
        if self.start.is_match(comment_text) {
            Some(Marker::Start)
        } else if self.end.is_match(comment_text) {
            Some(Marker::End)
        } else {
            None
        }
    }
}

impl Default for RegionMarkers {
    fn default() -> Self {
        static DEFAULT: OnceLock<RegionMarkers> = OnceLock::new();

        DEFAULT
            .get_or_init(|| RegionMarkers {
                start: Regex::new(DEFAULT_REGION_START).unwrap(),
                end: Regex::new(DEFAULT_REGION_END).unwrap(),
            })
            .clone()
    }
}
