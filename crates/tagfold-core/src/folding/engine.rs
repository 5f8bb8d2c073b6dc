//! Folding engine
//!
//! Runs the collectors over one immutable snapshot of the document, then the
//! merger and the limiter. Nothing is cached between calls.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::Settings;
use crate::error::{FoldingError, Result};
use crate::folding::{
    CommentRegionCollector, EmbeddedRangeAggregator, LimitEnforcer, RangeMerger, RegionMarkers,
    TagRangeCollector,
};
use crate::partition;
use crate::providers::ProviderRegistry;
use crate::range::{FoldingRange, LanguageRegion};
use crate::scanner::{MarkupScanner, Token};

/// Computes folding ranges for markup documents
#[derive(Debug)]
pub struct FoldingEngine {
    settings: Settings,
    markers: RegionMarkers,
    providers: ProviderRegistry,
}

impl Default for FoldingEngine {
    fn default() -> Self {
        let settings = Settings::default();
        let markers = RegionMarkers::default();
        let providers = ProviderRegistry::with_defaults(&settings.embedded, &markers);
        Self {
            settings,
            markers,
            providers,
        }
    }
}

impl FoldingEngine {
    /// Create an engine from settings
    ///
    /// Fails only if a region marker pattern is not a valid regex.
    pub fn new(settings: Settings) -> Result<Self> {
        let markers = RegionMarkers::from_settings(&settings.folding)?;
        let providers = ProviderRegistry::with_defaults(&settings.embedded, &markers);
        Ok(Self {
            settings,
            markers,
            providers,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Register (or replace) the provider for an embedded language
    pub fn register_provider<F>(&mut self, language: impl Into<String>, provider: F)
    where
        F: Fn(&str) -> Result<Vec<FoldingRange>> + Send + Sync + 'static,
    {
        self.providers.register(language, provider);
    }

    /// Compute ranges for `text`, finding embedded regions with the built-in
    /// partitioner
    ///
    /// `limit` falls back to `folding.range_limit` from the settings.
    pub fn compute(&self, text: &str, limit: Option<usize>) -> Vec<FoldingRange> {
        // A token nobody else holds is never cancelled
        self.compute_cancellable(text, limit, &CancellationToken::new())
            .unwrap_or_default()
    }

    /// Like [`compute`](Self::compute), but stops with
    /// `FoldingError::Cancelled` once `cancel` fires
    ///
    /// The document is scanned once; the same tokens feed the partitioner
    /// and the range collectors.
    pub fn compute_cancellable(
        &self,
        text: &str,
        limit: Option<usize>,
        cancel: &CancellationToken,
    ) -> Result<Vec<FoldingRange>> {
        let tokens = MarkupScanner::scan(text);
        let regions = self.regions_for(&tokens);
        self.run(text, &tokens, &regions, limit, cancel)
    }

    /// Embedded regions the built-in partitioner finds in `text`
    ///
    /// Empty when embedded folding is disabled.
    pub fn partition(&self, text: &str) -> Vec<LanguageRegion> {
        self.regions_for(&MarkupScanner::scan(text))
    }

    fn regions_for(&self, tokens: &[Token]) -> Vec<LanguageRegion> {
        if self.settings.embedded.enabled {
            partition::partition(tokens)
        } else {
            Vec::new()
        }
    }

    /// Compute ranges with caller-supplied embedded regions
    ///
    /// Returns `FoldingError::Cancelled` if `cancel` fires before the ranges
    /// are merged; partial results are never returned.
    pub fn compute_with_regions(
        &self,
        text: &str,
        regions: &[LanguageRegion],
        limit: Option<usize>,
        cancel: &CancellationToken,
    ) -> Result<Vec<FoldingRange>> {
        let tokens = MarkupScanner::scan(text);
        self.run(text, &tokens, regions, limit, cancel)
    }

    fn run(
        &self,
        text: &str,
        tokens: &[Token],
        regions: &[LanguageRegion],
        limit: Option<usize>,
        cancel: &CancellationToken,
    ) -> Result<Vec<FoldingRange>> {
        let lines: Vec<&str> = text.lines().collect();

        let mut candidates = TagRangeCollector::collect(tokens);
        candidates.extend(CommentRegionCollector::new(&self.markers).collect(tokens));
        candidates.extend(
            EmbeddedRangeAggregator::new(&self.providers).collect(&lines, regions, cancel)?,
        );

        if cancel.is_cancelled() {
            return Err(FoldingError::Cancelled);
        }

        let candidate_count = candidates.len();
        let forest = RangeMerger::merge(candidates);
        let ranges = LimitEnforcer::apply(forest, limit.or(self.settings.folding.range_limit));

        debug!(
            "Computed {} folding ranges from {} candidates ({} lines, {} embedded regions)",
            ranges.len(),
            candidate_count,
            lines.len(),
            regions.len()
        );

        Ok(ranges)
    }
}
