//! Ranges delegated to embedded-language providers

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{FoldingError, Result};
use crate::providers::ProviderRegistry;
use crate::range::{FoldingRange, LanguageRegion};

/// Runs the registered provider for each embedded region and moves its
/// ranges into document coordinates
pub struct EmbeddedRangeAggregator<'r> {
    registry: &'r ProviderRegistry,
}

impl<'r> EmbeddedRangeAggregator<'r> {
    pub fn new(registry: &'r ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Collect ranges for every region
    ///
    /// A failing provider only loses its own region. The token is checked
    /// before each provider call; once it is cancelled the partial result is
    /// discarded and `FoldingError::Cancelled` is returned.
    pub fn collect(
        &self,
        lines: &[&str],
        regions: &[LanguageRegion],
        cancel: &CancellationToken,
    ) -> Result<Vec<FoldingRange>> {
        let mut ranges = Vec::new();

        for region in regions {
            if cancel.is_cancelled() {
                return Err(FoldingError::Cancelled);
            }

            let Some(provider) = self.registry.get(&region.language_id) else {
                debug!(
                    "No folding provider for '{}' (lines {}-{})",
                    region.language_id, region.start_line, region.end_line
                );
                continue;
            };

            let Some(text) = region_text(lines, region) else {
                continue;
            };

            match provider(text.as_str()) {
                Ok(found) => {
                    ranges.extend(
                        found
                            .into_iter()
                            .filter(FoldingRange::is_foldable)
                            .map(|range| range.offset(region.start_line)),
                    );
                }
                Err(e) => {
                    warn!(
                        "Embedded {} block at lines {}-{} contributes no ranges: {}",
                        region.language_id, region.start_line, region.end_line, e
                    );
                }
            }
        }

        Ok(ranges)
    }
}

/// Text of the region's lines, clamped to the document
fn region_text(lines: &[&str], region: &LanguageRegion) -> Option<String> {
    let start = region.start_line as usize;
    if start >= lines.len() || region.end_line < region.start_line {
        return None;
    }
    let end = (region.end_line as usize).min(lines.len() - 1);
    Some(lines[start..=end].join("\n"))
}
