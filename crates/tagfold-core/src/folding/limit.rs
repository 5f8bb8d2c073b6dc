//! Range count limiting by nesting level

use tracing::debug;

use crate::folding::merge::RangeForest;
use crate::range::FoldingRange;

/// Truncates a forest to a maximum number of ranges
pub struct LimitEnforcer;

impl LimitEnforcer {
    /// Keep the deepest complete set of levels whose total fits in `limit`
    ///
    /// Levels are kept or dropped whole. All top-level ranges are kept even
    /// when they alone exceed the limit; a limit of 0 keeps nothing.
    pub fn apply(forest: RangeForest, limit: Option<usize>) -> Vec<FoldingRange> {
        let Some(limit) = limit else {
            return forest.into_ranges();
        };
        if limit == 0 {
            return Vec::new();
        }
        if forest.len() <= limit {
            return forest.into_ranges();
        }

        let max_depth = forest.max_depth().unwrap_or(0);
        let mut per_level = vec![0usize; max_depth + 1];
        for (_, depth) in forest.iter() {
            per_level[depth] += 1;
        }

        let mut cutoff = 0;
        let mut total = 0;
        for (depth, count) in per_level.iter().enumerate() {
            total += count;
            if total > limit {
                break;
            }
            cutoff = depth;
        }

        debug!(
            "Limiting {} ranges to {}: keeping depth <= {}",
            forest.len(),
            limit,
            cutoff
        );

        forest
            .iter()
            .filter(|(_, depth)| *depth <= cutoff)
            .map(|(range, _)| *range)
            .collect()
    }
}
