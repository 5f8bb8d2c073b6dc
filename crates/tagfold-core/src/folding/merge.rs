//! Merging candidates into a non-crossing hierarchy

use tracing::trace;

use crate::range::FoldingRange;

/// Accepted ranges with their nesting depth
///
/// Any two ranges are either disjoint or one contains the other. Ranges are
/// ordered by start line, the outer range first when two start together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeForest {
    ranges: Vec<FoldingRange>,
    depths: Vec<usize>,
}

impl RangeForest {
    pub fn ranges(&self) -> &[FoldingRange] {
        &self.ranges
    }

    /// Pairs of range and depth (0 for ranges not contained by another)
    pub fn iter(&self) -> impl Iterator<Item = (&FoldingRange, usize)> {
        self.ranges.iter().zip(self.depths.iter().copied())
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.depths.iter().copied().max()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn into_ranges(self) -> Vec<FoldingRange> {
        self.ranges
    }
}

/// Combines candidates from all collectors
pub struct RangeMerger;

impl RangeMerger {
    /// Keep every candidate that is disjoint from or nested with all
    /// previously accepted ranges
    ///
    /// Candidates are visited by ascending start line, longer first on ties,
    /// so the earlier-starting range wins any crossing. Crossing candidates are
    /// dropped whole. Single-line candidates and exact duplicates of an
    /// accepted range are dropped too.
    ///
    /// Equal intervals contain each other, so a duplicate from another source
    /// (a tag and a `#region` pair on the same lines) would otherwise nest one
    /// level below the first. Only the first survives; an editor never gets two
    /// folds over the same lines and the duplicate never adds a depth level.
    pub fn merge(mut candidates: Vec<FoldingRange>) -> RangeForest {
        candidates.sort_by(|a, b| {
            a.start_line
                .cmp(&b.start_line)
                .then(b.end_line.cmp(&a.end_line))
        });

        let mut forest = RangeForest {
            ranges: Vec::with_capacity(candidates.len()),
            depths: Vec::with_capacity(candidates.len()),
        };
        // Accepted ranges containing the current start line, outermost first
        let mut open: Vec<FoldingRange> = Vec::new();

        for candidate in candidates {
            if !candidate.is_foldable() {
                continue;
            }

            while open
                .last()
                .is_some_and(|top| top.end_line < candidate.start_line)
            {
                open.pop();
            }

            if let Some(parent) = open.last() {
                if parent.start_line == candidate.start_line
                    && parent.end_line == candidate.end_line
                {
                    continue;
                }
                if candidate.end_line > parent.end_line {
                    trace!(
                        "Dropping {:?} range {}-{}: crosses {}-{}",
                        candidate.kind,
                        candidate.start_line,
                        candidate.end_line,
                        parent.start_line,
                        parent.end_line
                    );
                    continue;
                }
            }

            forest.depths.push(open.len());
            forest.ranges.push(candidate);
            open.push(candidate);
        }

        forest
    }
}
