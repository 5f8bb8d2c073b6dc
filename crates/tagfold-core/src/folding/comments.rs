//! Comment and region-marker ranges

use crate::folding::markers::{Marker, RegionMarkers};
use crate::range::{FoldingRange, FoldingRangeKind};
use crate::scanner::Token;

/// Collector for multi-line comments and `#region` blocks
///
/// Region markers use their own stack, independent of tag nesting, so a
/// region may open inside one element and close inside another. The merger
/// decides later whether such a region survives.
pub struct CommentRegionCollector<'m> {
    markers: &'m RegionMarkers,
}

impl<'m> CommentRegionCollector<'m> {
    pub fn new(markers: &'m RegionMarkers) -> Self {
        Self { markers }
    }

    pub fn collect(&self, tokens: &[Token]) -> Vec<FoldingRange> {
        let mut ranges = Vec::new();
        let mut regions: Vec<u32> = Vec::new();

        for token in tokens {
            let Token::Comment {
                text,
                start_line,
                end_line,
            } = token
            else {
                continue;
            };

            match self.markers.classify(text) {
                Some(Marker::Start) => regions.push(*start_line),
                Some(Marker::End) => {
                    if let Some(region_start) = regions.pop() {
                        ranges.extend(FoldingRange::spanning(
                            region_start,
                            *end_line,
                            FoldingRangeKind::Region,
                        ));
                    }
                }
                None => {
                    ranges.extend(FoldingRange::spanning(
                        *start_line,
                        *end_line,
                        FoldingRangeKind::Comment,
                    ));
                }
            }
        }

        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::MarkupScanner;

    fn collect(text: &str) -> Vec<FoldingRange> {
        let markers = RegionMarkers::default();
        let mut ranges = CommentRegionCollector::new(&markers).collect(&MarkupScanner::scan(text));
        ranges.sort_by_key(|r| (r.start_line, r.end_line));
        ranges
    }

    #[test]
    fn test_multiline_comment() {
        assert_eq!(
            collect("<!--\n multi line\n-->"),
            vec![FoldingRange::new(0, 2, FoldingRangeKind::Comment)]
        );
    }

    #[test]
    fn test_single_line_comment_does_not_fold() {
        assert!(collect("<!-- one line -->\n<p></p>").is_empty());
    }

    #[test]
    fn test_nested_regions() {
        let text = "<!-- #region -->\n<!-- #region -->\n<!-- #endregion -->\n<!-- #endregion -->";
        assert_eq!(
            collect(text),
            vec![
                FoldingRange::new(0, 3, FoldingRangeKind::Region),
                FoldingRange::new(1, 2, FoldingRangeKind::Region),
            ]
        );
    }

    #[test]
    fn test_region_ends_on_last_line_of_end_comment() {
        let text = "<!-- #region -->\ncontent\n<!-- #endregion\n  trailing -->";
        assert_eq!(
            collect(text),
            vec![FoldingRange::new(0, 3, FoldingRangeKind::Region)]
        );
    }

    #[test]
    fn test_unmatched_end_marker_is_ignored() {
        let text = "<!-- #endregion -->\n<!-- #region -->\nx\n<!-- #endregion -->";
        assert_eq!(
            collect(text),
            vec![FoldingRange::new(1, 3, FoldingRangeKind::Region)]
        );
    }

    #[test]
    fn test_unmatched_start_marker_emits_nothing() {
        assert!(collect("<!-- #region -->\ncontent\n").is_empty());
    }

    #[test]
    fn test_multiline_marker_comment_is_not_a_comment_range() {
        let text = "<!-- #region\n  header -->\nx\n<!-- #endregion -->";
        assert_eq!(
            collect(text),
            vec![FoldingRange::new(0, 3, FoldingRangeKind::Region)]
        );
    }
}
