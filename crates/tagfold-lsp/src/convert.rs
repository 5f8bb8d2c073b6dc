//! Conversions between engine types and LSP types

use tagfold_core::{FoldingRange, FoldingRangeKind};
use tower_lsp::lsp_types::{self, ClientCapabilities};

/// LSP kind for an engine range kind
///
/// Tag ranges have no LSP counterpart and are sent without a kind.
pub fn to_lsp_kind(kind: FoldingRangeKind) -> Option<lsp_types::FoldingRangeKind> {
    match kind {
        FoldingRangeKind::Tag => None,
        FoldingRangeKind::Comment => Some(lsp_types::FoldingRangeKind::Comment),
        FoldingRangeKind::Region => Some(lsp_types::FoldingRangeKind::Region),
    }
}

pub fn to_lsp_range(range: &FoldingRange) -> lsp_types::FoldingRange {
    lsp_types::FoldingRange {
        start_line: range.start_line,
        start_character: None,
        end_line: range.end_line,
        end_character: None,
        kind: to_lsp_kind(range.kind),
        collapsed_text: None,
    }
}

pub fn to_lsp_ranges(ranges: &[FoldingRange]) -> Vec<lsp_types::FoldingRange> {
    ranges.iter().map(to_lsp_range).collect()
}

/// The `rangeLimit` advertised in the client's folding range capabilities
pub fn client_range_limit(capabilities: &ClientCapabilities) -> Option<usize> {
    capabilities
        .text_document
        .as_ref()?
        .folding_range
        .as_ref()?
        .range_limit
        .map(|limit| limit as usize)
}
