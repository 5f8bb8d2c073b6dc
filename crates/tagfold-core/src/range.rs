//! Folding range and language region types

use serde::{Deserialize, Serialize};

/// What produced a folding range
///
/// The kind is passed through to the caller and never influences merging or
/// limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingRangeKind {
    /// Content between an opening and closing tag
    Tag,
    /// A multi-line comment
    Comment,
    /// Lines between `#region` and `#endregion` markers
    Region,
}

impl FoldingRangeKind {
    /// Lowercase name, as serialized
    pub fn as_str(self) -> &'static str {
        match self {
            FoldingRangeKind::Tag => "tag",
            FoldingRangeKind::Comment => "comment",
            FoldingRangeKind::Region => "region",
        }
    }
}

/// A contiguous span of lines that can be collapsed
///
/// Lines are 0-based and inclusive. A valid range always has
/// `start_line < end_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoldingRange {
    pub start_line: u32,
    pub end_line: u32,
    pub kind: FoldingRangeKind,
}

impl FoldingRange {
    pub fn new(start_line: u32, end_line: u32, kind: FoldingRangeKind) -> Self {
        Self {
            start_line,
            end_line,
            kind,
        }
    }

    /// Build a range only if it spans more than one line
    pub fn spanning(start_line: u32, end_line: u32, kind: FoldingRangeKind) -> Option<Self> {
        (end_line > start_line).then(|| Self::new(start_line, end_line, kind))
    }

    /// Whether the range spans more than one line
    pub fn is_foldable(&self) -> bool {
        self.start_line < self.end_line
    }

    /// Whether `other` lies within this range (equal ranges contain each other)
    pub fn contains(&self, other: &FoldingRange) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }

    /// Whether the two ranges share no line
    pub fn is_disjoint(&self, other: &FoldingRange) -> bool {
        self.end_line < other.start_line || other.end_line < self.start_line
    }

    /// Whether the two ranges partially overlap without nesting
    pub fn crosses(&self, other: &FoldingRange) -> bool {
        !self.is_disjoint(other) && !self.contains(other) && !other.contains(self)
    }

    /// Shift the range down by `lines`
    pub fn offset(self, lines: u32) -> Self {
        Self {
            start_line: self.start_line.saturating_add(lines),
            end_line: self.end_line.saturating_add(lines),
            kind: self.kind,
        }
    }
}

/// A span of lines whose content belongs to an embedded language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRegion {
    pub start_line: u32,
    pub end_line: u32,
    pub language_id: String,
}

impl LanguageRegion {
    pub fn new(start_line: u32, end_line: u32, language_id: impl Into<String>) -> Self {
        Self {
            start_line,
            end_line,
            language_id: language_id.into(),
        }
    }

    /// Number of lines covered by the region
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}
