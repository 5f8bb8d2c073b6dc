//! Tag nesting ranges
//!
//! Opening tags are matched to closing tags with an explicit stack. A closing
//! tag pops everything above its matching opener; those unmatched openers are
//! dropped without a range, as are openers still on the stack at end of input.
//!
//! Self-closing and void tags never reach the stack. When their attributes
//! wrap onto later lines they fold from the tag line to the last attribute
//! line.

use tracing::trace;

use crate::range::{FoldingRange, FoldingRangeKind};
use crate::scanner::{is_void_element, Token};

struct OpenTag<'t> {
    name: &'t str,
    line: u32,
    /// Line of the last attribute seen before the tag's terminator
    last_attribute_line: Option<u32>,
}

/// Collector for ranges between opening and closing tags
pub struct TagRangeCollector;

impl TagRangeCollector {
    pub fn collect(tokens: &[Token]) -> Vec<FoldingRange> {
        let mut ranges = Vec::new();
        let mut stack: Vec<OpenTag<'_>> = Vec::new();
        // Opening tag whose `>` has not been seen yet
        let mut pending: Option<OpenTag<'_>> = None;

        for token in tokens {
            match token {
                Token::StartTag { name, line } => {
                    pending = Some(OpenTag {
                        name: name.as_str(),
                        line: *line,
                        last_attribute_line: None,
                    });
                }
                Token::Attribute { line, .. } => {
                    if let Some(open) = pending.as_mut() {
                        open.last_attribute_line = Some(*line);
                    }
                }
                Token::StartTagClose { line } => {
                    if let Some(open) = pending.take() {
                        if is_void_element(open.name) {
                            ranges.extend(self_closing_range(&open, *line));
                        } else {
                            stack.push(open);
                        }
                    }
                }
                Token::StartTagSelfClose { line } => {
                    if let Some(open) = pending.take() {
                        ranges.extend(self_closing_range(&open, *line));
                    }
                }
                Token::EndTag { name, line } => {
                    pending = None;
                    if let Some(index) = stack.iter().rposition(|open| open.name == name.as_str()) {
                        let open_line = stack[index].line;
                        if index + 1 < stack.len() {
                            trace!(
                                "</{}> at line {} discards {} unclosed tags",
                                name,
                                line,
                                stack.len() - index - 1
                            );
                        }
                        stack.truncate(index);
                        ranges.extend(tag_range(open_line, *line));
                    }
                }
                _ => {}
            }
        }

        ranges
    }
}

/// Range of a tag that closes itself at `terminator_line`
///
/// Ends on the last attribute line, or the line before the terminator when
/// the tag has no attributes.
fn self_closing_range(open: &OpenTag<'_>, terminator_line: u32) -> Option<FoldingRange> {
    match open.last_attribute_line {
        Some(end_line) => FoldingRange::spanning(open.line, end_line, FoldingRangeKind::Tag),
        None => tag_range(open.line, terminator_line),
    }
}

/// Range from the opening line to the line before the closing token
fn tag_range(open_line: u32, close_line: u32) -> Option<FoldingRange> {
    let end_line = close_line.checked_sub(1)?;
    FoldingRange::spanning(open_line, end_line, FoldingRangeKind::Tag)
}
