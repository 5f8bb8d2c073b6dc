//! Embedded-language partitioning
//!
//! Maps the raw-text content of `<style>` and `<script>` elements to
//! [`LanguageRegion`]s. A region only covers whole lines strictly inside the
//! element: content sharing a line with the opening `>` or the closing tag is
//! left to the host document.

use crate::range::LanguageRegion;
use crate::scanner::{MarkupScanner, Token};

/// Language id for the content of a raw-text element
pub fn language_for(element: &str) -> Option<&'static str> {
    match element {
        "style" => Some("css"),
        "script" => Some("javascript"),
        _ => None,
    }
}

/// Regions for the raw-text tokens of a scanned document, in document order
pub fn partition(tokens: &[Token]) -> Vec<LanguageRegion> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::RawText {
                element,
                start_line,
                end_line,
                terminated,
            } => {
                let language = language_for(element)?;
                let start = start_line + 1;
                let end = if *terminated {
                    end_line.checked_sub(1)?
                } else {
                    *end_line
                };
                (start <= end).then(|| LanguageRegion::new(start, end, language))
            }
            _ => None,
        })
        .collect()
}

/// Scan `text` and partition it
pub fn partition_text(text: &str) -> Vec<LanguageRegion> {
    partition(&MarkupScanner::scan(text))
}
