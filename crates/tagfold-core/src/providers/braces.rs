//! Folding for brace-delimited languages (CSS, JavaScript)
//!
//! Folds `{ ... }` and `[ ... ]` blocks, multi-line `/* ... */` comments and
//! comment region markers. String literals are skipped so brackets inside them
//! are ignored. JavaScript regex literals are not recognized.

use crate::folding::{Marker, RegionMarkers};
use crate::range::{FoldingRange, FoldingRangeKind};

/// Brace language flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceLanguage {
    Css,
    JavaScript,
}

impl BraceLanguage {
    /// Language id used in the provider registry
    pub fn id(self) -> &'static str {
        match self {
            BraceLanguage::Css => "css",
            BraceLanguage::JavaScript => "javascript",
        }
    }

    /// CSS has no `//` comments; `url(http://...)` must not start one
    fn has_line_comments(self) -> bool {
        matches!(self, BraceLanguage::JavaScript)
    }
}

struct BraceFolder<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    language: BraceLanguage,
    markers: &'a RegionMarkers,
    brackets: Vec<(u8, u32)>,
    regions: Vec<u32>,
    ranges: Vec<FoldingRange>,
}

/// Compute ranges for `text`, in lines relative to its first line
pub fn fold(text: &str, language: BraceLanguage, markers: &RegionMarkers) -> Vec<FoldingRange> {
    let mut folder = BraceFolder {
        text,
        bytes: text.as_bytes(),
        pos: 0,
        line: 0,
        language,
        markers,
        brackets: Vec::new(),
        regions: Vec::new(),
        ranges: Vec::new(),
    };
    folder.run();
    folder.ranges
}

impl BraceFolder<'_> {
    fn run(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b'/' if self.byte_at(self.pos + 1) == Some(b'*') => self.block_comment(),
                b'/' if self.language.has_line_comments()
                    && self.byte_at(self.pos + 1) == Some(b'/') =>
                {
                    self.line_comment()
                }
                b'"' | b'\'' | b'`' => self.string(byte),
                b'{' | b'[' => {
                    self.brackets.push((byte, self.line));
                    self.pos += 1;
                }
                b'}' | b']' => {
                    self.close_bracket(if byte == b'}' { b'{' } else { b'[' });
                    self.pos += 1;
                }
                _ => self.bump(),
            }
        }
    }

    fn close_bracket(&mut self, open: u8) {
        let Some(index) = self.brackets.iter().rposition(|(b, _)| *b == open) else {
            return;
        };
        let open_line = self.brackets[index].1;
        self.brackets.truncate(index);

        if let Some(end_line) = self.line.checked_sub(1) {
            self.ranges.extend(FoldingRange::spanning(
                open_line,
                end_line,
                FoldingRangeKind::Tag,
            ));
        }
    }

    fn block_comment(&mut self) {
        let start_line = self.line;
        let body_start = self.pos + 2;
        let body_end = self.bytes[body_start..]
            .windows(2)
            .position(|w| w == b"*/")
            .map_or(self.bytes.len(), |offset| body_start + offset);

        while self.pos < body_end {
            self.bump();
        }
        let body = &self.text[body_start..body_end];
        self.comment(body, start_line, self.line, true);
        self.pos = (body_end + 2).min(self.bytes.len());
    }

    fn line_comment(&mut self) {
        let body_start = self.pos + 2;
        let body_end = self.bytes[body_start..]
            .iter()
            .position(|b| *b == b'\n')
            .map_or(self.bytes.len(), |offset| body_start + offset);

        let body = &self.text[body_start..body_end];
        self.comment(body, self.line, self.line, false);
        self.pos = body_end;
    }

    fn comment(&mut self, body: &str, start_line: u32, end_line: u32, block: bool) {
        match self.markers.classify(body) {
            Some(Marker::Start) => self.regions.push(start_line),
            Some(Marker::End) => {
                if let Some(region_start) = self.regions.pop() {
                    self.ranges.extend(FoldingRange::spanning(
                        region_start,
                        end_line,
                        FoldingRangeKind::Region,
                    ));
                }
            }
            None if block => {
                self.ranges.extend(FoldingRange::spanning(
                    start_line,
                    end_line,
                    FoldingRangeKind::Comment,
                ));
            }
            None => {}
        }
    }

    fn string(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(byte) = self.peek() {
            match byte {
                b'\\' => {
                    self.pos += 1;
                    self.bump();
                }
                // Only template literals span lines
                b'\n' if quote != b'`' => return,
                _ if byte == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.bump(),
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    fn bump(&mut self) {
        match self.peek() {
            Some(b'\n') => self.line += 1,
            Some(_) => {}
            None => return,
        }
        self.pos += 1;
    }
}
