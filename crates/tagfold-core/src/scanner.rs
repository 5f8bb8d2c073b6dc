//! Markup scanner for HTML-like documents
//!
//! Produces the flat token stream the folding collectors consume. Scanning
//! never fails; anything that is not a tag, comment or declaration is skipped
//! one byte at a time.

/// A structural token with the 0-based line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name` of an opening tag (name lowercased)
    StartTag { name: String, line: u32 },
    /// An attribute inside an opening tag
    Attribute {
        name: String,
        value: Option<String>,
        line: u32,
    },
    /// The `>` ending an opening tag
    StartTagClose { line: u32 },
    /// The `/>` ending a self-closing tag
    StartTagSelfClose { line: u32 },
    /// `</name` of a closing tag (name lowercased)
    EndTag { name: String, line: u32 },
    /// `<!-- ... -->`, text without delimiters
    Comment {
        text: String,
        start_line: u32,
        end_line: u32,
    },
    /// Unparsed content of a `<script>` or `<style>` element
    ///
    /// `start_line` is the line of the opening tag's `>`, `end_line` the line
    /// of the closing tag (or the last line when the element never closes).
    RawText {
        element: String,
        start_line: u32,
        end_line: u32,
        terminated: bool,
    },
}

/// Elements that never have content or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// `type` attribute values that make a `<script>` JavaScript
const JAVASCRIPT_TYPES: &[&str] = &[
    "text/javascript",
    "application/javascript",
    "module",
    "text/ecmascript",
    "application/ecmascript",
    "text/babel",
    "text/jsx",
];

/// Check whether an element is void (`<br>`, `<img>`, ...)
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn is_javascript_type(script_type: Option<&str>) -> bool {
    match script_type {
        None => true,
        Some(value) => {
            let value = value.trim().to_ascii_lowercase();
            value.is_empty() || JAVASCRIPT_TYPES.contains(&value.as_str())
        }
    }
}

fn is_raw_text_element(name: &str, script_type: Option<&str>) -> bool {
    match name {
        "style" => true,
        "script" => is_javascript_type(script_type),
        _ => false,
    }
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

fn is_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':' | b'.')
}

fn is_attribute_name_char(byte: u8) -> bool {
    !byte.is_ascii_whitespace() && !matches!(byte, b'=' | b'>' | b'/' | b'<' | b'"' | b'\'')
}

/// Single-pass scanner over a markup document
pub struct MarkupScanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl<'a> MarkupScanner<'a> {
    /// Tokenize the whole document
    pub fn scan(text: &'a str) -> Vec<Token> {
        let mut scanner = MarkupScanner {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            line: 0,
            tokens: Vec::new(),
        };
        scanner.run();
        scanner.tokens
    }

    fn run(&mut self) {
        while let Some(byte) = self.peek() {
            if byte != b'<' {
                self.bump();
            } else if self.starts_with(b"<!--") {
                self.comment();
            } else if self.starts_with(b"</") && self.byte_at(self.pos + 2).is_some_and(is_name_start)
            {
                self.end_tag();
            } else if self.byte_at(self.pos + 1).is_some_and(is_name_start) {
                self.start_tag();
            } else if self.starts_with(b"<!") || self.starts_with(b"<?") {
                self.skip_declaration();
            } else {
                self.bump();
            }
        }
    }

    fn start_tag(&mut self) {
        let line = self.line;
        self.pos += 1;
        let name = self.read_while(is_name_char).to_ascii_lowercase();
        self.tokens.push(Token::StartTag {
            name: name.clone(),
            line,
        });

        let mut script_type = None;
        loop {
            self.skip_whitespace();
            let Some(byte) = self.peek() else {
                return;
            };
            match byte {
                b'>' => {
                    self.tokens.push(Token::StartTagClose { line: self.line });
                    self.pos += 1;
                    if is_raw_text_element(&name, script_type.as_deref()) {
                        self.raw_text(name);
                    }
                    return;
                }
                b'/' if self.byte_at(self.pos + 1) == Some(b'>') => {
                    self.tokens.push(Token::StartTagSelfClose { line: self.line });
                    self.pos += 2;
                    return;
                }
                // Another tag begins before this one was closed
                b'<' => return,
                b'/' => self.pos += 1,
                _ => {
                    if let Some((attr_name, value)) = self.attribute() {
                        if attr_name == "type" {
                            script_type = value;
                        }
                    }
                }
            }
        }
    }

    fn attribute(&mut self) -> Option<(String, Option<String>)> {
        let line = self.line;
        let name = self.read_while(is_attribute_name_char).to_ascii_lowercase();
        if name.is_empty() {
            self.bump();
            return None;
        }

        self.skip_whitespace();
        let value = if self.peek() == Some(b'=') {
            self.pos += 1;
            self.skip_whitespace();
            self.attribute_value()
        } else {
            None
        };

        self.tokens.push(Token::Attribute {
            name: name.clone(),
            value: value.clone(),
            line,
        });
        Some((name, value))
    }

    fn attribute_value(&mut self) -> Option<String> {
        match self.peek()? {
            quote @ (b'"' | b'\'') => {
                self.pos += 1;
                let start = self.pos;
                let end = self
                    .find(&[quote], false)
                    .unwrap_or(self.bytes.len());
                self.advance_to(end);
                let value = self.text[start..end].to_string();
                if end < self.bytes.len() {
                    self.pos += 1;
                }
                Some(value)
            }
            _ => Some(self.read_while(|b| !b.is_ascii_whitespace() && b != b'>')),
        }
    }

    fn end_tag(&mut self) {
        let line = self.line;
        self.pos += 2;
        let name = self.read_while(is_name_char).to_ascii_lowercase();
        self.tokens.push(Token::EndTag { name, line });

        while let Some(byte) = self.peek() {
            match byte {
                b'>' => {
                    self.pos += 1;
                    return;
                }
                b'<' => return,
                _ => self.bump(),
            }
        }
    }

    fn comment(&mut self) {
        let start_line = self.line;
        self.pos += 4;
        let start = self.pos;
        let end = self.find(b"-->", false).unwrap_or(self.bytes.len());
        self.advance_to(end);

        self.tokens.push(Token::Comment {
            text: self.text[start..end].to_string(),
            start_line,
            end_line: self.line,
        });

        if end < self.bytes.len() {
            self.pos += 3;
        }
    }

    fn raw_text(&mut self, element: String) {
        let start_line = self.line;
        let closing = format!("</{element}");
        let (end, terminated) = match self.find(closing.as_bytes(), true) {
            Some(end) => (end, true),
            None => (self.bytes.len(), false),
        };
        self.advance_to(end);

        self.tokens.push(Token::RawText {
            element,
            start_line,
            end_line: self.line,
            terminated,
        });
    }

    /// Skip `<!DOCTYPE ...>` and `<? ... ?>`
    fn skip_declaration(&mut self) {
        while let Some(byte) = self.peek() {
            self.bump();
            if byte == b'>' {
                return;
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(prefix)
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn advance_to(&mut self, target: usize) {
        let newlines = self.bytes[self.pos..target]
            .iter()
            .filter(|b| **b == b'\n')
            .count();
        self.line += newlines as u32;
        self.pos = target;
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Consume bytes matching `pred`; the predicates used here only stop on
    /// ASCII bytes, so the returned slice is always on char boundaries.
    fn read_while(&mut self, pred: impl Fn(u8) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        self.text[start..self.pos].to_string()
    }

    /// Absolute offset of the next occurrence of `pattern` at or after `pos`
    fn find(&self, pattern: &[u8], ignore_case: bool) -> Option<usize> {
        self.bytes[self.pos..]
            .windows(pattern.len())
            .position(|window| {
                if ignore_case {
                    window.eq_ignore_ascii_case(pattern)
                } else {
                    window == pattern
                }
            })
            .map(|offset| self.pos + offset)
    }
}
