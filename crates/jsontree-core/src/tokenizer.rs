//! Single-pass JSON tokenizer.
//!
//! Turns raw UTF-8 text into the lazy token sequence the tree builder
//! consumes. The vocabulary matches what a standards-compliant JSON reader
//! emits: container delimiters, property names, strings, numbers, and the
//! boolean/null literals.
//!
//! Two deliberate layering choices:
//!
//! - A quoted string followed by `:` is emitted as [`Token::PropertyName`],
//!   otherwise as [`Token::String`]. The name/value distinction is made here
//!   so the builder never has to re-inspect context to classify a string.
//! - `,` and `:` are consumed as separators without exhaustive placement
//!   checks. Structural validation (what may follow what) lives in the
//!   builder, which rejects any stream the grammar cannot produce.
//!
//! Numbers are parsed as `f64`; the integer/float distinction is not
//! preserved.

use crate::error::{Result, TreeError};

/// A lexical token produced from raw JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    /// A quoted string in key position (followed by `:`).
    PropertyName(String),
    /// A quoted string in value position.
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

/// Lazy tokenizer over a borrowed input string.
///
/// Implements `Iterator<Item = Result<Token>>`; scanning stops at the first
/// error, and the error is yielded in place of a token. Offsets in errors
/// are byte offsets into the original input.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Current byte offset into the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn syntax(&self, offset: usize, message: impl Into<String>) -> TreeError {
        TreeError::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Skip whitespace and the `,`/`:` separators between tokens. Colons
    /// directly after a string are consumed by `lex_string` instead, so a
    /// colon reaching this point is between-token punctuation.
    fn skip_separators(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Lex a quoted string starting at the opening `"`, then classify it as
    /// a property name or a plain string by looking for a following `:`.
    fn lex_string(&mut self) -> Result<Token> {
        let text = self.lex_string_body()?;

        // Lookahead: whitespace then ':' means this string names a property.
        let bytes = self.bytes();
        let mut probe = self.pos;
        while probe < bytes.len() && matches!(bytes[probe], b' ' | b'\t' | b'\n' | b'\r') {
            probe += 1;
        }
        if probe < bytes.len() && bytes[probe] == b':' {
            self.pos = probe + 1;
            return Ok(Token::PropertyName(text));
        }
        Ok(Token::String(text))
    }

    /// Consume the string body including both quotes, returning the
    /// unescaped content.
    fn lex_string_body(&mut self) -> Result<String> {
        let start = self.pos;
        let bytes = self.bytes();
        debug_assert_eq!(bytes[self.pos], b'"');
        self.pos += 1;

        let mut out = String::new();
        loop {
            let Some(&b) = bytes.get(self.pos) else {
                return Err(self.syntax(start, "unterminated string"));
            };
            match b {
                b'"' => {
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    self.pos += 1;
                    self.lex_escape(start, &mut out)?;
                }
                _ => {
                    // Copy a full UTF-8 scalar, not a single byte.
                    let rest = &self.input[self.pos..];
                    let ch = rest.chars().next().ok_or_else(|| {
                        self.syntax(self.pos, "unterminated string")
                    })?;
                    out.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    /// Decode one escape sequence after the backslash has been consumed.
    fn lex_escape(&mut self, string_start: usize, out: &mut String) -> Result<()> {
        let bytes = self.bytes();
        let Some(&esc) = bytes.get(self.pos) else {
            return Err(self.syntax(string_start, "unterminated string"));
        };
        self.pos += 1;
        match esc {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let unit = self.lex_hex4()?;
                if (0xD800..=0xDBFF).contains(&unit) {
                    // High surrogate: a \uXXXX low surrogate must follow.
                    let tail_at = self.pos;
                    if bytes.get(self.pos) == Some(&b'\\') && bytes.get(self.pos + 1) == Some(&b'u')
                    {
                        self.pos += 2;
                        let low = self.lex_hex4()?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(self.syntax(tail_at, "invalid low surrogate"));
                        }
                        let combined = 0x10000u32
                            + (((unit as u32 - 0xD800) << 10) | (low as u32 - 0xDC00));
                        match char::from_u32(combined) {
                            Some(ch) => out.push(ch),
                            None => return Err(self.syntax(tail_at, "invalid surrogate pair")),
                        }
                    } else {
                        return Err(self.syntax(tail_at, "unpaired high surrogate"));
                    }
                } else if (0xDC00..=0xDFFF).contains(&unit) {
                    return Err(self.syntax(self.pos - 4, "unpaired low surrogate"));
                } else {
                    match char::from_u32(unit as u32) {
                        Some(ch) => out.push(ch),
                        None => return Err(self.syntax(self.pos - 4, "invalid unicode escape")),
                    }
                }
            }
            other => {
                return Err(self.syntax(
                    self.pos - 1,
                    format!("invalid escape character {:?}", other as char),
                ));
            }
        }
        Ok(())
    }

    /// Read exactly four hex digits, returning the code unit.
    fn lex_hex4(&mut self) -> Result<u16> {
        let start = self.pos;
        let hex = self
            .input
            .get(start..start + 4)
            .ok_or_else(|| self.syntax(start, "truncated unicode escape"))?;
        // from_str_radix tolerates a leading sign; JSON does not.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.syntax(start, "invalid unicode escape"));
        }
        let unit = u16::from_str_radix(hex, 16)
            .map_err(|_| self.syntax(start, "invalid unicode escape"))?;
        self.pos += 4;
        Ok(unit)
    }

    /// Lex a number starting at `-` or a digit. The extent is scanned first,
    /// then handed to the standard `f64` parser.
    fn lex_number(&mut self) -> Result<Token> {
        let start = self.pos;
        let bytes = self.bytes();

        if bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        let digits_start = self.pos;
        while matches!(bytes.get(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(self.syntax(start, "malformed number"));
        }
        if bytes.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            let frac_start = self.pos;
            while matches!(bytes.get(self.pos), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            if self.pos == frac_start {
                return Err(self.syntax(start, "malformed number"));
            }
        }
        if matches!(bytes.get(self.pos), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            let exp_start = self.pos;
            while matches!(bytes.get(self.pos), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            if self.pos == exp_start {
                return Err(self.syntax(start, "malformed number"));
            }
        }

        let text = &self.input[start..self.pos];
        let value: f64 = text
            .parse()
            .map_err(|_| self.syntax(start, format!("malformed number {:?}", text)))?;
        Ok(Token::Number(value))
    }

    /// Lex `true`, `false`, or `null`. The keyword must end at a delimiter.
    fn lex_literal(&mut self) -> Result<Token> {
        let start = self.pos;
        let rest = &self.input[start..];
        let (token, len) = if rest.starts_with("true") {
            (Token::Bool(true), 4)
        } else if rest.starts_with("false") {
            (Token::Bool(false), 5)
        } else if rest.starts_with("null") {
            (Token::Null, 4)
        } else {
            return Err(self.syntax(start, "invalid literal"));
        };

        match self.bytes().get(start + len) {
            None | Some(b' ' | b'\t' | b'\n' | b'\r' | b',' | b':' | b']' | b'}') => {
                self.pos += len;
                Ok(token)
            }
            Some(_) => Err(self.syntax(start, "invalid literal")),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_separators();
        let &b = self.bytes().get(self.pos)?;

        let result = match b {
            b'{' => {
                self.pos += 1;
                Ok(Token::StartObject)
            }
            b'}' => {
                self.pos += 1;
                Ok(Token::EndObject)
            }
            b'[' => {
                self.pos += 1;
                Ok(Token::StartArray)
            }
            b']' => {
                self.pos += 1;
                Ok(Token::EndArray)
            }
            b'"' => self.lex_string(),
            b'-' | b'0'..=b'9' => self.lex_number(),
            b't' | b'f' | b'n' => self.lex_literal(),
            other => Err(self.syntax(
                self.pos,
                format!("unexpected character {:?}", other as char),
            )),
        };

        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
