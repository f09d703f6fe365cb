//! Cursor over a reader's buffer.
//!
//! The lexer never copies or rewrites input: tokens come back as `&str`
//! slices borrowed from the buffer, and only strings with escapes allocate
//! when unescaped. It tracks the line and the offset of the last line break
//! so every error can carry a position.

use std::borrow::Cow;

use super::limits::Limits;
use crate::error::{Error, ErrorKind, Position};

/// Resumable cursor state, saved by the reader between values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pos: usize,
    line: usize,
    line_start: usize,
}

impl Cursor {
    pub(crate) const fn start() -> Self {
        Self {
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    pub(crate) fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.pos - self.line_start + 1,
        }
    }
}

/// How a scanned numeral is to be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberForm {
    /// No decimal point, exponent or suffix
    Integer,
    /// `u` suffix
    Unsigned,
    /// Decimal point, exponent, or `d` suffix
    Real,
}

/// Byte cursor over a UTF-8 buffer.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    limits: Limits,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer at the start of `input`.
    pub fn new(input: &'a str, limits: Limits) -> Self {
        Self::resume(input, Cursor::start(), limits)
    }

    pub(crate) fn resume(input: &'a str, cursor: Cursor, limits: Limits) -> Self {
        Self {
            input,
            pos: cursor.pos,
            line: cursor.line,
            line_start: cursor.line_start,
            limits,
        }
    }

    pub(crate) fn cursor(&self) -> Cursor {
        Cursor {
            pos: self.pos,
            line: self.line,
            line_start: self.line_start,
        }
    }

    /// Current line and column.
    pub fn position(&self) -> Position {
        self.cursor().position()
    }

    /// Error of `kind` at the current position.
    pub fn error(&self, kind: ErrorKind) -> Error {
        self.error_at(kind, self.position())
    }

    /// Error of `kind` at an earlier position.
    pub fn error_at(&self, kind: ErrorKind, position: Position) -> Error {
        tracing::debug!(
            line = position.line,
            column = position.column,
            kind = kind.name(),
            "parse error"
        );
        Error::at(kind, position)
    }

    /// Current byte, if any.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    /// Character at the cursor, for error messages.
    pub fn current_char(&self) -> char {
        self.input
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Consume one byte, tracking line breaks.
    pub fn bump(&mut self) {
        match self.peek() {
            Some(b'\n') => {
                self.line += 1;
                self.line_start = self.pos + 1;
            }
            Some(b'\r') => self.line_start = self.pos + 1,
            Some(_) => {}
            None => return,
        }
        self.pos += 1;
    }

    /// Consume `literal` if the input continues with it.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self
            .input
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(literal))
        {
            // Literals never contain line breaks.
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and, when enabled, `//` comments up to the next
    /// significant byte.
    pub fn skip_insignificant(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.bump(),
                b'/' if self.limits.comments && self.peek_at(1) == Some(b'/') => {
                    while let Some(c) = self.peek() {
                        self.bump();
                        if c == b'\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan a quoted string starting at `"`, returning the raw text between
    /// the quotes. Escapes are skipped over, not decoded.
    pub fn scan_string(&mut self) -> Result<&'a str, Error> {
        self.bump();
        let start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error(ErrorKind::UnterminatedString)),
                Some(b'\\') => {
                    self.bump();
                    if self.peek().is_none() {
                        return Err(self.error(ErrorKind::UnterminatedString));
                    }
                    self.bump();
                }
                Some(b'"') => {
                    let raw = &self.input[start..self.pos];
                    self.bump();
                    return Ok(raw);
                }
                Some(_) => self.bump(),
            }
        }
    }

    /// Scan a maximal run of digits, signs, `.`, `e` and `E`, plus an
    /// optional `u`/`d` suffix. The numeral text excludes the suffix.
    pub fn scan_number(&mut self) -> (&'a str, NumberForm) {
        let start = self.pos;
        let mut decimal = false;
        let mut exponent = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' | b'+' | b'-' => {}
                b'.' => decimal = true,
                b'e' | b'E' => exponent = true,
                _ => break,
            }
            self.pos += 1;
        }
        let text = &self.input[start..self.pos];

        let form = match self.peek() {
            Some(b'u') if self.limits.numeric_suffixes => {
                self.pos += 1;
                NumberForm::Unsigned
            }
            Some(b'd') if self.limits.numeric_suffixes => {
                self.pos += 1;
                NumberForm::Real
            }
            _ if decimal || exponent => NumberForm::Real,
            _ => NumberForm::Integer,
        };
        (text, form)
    }

    /// Scan an unquoted object key, stopping at whitespace, a delimiter or
    /// the start of a comment. Returns an empty slice when the cursor sits
    /// on one of those.
    pub fn scan_bare_key(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' | b':' | b',' | b'"' | b'{' | b'}' | b'[' | b']' => {
                    break
                }
                b'/' if self.limits.comments && self.peek_at(1) == Some(b'/') => break,
                _ => self.pos += 1,
            }
        }
        &self.input[start..self.pos]
    }
}

/// Position of byte `offset` within `input`.
pub fn locate(input: &[u8], offset: usize) -> Position {
    let offset = offset.min(input.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, b) in input[..offset].iter().enumerate() {
        match b {
            b'\n' => {
                line += 1;
                line_start = i + 1;
            }
            b'\r' => line_start = i + 1,
            _ => {}
        }
    }
    Position {
        line,
        column: offset - line_start + 1,
    }
}

/// Decode the escapes of a raw string token.
///
/// Supports `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r` and `\t`. `\u` and any
/// other escape fail with `UnsupportedEscape`. Borrows when there is
/// nothing to decode.
pub fn unescape(raw: &str) -> Result<Cow<'_, str>, ErrorKind> {
    if !raw.contains('\\') {
        return Ok(Cow::Borrowed(raw));
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\x08',
            Some('f') => '\x0C',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some(other) => return Err(ErrorKind::UnsupportedEscape(other)),
            None => return Err(ErrorKind::UnterminatedString),
        };
        result.push(decoded);
    }
    Ok(Cow::Owned(result))
}
