//! Recursive descent parser.
//!
//! Classifies the next significant byte and dispatches to a sub-parser.
//! The grammar is lenient in the ways the writer needs: commas are plain
//! separators (repeated and trailing commas are accepted), object keys may
//! be bare tokens, and numbers take `u`/`d` suffixes.

use super::lexer::{unescape, Cursor, Lexer, NumberForm};
use super::limits::Limits;
use super::types::{Array, Object, Value};
use crate::error::{Error, ErrorKind, JsonResult};

/// One pass of value parsing over a borrowed buffer.
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, cursor: Cursor, limits: Limits) -> Self {
        Self {
            lexer: Lexer::resume(input, cursor, limits),
            limits,
            depth: 0,
        }
    }

    pub(crate) fn cursor(&self) -> Cursor {
        self.lexer.cursor()
    }

    /// Skip insignificant input and report whether anything is left.
    pub(crate) fn at_end(&mut self) -> bool {
        self.lexer.skip_insignificant();
        self.lexer.peek().is_none()
    }

    /// Parse the next value, or `None` at end of input.
    pub(crate) fn next_value(&mut self) -> JsonResult<Option<Value>> {
        self.lexer.skip_insignificant();
        let Some(byte) = self.lexer.peek() else {
            return Ok(None);
        };

        let value = match byte {
            b'-' | b'+' | b'.' | b'0'..=b'9' => self.parse_number()?,
            b'"' => self.parse_string()?,
            b'{' => self.parse_object()?,
            b'[' => self.parse_array()?,
            _ => self.parse_literal()?,
        };
        tracing::trace!(tag = %value.tag(), "value parsed");
        Ok(Some(value))
    }

    fn unexpected(&self) -> Error {
        self.lexer
            .error(ErrorKind::UnexpectedCharacter(self.lexer.current_char()))
    }

    /// `null`, `NULL`, `true` or `false`.
    fn parse_literal(&mut self) -> JsonResult<Value> {
        if self.lexer.eat("null") || self.lexer.eat("NULL") {
            Ok(Value::Null)
        } else if self.lexer.eat("true") {
            Ok(Value::Bool(true))
        } else if self.lexer.eat("false") {
            Ok(Value::Bool(false))
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_number(&mut self) -> JsonResult<Value> {
        let start = self.lexer.position();
        let (text, form) = self.lexer.scan_number();

        let value = match form {
            NumberForm::Integer => text.parse().ok().map(Value::Integer),
            NumberForm::Unsigned => text.parse().ok().map(Value::Unsigned),
            // Overflow parses to infinity, which the writer cannot emit.
            NumberForm::Real => text
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite())
                .map(Value::Real),
        };
        value.ok_or_else(|| {
            self.lexer
                .error_at(ErrorKind::MalformedNumber(text.to_string()), start)
        })
    }

    /// Scan and unescape a quoted string.
    fn read_text(&mut self) -> JsonResult<String> {
        let start = self.lexer.position();
        let raw = self.lexer.scan_string()?;
        match unescape(raw) {
            Ok(text) => Ok(text.into_owned()),
            Err(kind) => Err(self.lexer.error_at(kind, start)),
        }
    }

    fn parse_string(&mut self) -> JsonResult<Value> {
        let text = self.read_text()?;
        Ok(Value::string(text))
    }

    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(self
                .lexer
                .error(ErrorKind::NestingTooDeep(self.limits.max_nesting_depth)));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn malformed_object(&self, what: &str) -> Error {
        self.lexer.error(ErrorKind::MalformedObject(format!(
            "`{}` found where {what} expected",
            self.lexer.current_char()
        )))
    }

    fn parse_object(&mut self) -> JsonResult<Value> {
        self.enter()?;
        // Consume opening brace
        self.lexer.bump();

        let mut object = Object::new();
        let mut key: Option<String> = None;

        loop {
            self.lexer.skip_insignificant();
            let Some(byte) = self.lexer.peek() else {
                return Err(self.lexer.error(ErrorKind::UnterminatedObject));
            };

            match byte {
                b'}' | b',' if key.is_some() => return Err(self.malformed_object("`:`")),
                b'}' => {
                    self.lexer.bump();
                    break;
                }
                b',' => self.lexer.bump(),
                b':' => {
                    let Some(name) = key.take() else {
                        return Err(self.malformed_object("key"));
                    };
                    self.lexer.bump();
                    self.lexer.skip_insignificant();
                    match self.lexer.peek() {
                        None => return Err(self.lexer.error(ErrorKind::UnterminatedObject)),
                        Some(b'}' | b',' | b':') => return Err(self.malformed_object("value")),
                        Some(_) => {}
                    }
                    let Some(value) = self.next_value()? else {
                        return Err(self.lexer.error(ErrorKind::UnterminatedObject));
                    };
                    // Duplicate keys overwrite.
                    object.insert(name, value);
                }
                _ if key.is_some() => return Err(self.malformed_object("`:`")),
                b'"' => key = Some(self.read_text()?),
                _ if self.limits.bare_keys => {
                    let bare = self.lexer.scan_bare_key();
                    if bare.is_empty() {
                        return Err(self.malformed_object("key"));
                    }
                    key = Some(bare.to_string());
                }
                _ => return Err(self.malformed_object("key")),
            }
        }

        self.leave();
        Ok(Value::from(object))
    }

    fn parse_array(&mut self) -> JsonResult<Value> {
        self.enter()?;
        // Consume opening bracket
        self.lexer.bump();

        let mut array = Array::new();

        loop {
            self.lexer.skip_insignificant();
            match self.lexer.peek() {
                None => return Err(self.lexer.error(ErrorKind::UnterminatedArray)),
                Some(b',') => self.lexer.bump(),
                Some(b']') => {
                    self.lexer.bump();
                    break;
                }
                Some(b'}' | b':') => {
                    return Err(self.lexer.error(ErrorKind::MalformedArray(format!(
                        "`{}` found where element expected",
                        self.lexer.current_char()
                    ))));
                }
                Some(_) => {
                    let Some(value) = self.next_value()? else {
                        return Err(self
                            .lexer
                            .error(ErrorKind::MalformedArray("missing element".to_string())));
                    };
                    array.push(value);
                }
            }
        }

        self.leave();
        Ok(Value::from(array))
    }
}
