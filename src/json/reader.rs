//! Buffered reader producing a sequence of values.
//!
//! The whole input is loaded up front into an owned, immutable buffer; each
//! call to [`Reader::next_value`] parses one value from where the previous
//! call stopped.

use std::io::Read;

use super::lexer::{locate, Cursor};
use super::limits::Limits;
use super::parser::Parser;
use super::types::Value;
use crate::error::{Error, ErrorKind, JsonResult, Position};

/// Reads values from a buffered input.
///
/// # Example
///
/// ```
/// use fastjson::json::Reader;
///
/// let mut reader = Reader::new("1 [2, 3] // done").unwrap();
/// assert_eq!(reader.next_value().unwrap().unwrap().get_integer().unwrap(), 1);
/// assert_eq!(reader.next_value().unwrap().unwrap().array_size().unwrap(), 2);
/// assert!(reader.next_value().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct Reader {
    buffer: String,
    cursor: Cursor,
    limits: Limits,
    failed: bool,
}

impl Reader {
    /// Reader over `input` with default limits.
    pub fn new(input: impl Into<Vec<u8>>) -> JsonResult<Self> {
        Self::with_limits(input, Limits::default())
    }

    /// Reader over `input` with custom limits.
    pub fn with_limits(input: impl Into<Vec<u8>>, limits: Limits) -> JsonResult<Self> {
        let bytes = input.into();
        if bytes.len() > limits.max_input_size {
            return Err(ErrorKind::InputTooLarge {
                size: bytes.len(),
                limit: limits.max_input_size,
            }
            .into());
        }

        let buffer = String::from_utf8(bytes).map_err(|err| {
            let position = locate(err.as_bytes(), err.utf8_error().valid_up_to());
            Error::at(ErrorKind::InvalidUtf8, position)
        })?;
        tracing::debug!(bytes = buffer.len(), "reader buffer loaded");

        Ok(Self {
            buffer,
            cursor: Cursor::start(),
            limits,
            failed: false,
        })
    }

    /// Reads all of `source` with default limits.
    pub fn from_reader<R: Read>(source: R) -> JsonResult<Self> {
        Self::from_reader_with_limits(source, Limits::default())
    }

    /// Reads all of `source` with custom limits.
    ///
    /// At most one byte past `max_input_size` is read before giving up.
    pub fn from_reader_with_limits<R: Read>(source: R, limits: Limits) -> JsonResult<Self> {
        let mut bytes = Vec::new();
        let cap = u64::try_from(limits.max_input_size)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        source.take(cap).read_to_end(&mut bytes)?;
        Self::with_limits(bytes, limits)
    }

    /// Parses the next value; `Ok(None)` once only whitespace and comments
    /// remain.
    ///
    /// A failed call does not advance the cursor, so calling again reports
    /// the same error.
    pub fn next_value(&mut self) -> JsonResult<Option<Value>> {
        let mut parser = Parser::new(&self.buffer, self.cursor, self.limits);
        let result = parser.next_value();
        if result.is_ok() {
            self.cursor = parser.cursor();
        }
        result
    }

    /// Line and column where the next call starts reading.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Limits in effect.
    pub fn limits(&self) -> Limits {
        self.limits
    }
}

/// Yields values until end of input or the first error.
impl Iterator for Reader {
    type Item = JsonResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_value().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Parses exactly one value from `input` with default limits.
pub fn parse(input: &str) -> JsonResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parses exactly one value from `input` with custom limits.
///
/// Fails with `EmptyInput` when there is no value and `TrailingContent`
/// when anything but whitespace and comments follows it.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<Value> {
    if input.len() > limits.max_input_size {
        return Err(ErrorKind::InputTooLarge {
            size: input.len(),
            limit: limits.max_input_size,
        }
        .into());
    }

    let mut parser = Parser::new(input, Cursor::start(), limits);
    let Some(value) = parser.next_value()? else {
        return Err(ErrorKind::EmptyInput.into());
    };
    if !parser.at_end() {
        return Err(Error::at(
            ErrorKind::TrailingContent,
            parser.cursor().position(),
        ));
    }
    Ok(value)
}

/// Parses every value in `input` with default limits.
pub fn parse_all(input: &str) -> JsonResult<Vec<Value>> {
    Reader::new(input)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    #[test]
    fn test_reads_sequence() {
        let mut reader = Reader::new("1 \"two\"\n[3]\n{}").unwrap();
        assert_eq!(reader.next_value().unwrap(), Some(Value::Integer(1)));
        assert_eq!(
            reader.next_value().unwrap().unwrap().get_string().unwrap(),
            "two"
        );
        assert_eq!(reader.next_value().unwrap().unwrap().array_size().unwrap(), 1);
        assert_eq!(reader.next_value().unwrap().unwrap().member_count().unwrap(), 0);
        assert!(reader.next_value().unwrap().is_none());
        assert!(reader.next_value().unwrap().is_none());
    }

    #[test]
    fn test_from_reader() {
        let source = IoCursor::new(b"[1, 2]\n// trailing comment".to_vec());
        let values: Vec<Value> = Reader::from_reader(source)
            .unwrap()
            .collect::<JsonResult<_>>()
            .unwrap();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_input_too_large() {
        let limits = Limits::lenient().with_max_input_size(4);
        let err = Reader::with_limits("12345", limits).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InputTooLarge { size: 5, limit: 4 }
        ));
        let err = Reader::from_reader_with_limits(IoCursor::new(vec![b' '; 100]), limits)
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InputTooLarge { size: 5, .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Reader::new(vec![b'1', b'\n', b'"', 0xFF, b'"']).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidUtf8));
        assert_eq!(err.position(), Some(Position { line: 2, column: 2 }));
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let reader = Reader::new("1 @ 2").unwrap();
        let items: Vec<_> = reader.collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_error_is_reported_again() {
        let mut reader = Reader::new("1\n[1, 2,").unwrap();
        assert_eq!(reader.next_value().unwrap(), Some(Value::Integer(1)));
        let before = reader.position();

        let first = reader.next_value().unwrap_err();
        assert!(matches!(first.kind(), ErrorKind::UnterminatedArray));
        assert_eq!(reader.position(), before);

        let second = reader.next_value().unwrap_err();
        assert!(matches!(second.kind(), ErrorKind::UnterminatedArray));
        assert_eq!(second.position(), first.position());
        assert_eq!(second.position(), Some(Position { line: 2, column: 7 }));
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(parse(" 5 // five").unwrap(), Value::Integer(5));
        assert!(matches!(
            parse("  ").unwrap_err().kind(),
            ErrorKind::EmptyInput
        ));
        let err = parse("1\n 2").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TrailingContent));
        assert_eq!(err.position(), Some(Position { line: 2, column: 2 }));
    }

    #[test]
    fn test_parse_all() {
        let values = parse_all("1 2u 3.0").unwrap();
        assert_eq!(
            values,
            vec![Value::Integer(1), Value::Unsigned(2), Value::Real(3.0)]
        );
    }
}
