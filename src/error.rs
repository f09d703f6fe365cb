//! Error handling for fastjson.
//!
//! Every failure is an [`Error`]: an [`ErrorKind`] describing what went wrong,
//! plus the line/column where the reader detected it. Errors raised by value
//! accessors or the writer carry no position.

use std::fmt;

use thiserror::Error as ThisError;

use crate::json::types::Tag;

/// What went wrong.
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    /// Accessor used against a value of another tag
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Tag the accessor requires
        expected: Tag,
        /// Tag the value actually has
        found: Tag,
    },

    /// Array index past the end
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Array length at the time of access
        len: usize,
    },

    /// Input ended inside a string
    #[error("reached end of input while parsing string")]
    UnterminatedString,

    /// Input ended inside an object
    #[error("reached end of input while parsing object")]
    UnterminatedObject,

    /// Input ended inside an array
    #[error("reached end of input while parsing array")]
    UnterminatedArray,

    /// Delimiter in the wrong position inside an object
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// Delimiter in the wrong position inside an array
    #[error("malformed array: {0}")]
    MalformedArray(String),

    /// Numeral that does not convert to its target type
    #[error("malformed number `{0}`")]
    MalformedNumber(String),

    /// Escape sequence the reader does not decode
    #[error("unsupported escape sequence `\\{0}`")]
    UnsupportedEscape(char),

    /// Control character the writer cannot escape
    #[error("unsupported character U+{0:04X} in string")]
    UnsupportedCharacter(u32),

    /// Token the lexer cannot classify
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),

    /// Coercion requested against an incompatible value
    #[error("cannot cast {from} value to {to}")]
    CastError {
        /// Tag of the source value
        from: Tag,
        /// Name of the requested type
        to: &'static str,
    },

    /// Input bytes are not UTF-8
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// Input exceeds the configured size cap
    #[error("input of {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Input size in bytes
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// Nesting exceeds the configured depth cap
    #[error("nesting depth exceeds limit of {0}")]
    NestingTooDeep(usize),

    /// NaN or infinite real handed to the writer
    #[error("cannot write non-finite real {0}")]
    NonFiniteNumber(f64),

    /// Input holds no value where one was required
    #[error("input contains no value")]
    EmptyInput,

    /// Significant content after the single value that was expected
    #[error("unexpected content after value")]
    TrailingContent,

    /// Failure of the underlying stream
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ErrorKind {
    /// Stable identifier of the kind, independent of its payload.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch { .. } => "TypeMismatch",
            ErrorKind::IndexOutOfRange { .. } => "IndexOutOfRange",
            ErrorKind::UnterminatedString => "UnterminatedString",
            ErrorKind::UnterminatedObject => "UnterminatedObject",
            ErrorKind::UnterminatedArray => "UnterminatedArray",
            ErrorKind::MalformedObject(_) => "MalformedObject",
            ErrorKind::MalformedArray(_) => "MalformedArray",
            ErrorKind::MalformedNumber(_) => "MalformedNumber",
            ErrorKind::UnsupportedEscape(_) => "UnsupportedEscape",
            ErrorKind::UnsupportedCharacter(_) => "UnsupportedCharacter",
            ErrorKind::UnexpectedCharacter(_) => "UnexpectedCharacter",
            ErrorKind::CastError { .. } => "CastError",
            ErrorKind::InvalidUtf8 => "InvalidUtf8",
            ErrorKind::InputTooLarge { .. } => "InputTooLarge",
            ErrorKind::NestingTooDeep(_) => "NestingTooDeep",
            ErrorKind::NonFiniteNumber(_) => "NonFiniteNumber",
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::TrailingContent => "TrailingContent",
            ErrorKind::Io(_) => "Io",
        }
    }
}

/// Line and column of a reader error, both 1-based.
///
/// The column counts bytes since the last line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number
    pub line: usize,
    /// Column within the line
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A fastjson failure.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    position: Option<Position>,
}

impl Error {
    /// Error at a known input position.
    pub fn at(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Where in the input the failure was detected, if it came from a reader.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Line of the failure, or 0 when there is no position.
    pub fn line(&self) -> usize {
        self.position.map_or(0, |p| p.line)
    }

    /// Column of the failure, or 0 when there is no position.
    pub fn column(&self) -> usize {
        self.position.map_or(0, |p| p.column)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} at {}", self.kind, position),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        ErrorKind::Io(err).into()
    }
}

/// Result type for fastjson operations.
pub type JsonResult<T> = Result<T, Error>;
