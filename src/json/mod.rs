//! JSON values, reading and writing.
//!
//! # Architecture
//!
//! - [`types`] - The [`Value`] tree and its accessors
//! - [`limits`] - Size caps and extension toggles
//! - [`lexer`] - Byte cursor, token scanning and unescaping
//! - [`reader`] - Buffered reader yielding one value per call
//! - [`writer`] - Serializer whose output the reader accepts
//! - [`ser`] - `serde::Serialize` for [`Value`]
//!
//! # Extensions
//!
//! With [`Limits::lenient`] (the default) the reader also accepts:
//!
//! - `u` and `d` numeric suffixes selecting unsigned and real
//! - `//` comments running to end of line
//! - unquoted object keys
//! - `NULL` as a spelling of `null`
//! - repeated and trailing commas
//!
//! # Example
//!
//! ```
//! use fastjson::json::{parse, to_string, Value};
//!
//! let value = parse("[1, 2u, 3.5, \"four\"]").unwrap();
//! assert_eq!(value.get_index(1).unwrap(), Value::Unsigned(2));
//! assert_eq!(to_string(&value).unwrap(), "[1, 2u, 3.5, \"four\"]");
//! ```

pub mod lexer;
pub mod limits;
pub(crate) mod parser;
pub mod reader;
pub mod ser;
pub mod types;
pub mod writer;

// Re-export commonly used items
pub use lexer::unescape;
pub use limits::{Limits, DEFAULT_MAX_INPUT_SIZE, DEFAULT_MAX_NESTING_DEPTH};
pub use reader::{parse, parse_all, parse_with_limits, Reader};
pub use types::{Array, FromValue, Object, Tag, Value};
pub use writer::{escape, to_string, to_string_with_limits, Writer};
