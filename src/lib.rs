//! fastjson - a small JSON value model with a buffered reader and writer.
//!
//! Values are a tagged tree: scalars are copied on assignment while
//! strings, objects and arrays are shared handles, so a member fetched from
//! an object can be mutated in place.
//!
//! # Architecture
//!
//! - [`json`] - Value model, reader, writer and serde bridge
//! - [`error`] - Error kinds and reader positions
//!
//! # Example
//!
//! ```
//! use fastjson::{Reader, Writer};
//!
//! let mut reader = Reader::new("{\"n\": 1} [true]").unwrap();
//! let mut writer = Writer::new(Vec::new());
//! while let Some(value) = reader.next_value().unwrap() {
//!     writer.put_value(&value).unwrap();
//! }
//! assert_eq!(writer.into_inner(), b"{\n\"n\" : 1,\n}\n[true]\n");
//! ```

// Library code reports malformed input as errors, never panics on it.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{Error, ErrorKind, JsonResult, Position};
pub use json::{Limits, Reader, Tag, Value, Writer};
