//! Serializer producing text the reader accepts.
//!
//! Objects print one member per line in key order, each followed by a
//! comma (the reader treats commas as separators, so the trailing one is
//! harmless). Unsigned integers keep their `u` suffix and reals always carry
//! a decimal point or exponent, so every scalar reads back with its tag.

use std::io::Write;

use super::limits::Limits;
use super::types::Value;
use crate::error::{ErrorKind, JsonResult};

/// Escape `s` and append it, quoted, to `output`.
///
/// `"`, `\`, `/` and the backspace, form feed, newline, carriage return and
/// tab controls get two-character escapes. Any other control character
/// fails with `UnsupportedCharacter`.
fn write_string(s: &str, output: &mut String) -> JsonResult<()> {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '/' => output.push_str("\\/"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => return Err(ErrorKind::UnsupportedCharacter(c as u32).into()),
            c => output.push(c),
        }
    }
    output.push('"');
    Ok(())
}

/// Escaped form of `s`, without surrounding quotes.
pub fn escape(s: &str) -> JsonResult<String> {
    let mut quoted = String::with_capacity(s.len() + 2);
    write_string(s, &mut quoted)?;
    Ok(quoted[1..quoted.len() - 1].to_string())
}

/// Text for a real: shortest round-trip form, always with `.` or an
/// exponent so it reads back as a real.
fn write_real(value: f64, output: &mut String) -> JsonResult<()> {
    if !value.is_finite() {
        return Err(ErrorKind::NonFiniteNumber(value).into());
    }
    output.push_str(&format!("{value:?}"));
    Ok(())
}

struct Renderer {
    max_depth: usize,
}

impl Renderer {
    fn value(&self, value: &Value, output: &mut String, depth: usize) -> JsonResult<()> {
        match value {
            Value::Integer(n) => output.push_str(&n.to_string()),
            Value::Unsigned(n) => {
                output.push_str(&n.to_string());
                output.push('u');
            }
            Value::Real(r) => write_real(*r, output)?,
            Value::Bool(true) => output.push_str("true"),
            Value::Bool(false) => output.push_str("false"),
            Value::Null => output.push_str("null"),
            Value::String(s) => write_string(&s.borrow(), output)?,
            Value::Object(object) => {
                let depth = self.descend(depth)?;
                output.push_str("{\n");
                for (key, member) in object.borrow().iter() {
                    write_string(key, output)?;
                    output.push_str(" : ");
                    self.value(member, output, depth)?;
                    output.push_str(",\n");
                }
                output.push('}');
            }
            Value::Array(array) => {
                let depth = self.descend(depth)?;
                output.push('[');
                for (i, element) in array.borrow().iter().enumerate() {
                    if i > 0 {
                        output.push_str(", ");
                    }
                    self.value(element, output, depth)?;
                }
                output.push(']');
            }
        }
        Ok(())
    }

    // A tree that contains itself would recurse forever; the cap turns that
    // into an error.
    fn descend(&self, depth: usize) -> JsonResult<usize> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(ErrorKind::NestingTooDeep(self.max_depth).into());
        }
        Ok(depth)
    }
}

/// Serializes `value` without the trailing newline, using default limits.
pub fn to_string(value: &Value) -> JsonResult<String> {
    to_string_with_limits(value, Limits::default())
}

/// Serializes `value` without the trailing newline.
pub fn to_string_with_limits(value: &Value, limits: Limits) -> JsonResult<String> {
    let mut output = String::new();
    Renderer {
        max_depth: limits.max_nesting_depth,
    }
    .value(value, &mut output, 0)?;
    Ok(output)
}

/// Writes values to a byte sink, one per line.
pub struct Writer<W: Write> {
    out: W,
    limits: Limits,
}

impl<W: Write> Writer<W> {
    /// Writer over `out` with default limits.
    pub fn new(out: W) -> Self {
        Self::with_limits(out, Limits::default())
    }

    /// Writer over `out` with custom limits.
    pub fn with_limits(out: W, limits: Limits) -> Self {
        Self { out, limits }
    }

    /// Serializes `value` followed by a newline.
    ///
    /// The value is rendered completely before anything is written, so a
    /// value that fails to serialize leaves the sink untouched.
    pub fn put_value(&mut self, value: &Value) -> JsonResult<()> {
        let mut text = to_string_with_limits(value, self.limits)?;
        text.push('\n');
        self.out.write_all(text.as_bytes())?;
        tracing::trace!(bytes = text.len(), tag = %value.tag(), "value written");
        Ok(())
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> JsonResult<()> {
        self.out.flush()?;
        Ok(())
    }

    /// The sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// The sink, mutably.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Unwraps the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
