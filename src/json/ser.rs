//! `serde::Serialize` for [`Value`].
//!
//! Lets a tree read by [`Reader`](super::Reader) be handed to any serde
//! format. Objects serialize as maps in key order, null as unit.
//!
//! Nesting is capped at [`DEFAULT_MAX_NESTING_DEPTH`] like the writer, so a
//! tree that contains itself fails with a custom error instead of
//! overflowing the stack.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::limits::DEFAULT_MAX_NESTING_DEPTH;
use super::types::Value;
use crate::error::ErrorKind;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Nested {
            value: self,
            depth: 0,
        }
        .serialize(serializer)
    }
}

/// A value together with the number of containers enclosing it.
struct Nested<'a> {
    value: &'a Value,
    depth: usize,
}

impl Nested<'_> {
    fn descend<E: serde::ser::Error>(&self) -> Result<usize, E> {
        let depth = self.depth + 1;
        if depth > DEFAULT_MAX_NESTING_DEPTH {
            return Err(E::custom(ErrorKind::NestingTooDeep(
                DEFAULT_MAX_NESTING_DEPTH,
            )));
        }
        Ok(depth)
    }
}

impl Serialize for Nested<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Unsigned(n) => serializer.serialize_u64(*n),
            Value::Real(r) => serializer.serialize_f64(*r),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(&s.borrow()),
            Value::Array(array) => {
                let depth = self.descend::<S::Error>()?;
                let array = array.borrow();
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for value in array.iter() {
                    seq.serialize_element(&Nested { value, depth })?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let depth = self.descend::<S::Error>()?;
                let object = object.borrow();
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, &Nested { value, depth })?;
                }
                map.end()
            }
        }
    }
}
