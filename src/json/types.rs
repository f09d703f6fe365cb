//! JSON value types.
//!
//! [`Value`] is a tagged variant over eight cases. Scalars (integer,
//! unsigned, real, boolean, null) are held by value. Strings, objects and
//! arrays are held behind `Rc<RefCell<_>>`: cloning a `Value` clones the
//! handle, not the payload, so a mutation through any alias is visible
//! through all of them. The payload is freed when the last handle drops.
//!
//! Objects are key-sorted (`BTreeMap`); member order from the input is not
//! kept.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{ErrorKind, JsonResult};

/// Object payload: unique string keys in sorted order.
pub type Object = BTreeMap<String, Value>;

/// Array payload.
pub type Array = Vec<Value>;

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Signed integer
    Integer,
    /// Unsigned integer
    Unsigned,
    /// Floating point
    Real,
    /// Boolean
    Bool,
    /// Shared string
    String,
    /// Shared object
    Object,
    /// Shared array
    Array,
    /// Null
    Null,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 8] = [
        Tag::Integer,
        Tag::Unsigned,
        Tag::Real,
        Tag::Bool,
        Tag::String,
        Tag::Object,
        Tag::Array,
        Tag::Null,
    ];

    /// Lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Integer => "integer",
            Tag::Unsigned => "unsigned",
            Tag::Real => "real",
            Tag::Bool => "boolean",
            Tag::String => "string",
            Tag::Object => "object",
            Tag::Array => "array",
            Tag::Null => "null",
        }
    }

    /// Whether values of this tag share their payload between clones.
    pub fn is_structured(self) -> bool {
        matches!(self, Tag::String | Tag::Object | Tag::Array)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON value.
///
/// `Clone` is cheap for every case: scalars are copied, structured payloads
/// gain another handle.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Signed integer
    Integer(i64),
    /// Unsigned integer (written with a `u` suffix)
    Unsigned(u64),
    /// Floating point
    Real(f64),
    /// Boolean
    Bool(bool),
    /// Shared string
    String(Rc<RefCell<String>>),
    /// Shared object
    Object(Rc<RefCell<Object>>),
    /// Shared array
    Array(Rc<RefCell<Array>>),
    /// Null
    #[default]
    Null,
}

impl Value {
    /// New string value with its own payload.
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(Rc::new(RefCell::new(value.into())))
    }

    /// New empty object.
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(Object::new())))
    }

    /// New empty array.
    pub fn array() -> Self {
        Value::Array(Rc::new(RefCell::new(Array::new())))
    }

    /// Fresh default value for `tag`: empty string/object/array, zero or
    /// `false` for scalars.
    pub fn default_for(tag: Tag) -> Self {
        match tag {
            Tag::Integer => Value::Integer(0),
            Tag::Unsigned => Value::Unsigned(0),
            Tag::Real => Value::Real(0.0),
            Tag::Bool => Value::Bool(false),
            Tag::String => Value::string(String::new()),
            Tag::Object => Value::object(),
            Tag::Array => Value::array(),
            Tag::Null => Value::Null,
        }
    }

    /// Current tag.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Integer(_) => Tag::Integer,
            Value::Unsigned(_) => Tag::Unsigned,
            Value::Real(_) => Tag::Real,
            Value::Bool(_) => Tag::Bool,
            Value::String(_) => Tag::String,
            Value::Object(_) => Tag::Object,
            Value::Array(_) => Tag::Array,
            Value::Null => Tag::Null,
        }
    }

    /// Returns true if this is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether both handles alias the same structured payload.
    ///
    /// Always false for scalars, which have no payload to share.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Discards the payload and installs a fresh default for `tag`.
    ///
    /// Other handles to the old payload keep it alive; this handle no
    /// longer aliases them.
    pub fn reset(&mut self, tag: Tag) {
        *self = Value::default_for(tag);
    }

    /// Resets to null.
    pub fn set_null(&mut self) {
        self.reset(Tag::Null);
    }

    fn mismatch(&self, expected: Tag) -> ErrorKind {
        ErrorKind::TypeMismatch {
            expected,
            found: self.tag(),
        }
    }

    // ---- getters ----

    /// Signed integer payload.
    pub fn get_integer(&self) -> JsonResult<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            _ => Err(self.mismatch(Tag::Integer).into()),
        }
    }

    /// Unsigned integer payload.
    pub fn get_unsigned(&self) -> JsonResult<u64> {
        match self {
            Value::Unsigned(n) => Ok(*n),
            _ => Err(self.mismatch(Tag::Unsigned).into()),
        }
    }

    /// Real payload.
    pub fn get_real(&self) -> JsonResult<f64> {
        match self {
            Value::Real(r) => Ok(*r),
            _ => Err(self.mismatch(Tag::Real).into()),
        }
    }

    /// Boolean payload.
    pub fn get_bool(&self) -> JsonResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Tag::Bool).into()),
        }
    }

    /// Copy of the string payload.
    pub fn get_string(&self) -> JsonResult<String> {
        match self {
            Value::String(s) => Ok(s.borrow().clone()),
            _ => Err(self.mismatch(Tag::String).into()),
        }
    }

    fn object_payload(&self) -> JsonResult<&Rc<RefCell<Object>>> {
        match self {
            Value::Object(object) => Ok(object),
            _ => Err(self.mismatch(Tag::Object).into()),
        }
    }

    fn array_payload(&self) -> JsonResult<&Rc<RefCell<Array>>> {
        match self {
            Value::Array(array) => Ok(array),
            _ => Err(self.mismatch(Tag::Array).into()),
        }
    }

    /// Member `key` of an object.
    ///
    /// An absent key is inserted as null and that null is returned, so this
    /// cannot tell "missing" from "present and null"; use
    /// [`has_member`](Self::has_member) for that.
    pub fn get_member(&self, key: &str) -> JsonResult<Value> {
        let mut object = self.object_payload()?.borrow_mut();
        if let Some(value) = object.get(key) {
            return Ok(value.clone());
        }
        object.insert(key.to_string(), Value::Null);
        Ok(Value::Null)
    }

    /// Whether an object has member `key`.
    pub fn has_member(&self, key: &str) -> JsonResult<bool> {
        Ok(self.object_payload()?.borrow().contains_key(key))
    }

    /// Number of members of an object.
    pub fn member_count(&self) -> JsonResult<usize> {
        Ok(self.object_payload()?.borrow().len())
    }

    /// Keys of an object, sorted.
    pub fn member_keys(&self) -> JsonResult<Vec<String>> {
        Ok(self.object_payload()?.borrow().keys().cloned().collect())
    }

    /// Removes member `key` from an object, returning it if present.
    pub fn remove_member(&self, key: &str) -> JsonResult<Option<Value>> {
        Ok(self.object_payload()?.borrow_mut().remove(key))
    }

    /// Length of an array.
    pub fn array_size(&self) -> JsonResult<usize> {
        Ok(self.array_payload()?.borrow().len())
    }

    /// Element `index` of an array.
    pub fn get_index(&self, index: usize) -> JsonResult<Value> {
        let array = self.array_payload()?.borrow();
        let found = array.get(index).cloned();
        found.ok_or_else(|| {
            ErrorKind::IndexOutOfRange {
                index,
                len: array.len(),
            }
            .into()
        })
    }

    // ---- setters ----
    //
    // A setter whose target tag differs from the current one resets to that
    // target first. Setters on a value that already has the target tag write
    // into the shared payload, so aliases see the change.

    /// Stores a signed integer.
    pub fn set_integer(&mut self, value: i64) {
        *self = Value::Integer(value);
    }

    /// Stores an unsigned integer.
    pub fn set_unsigned(&mut self, value: u64) {
        *self = Value::Unsigned(value);
    }

    /// Stores a real.
    pub fn set_real(&mut self, value: f64) {
        *self = Value::Real(value);
    }

    /// Stores a boolean.
    pub fn set_bool(&mut self, value: bool) {
        *self = Value::Bool(value);
    }

    /// Stores a string, in place when this is already a string.
    pub fn set_string(&mut self, value: impl Into<String>) {
        match self {
            Value::String(s) => *s.borrow_mut() = value.into(),
            _ => *self = Value::string(value),
        }
    }

    fn ensure_object(&mut self) -> Rc<RefCell<Object>> {
        if let Value::Object(object) = self {
            return Rc::clone(object);
        }
        let object = Rc::new(RefCell::new(Object::new()));
        *self = Value::Object(Rc::clone(&object));
        object
    }

    fn ensure_array(&mut self) -> Rc<RefCell<Array>> {
        if let Value::Array(array) = self {
            return Rc::clone(array);
        }
        let array = Rc::new(RefCell::new(Array::new()));
        *self = Value::Array(Rc::clone(&array));
        array
    }

    /// Sets member `key`, replacing any previous value.
    pub fn set_member(&mut self, key: impl Into<String>, value: Value) {
        let object = self.ensure_object();
        let previous = object.borrow_mut().insert(key.into(), value);
        // Dropped after the borrow ends; it may release a nested container.
        drop(previous);
    }

    /// Resizes an array, padding with nulls or truncating.
    pub fn set_array_size(&mut self, size: usize) {
        let array = self.ensure_array();
        let mut array = array.borrow_mut();
        array.resize(size, Value::Null);
    }

    /// Replaces element `index` of an array.
    ///
    /// Resetting a non-array produces an empty array, so on a mismatched
    /// tag this always fails with `IndexOutOfRange`.
    pub fn set_index(&mut self, index: usize, value: Value) -> JsonResult<()> {
        let array = self.ensure_array();
        let mut array = array.borrow_mut();
        let len = array.len();
        match array.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ErrorKind::IndexOutOfRange { index, len }.into()),
        }
    }

    /// Appends to an array.
    pub fn push(&mut self, value: Value) {
        self.ensure_array().borrow_mut().push(value);
    }

    // ---- casting ----

    /// Converts to `T`, see [`FromValue`].
    pub fn cast<T: FromValue>(&self) -> JsonResult<T> {
        T::from_value(self)
    }
}

impl PartialEq for Value {
    /// Structural equality. Aliases of one payload compare equal without
    /// walking it.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

/// Conversion out of a [`Value`].
///
/// - `String`: scalars render as text (`true`/`false`, `null`, decimal
///   numbers); a string yields its contents; objects and arrays fail.
/// - `bool`: zero-valued scalars and null are false, anything else is true.
/// - numeric types: any of the three numeric tags converts; reals truncate
///   toward zero when the target is an integer. Out-of-range values and
///   non-numeric tags fail.
pub trait FromValue: Sized {
    /// Performs the conversion.
    fn from_value(value: &Value) -> JsonResult<Self>;
}

fn cast_error(value: &Value, to: &'static str) -> crate::error::Error {
    ErrorKind::CastError {
        from: value.tag(),
        to,
    }
    .into()
}

impl FromValue for String {
    fn from_value(value: &Value) -> JsonResult<Self> {
        match value {
            Value::Integer(n) => Ok(n.to_string()),
            Value::Unsigned(n) => Ok(n.to_string()),
            Value::Real(r) => Ok(r.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok("null".to_string()),
            Value::String(s) => Ok(s.borrow().clone()),
            Value::Object(_) | Value::Array(_) => Err(cast_error(value, "string")),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> JsonResult<Self> {
        Ok(match value {
            Value::Integer(n) => *n != 0,
            Value::Unsigned(n) => *n != 0,
            Value::Real(r) => *r != 0.0,
            Value::Bool(b) => *b,
            Value::Null => false,
            Value::String(_) | Value::Object(_) | Value::Array(_) => true,
        })
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> JsonResult<Self> {
        // 2^63 is exactly representable; i64::MAX is not.
        const UPPER: f64 = 9_223_372_036_854_775_808.0;
        match value {
            Value::Integer(n) => Ok(*n),
            Value::Unsigned(n) => i64::try_from(*n).map_err(|_| cast_error(value, "i64")),
            Value::Real(r) if r.is_finite() && *r >= -UPPER && *r < UPPER => Ok(*r as i64),
            _ => Err(cast_error(value, "i64")),
        }
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> JsonResult<Self> {
        const UPPER: f64 = 18_446_744_073_709_551_616.0;
        match value {
            Value::Integer(n) => u64::try_from(*n).map_err(|_| cast_error(value, "u64")),
            Value::Unsigned(n) => Ok(*n),
            Value::Real(r) if r.is_finite() && *r >= 0.0 && *r < UPPER => Ok(*r as u64),
            _ => Err(cast_error(value, "u64")),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> JsonResult<Self> {
        let wide = i64::from_value(value).map_err(|_| cast_error(value, "i32"))?;
        i32::try_from(wide).map_err(|_| cast_error(value, "i32"))
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> JsonResult<Self> {
        let wide = u64::from_value(value).map_err(|_| cast_error(value, "u32"))?;
        u32::try_from(wide).map_err(|_| cast_error(value, "u32"))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> JsonResult<Self> {
        match value {
            Value::Integer(n) => Ok(*n as f64),
            Value::Unsigned(n) => Ok(*n as f64),
            Value::Real(r) => Ok(*r),
            _ => Err(cast_error(value, "f64")),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Unsigned(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Unsigned(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(Rc::new(RefCell::new(value)))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(Rc::new(RefCell::new(value)))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Array>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tag: Tag) -> Value {
        match tag {
            Tag::Integer => Value::Integer(-3),
            Tag::Unsigned => Value::Unsigned(3),
            Tag::Real => Value::Real(1.5),
            Tag::Bool => Value::Bool(true),
            Tag::String => Value::string("s"),
            Tag::Object => Value::object(),
            Tag::Array => Value::array(),
            Tag::Null => Value::Null,
        }
    }

    fn is_type_mismatch<T: fmt::Debug>(result: JsonResult<T>) -> bool {
        matches!(
            result.as_ref().map_err(|e| e.kind()),
            Err(ErrorKind::TypeMismatch { .. })
        )
    }

    #[test]
    fn test_tags() {
        for tag in Tag::ALL {
            assert_eq!(sample(tag).tag(), tag);
            assert_eq!(Value::default_for(tag).tag(), tag);
        }
        assert!(Tag::Array.is_structured());
        assert!(!Tag::Real.is_structured());
        assert_eq!(Tag::Bool.to_string(), "boolean");
    }

    #[test]
    fn test_getters_reject_wrong_tag() {
        for tag in Tag::ALL {
            let value = sample(tag);
            assert_eq!(is_type_mismatch(value.get_integer()), tag != Tag::Integer);
            assert_eq!(is_type_mismatch(value.get_unsigned()), tag != Tag::Unsigned);
            assert_eq!(is_type_mismatch(value.get_real()), tag != Tag::Real);
            assert_eq!(is_type_mismatch(value.get_bool()), tag != Tag::Bool);
            assert_eq!(is_type_mismatch(value.get_string()), tag != Tag::String);
            assert_eq!(is_type_mismatch(value.get_member("k")), tag != Tag::Object);
            assert_eq!(is_type_mismatch(value.array_size()), tag != Tag::Array);
        }
    }

    #[test]
    fn test_mismatch_reports_tags() {
        let err = Value::string("x").get_integer().unwrap_err();
        match err.kind() {
            ErrorKind::TypeMismatch { expected, found } => {
                assert_eq!(*expected, Tag::Integer);
                assert_eq!(*found, Tag::String);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_reset_defaults() {
        let mut value = Value::Integer(9);
        value.reset(Tag::String);
        assert_eq!(value.get_string().unwrap(), "");
        value.reset(Tag::Object);
        assert_eq!(value.member_count().unwrap(), 0);
        value.reset(Tag::Array);
        assert_eq!(value.array_size().unwrap(), 0);
        value.reset(Tag::Bool);
        assert_eq!(value.tag(), Tag::Bool);
        value.set_null();
        assert!(value.is_null());
    }

    #[test]
    fn test_reset_detaches_alias() {
        let mut a = Value::from(vec![Value::Integer(1)]);
        let b = a.clone();
        a.reset(Tag::Array);
        assert_eq!(a.array_size().unwrap(), 0);
        assert_eq!(b.array_size().unwrap(), 1);
    }

    #[test]
    fn test_setter_resets_to_target_tag() {
        let mut value = Value::object();
        value.set_integer(5);
        assert_eq!(value.get_integer().unwrap(), 5);
        value.set_unsigned(6);
        assert_eq!(value.get_unsigned().unwrap(), 6);
        value.set_real(0.5);
        assert_eq!(value.get_real().unwrap(), 0.5);
        value.set_bool(true);
        assert!(value.get_bool().unwrap());
        value.set_string("hi");
        assert_eq!(value.get_string().unwrap(), "hi");
        value.set_member("k", Value::Null);
        assert_eq!(value.tag(), Tag::Object);
        value.set_array_size(2);
        assert_eq!(value.tag(), Tag::Array);
        assert_eq!(value.array_size().unwrap(), 2);
    }

    #[test]
    fn test_string_alias_sees_set_string() {
        let mut a = Value::string("before");
        let b = a.clone();
        a.set_string("after");
        assert_eq!(b.get_string().unwrap(), "after");
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_scalar_copy_is_independent() {
        let a = Value::Integer(1);
        let mut b = a.clone();
        b.set_integer(2);
        assert_eq!(a.get_integer().unwrap(), 1);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_get_member_inserts_null() {
        let object = Value::object();
        assert!(!object.has_member("missing").unwrap());
        assert!(object.get_member("missing").unwrap().is_null());
        assert!(object.has_member("missing").unwrap());
        assert_eq!(object.member_count().unwrap(), 1);
    }

    #[test]
    fn test_member_management() {
        let mut object = Value::object();
        object.set_member("b", Value::Integer(2));
        object.set_member("a", Value::Integer(1));
        object.set_member("b", Value::Integer(3));
        assert_eq!(object.member_keys().unwrap(), vec!["a", "b"]);
        assert_eq!(object.get_member("b").unwrap(), Value::Integer(3));
        assert_eq!(
            object.remove_member("a").unwrap(),
            Some(Value::Integer(1))
        );
        assert_eq!(object.remove_member("a").unwrap(), None);
    }

    #[test]
    fn test_index_bounds() {
        let mut array = Value::array();
        array.set_array_size(2);
        assert!(array.get_index(1).unwrap().is_null());
        let err = array.get_index(2).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfRange { index: 2, len: 2 }
        ));
        array.set_index(0, Value::Bool(true)).unwrap();
        assert_eq!(array.get_index(0).unwrap(), Value::Bool(true));
        assert!(array.set_index(5, Value::Null).is_err());
        array.set_array_size(1);
        assert_eq!(array.array_size().unwrap(), 1);
    }

    #[test]
    fn test_set_index_on_non_array() {
        let mut value = Value::Integer(1);
        assert!(value.set_index(0, Value::Null).is_err());
        assert_eq!(value.tag(), Tag::Array);
    }

    #[test]
    fn test_push_and_collect() {
        let mut value = Value::Null;
        value.push(Value::Integer(1));
        value.push(Value::Integer(2));
        assert_eq!(value.array_size().unwrap(), 2);
        let collected: Value = (1..=2i64).map(Value::from).collect();
        assert_eq!(value, collected);
    }

    #[test]
    fn test_structural_equality() {
        let a = Value::from(vec![Value::string("x"), Value::Real(1.0)]);
        let b = Value::from(vec![Value::string("x"), Value::Real(1.0)]);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(Value::Integer(1), Value::Unsigned(1));
        assert_ne!(Value::Integer(1), Value::Real(1.0));
    }

    #[test]
    fn test_cast_to_string() {
        assert_eq!(Value::Integer(-4).cast::<String>().unwrap(), "-4");
        assert_eq!(Value::Unsigned(4).cast::<String>().unwrap(), "4");
        assert_eq!(Value::Real(2.5).cast::<String>().unwrap(), "2.5");
        assert_eq!(Value::Bool(false).cast::<String>().unwrap(), "false");
        assert_eq!(Value::Null.cast::<String>().unwrap(), "null");
        assert_eq!(Value::string("s").cast::<String>().unwrap(), "s");
        assert!(Value::object().cast::<String>().is_err());
        assert!(Value::array().cast::<String>().is_err());
    }

    #[test]
    fn test_cast_to_bool() {
        assert!(!Value::Integer(0).cast::<bool>().unwrap());
        assert!(!Value::Unsigned(0).cast::<bool>().unwrap());
        assert!(!Value::Real(0.0).cast::<bool>().unwrap());
        assert!(!Value::Null.cast::<bool>().unwrap());
        assert!(Value::Integer(-1).cast::<bool>().unwrap());
        assert!(Value::string("").cast::<bool>().unwrap());
        assert!(Value::array().cast::<bool>().unwrap());
    }

    #[test]
    fn test_cast_numeric() {
        assert_eq!(Value::Integer(7).cast::<f64>().unwrap(), 7.0);
        assert_eq!(Value::Unsigned(7).cast::<i64>().unwrap(), 7);
        assert_eq!(Value::Real(-2.9).cast::<i64>().unwrap(), -2);
        assert_eq!(Value::Real(2.9).cast::<u32>().unwrap(), 2);
        assert_eq!(Value::Integer(7).cast::<u64>().unwrap(), 7);
        assert!(Value::Integer(-1).cast::<u64>().is_err());
        assert!(Value::Unsigned(u64::MAX).cast::<i64>().is_err());
        assert!(Value::Integer(i64::MAX).cast::<i32>().is_err());
        assert!(Value::Real(f64::NAN).cast::<i64>().is_err());
        for value in [Value::string("1"), Value::Bool(true), Value::Null, Value::array()] {
            let err = value.cast::<f64>().unwrap_err();
            assert_eq!(err.kind().name(), "CastError");
        }
    }
}
