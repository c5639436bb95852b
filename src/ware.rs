//! Iteration helpers for objects: the object-shaped equivalents of the
//! usual array helpers. Every function walks the *enumerable view* of its
//! input (own properties first in insertion order, then each prototype
//! layer in turn, with shadowed keys visited once at their most derived
//! occurrence), and none of them modifies its input.
//!
//! Callbacks receive `(value, key, object)`, except [map_keys] which
//! receives the key first. A callback that needs extra state captures it;
//! all callback parameters are `FnMut` so captured state can be mutated
//! freely.

use crate::{
    error::Result,
    value::{Array, Object, Value},
};

/// Copy every enumerable property (own and inherited) of each source onto
/// the target, in argument order: a later source overwrites both earlier
/// sources and the target's own conflicting keys. Returns the updated
/// target.
///
/// An `Undefined` or `Null` target short-circuits: it is returned unchanged
/// without reading any source. Any other non-object target is a type error.
///
/// ```
/// use petitware::{ware::assign, Object, Value};
///
/// let merged = assign(
///     Object::new().into(),
///     &[
///         Object::new().insert("name", "John"),
///         Object::new().insert("name", "Mike"),
///     ],
/// )
/// .unwrap();
/// assert_eq!(merged, Value::from(Object::new().insert("name", "Mike")));
/// assert_eq!(assign(Value::Null, &[]).unwrap(), Value::Null);
/// ```
pub fn assign(target: Value, sources: &[Object]) -> Result<Value> {
    let target = match target {
        Value::Undefined | Value::Null => return Ok(target),
        other => other.try_into_object()?,
    };
    let target = sources
        .iter()
        .fold(target, |target, source| target.insert_all(source));
    Ok(target.into())
}

/// Create a new object containing every enumerable property (own and
/// inherited) of the source. The result is a fresh plain object: it never
/// shares storage with the source, has no prototype, and inherited layers
/// are flattened away.
///
/// An `Undefined` or `Null` source is returned unchanged; any other
/// non-object source is a type error.
pub fn clone(source: Value) -> Result<Value> {
    match source {
        Value::Undefined | Value::Null => Ok(source),
        other => {
            let source = other.try_into_object()?;
            Ok(Object::new().insert_all(&source).into())
        }
    }
}

/// Create a new object containing the enumerable properties for which the
/// predicate returns true. The predicate is called with
/// `(value, key, object)` once per property.
pub fn filter(
    object: &Object,
    mut predicate: impl FnMut(&Value, &str, &Object) -> bool,
) -> Object {
    object
        .iter()
        .filter(|&(key, value)| predicate(value, key, object))
        .map(|(key, value)| (key.to_owned(), value.clone()))
        .collect()
}

/// Create a new object with the same keys as the input, but each value
/// replaced by the transform's return value. The transform is called with
/// `(value, key, object)` once per enumerable property.
pub fn map(
    object: &Object,
    mut transform: impl FnMut(&Value, &str, &Object) -> Value,
) -> Object {
    object
        .iter()
        .map(|(key, value)| (key.to_owned(), transform(value, key, object)))
        .collect()
}

/// Create a new object with the same values as the input, but each key
/// replaced by the transform's return value. If two keys transform to the
/// same new key, the later-enumerated property wins.
///
/// Note the argument order: the transform is called with
/// `(key, value, object)`, key first, unlike [filter] and [map].
pub fn map_keys(
    object: &Object,
    mut transform: impl FnMut(&str, &Value, &Object) -> String,
) -> Object {
    object
        .iter()
        .map(|(key, value)| (transform(key, value, object), value.clone()))
        .collect()
}

/// Get every enumerable key of the object (own and inherited), in
/// enumeration order
pub fn keys(object: &Object) -> Array {
    object.iter().map(|(key, _)| Value::from(key)).collect()
}

/// Get every enumerable value of the object (own and inherited), in
/// enumeration order
pub fn values(object: &Object) -> Array {
    object.iter().map(|(_, value)| value.clone()).collect()
}

/// Does the object have no enumerable properties, own or inherited?
pub fn is_empty(object: &Object) -> bool {
    object.is_empty()
}
