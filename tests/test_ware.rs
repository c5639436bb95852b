//! Behavioral tests for the iteration helpers, covering the full contract:
//! enumeration order, inherited and hidden properties, callback arguments,
//! and non-mutation of inputs.

use petitware::{ware, Object, Value, ValueError, ValueType};
use test_case::test_case;

/// Shorthand for the common case of building a plain object from pairs
fn object<const N: usize>(pairs: [(&str, Value); N]) -> Object {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

fn is_even(value: &Value) -> bool {
    value.clone() % 2.into() == 0.into()
}

fn double(value: &Value) -> Value {
    value.clone() * 2.into()
}

#[test_case(Value::Undefined; "undefined")]
#[test_case(Value::Null; "null")]
fn assign_returns_absent_target_unchanged(target: Value) {
    // The sources must not be touched at all
    assert_eq!(ware::assign(target.clone(), &[]).unwrap(), target);
    let sources = [Object::new().insert("name", "John")];
    assert_eq!(ware::assign(target.clone(), &sources).unwrap(), target);
}

#[test]
fn assign_returns_target_given_no_source() {
    let target = Object::new().insert("name", "John");
    let result = ware::assign(target.clone().into(), &[])
        .unwrap()
        .try_into_object()
        .unwrap();
    // No sources means nothing to merge: the very same object comes back
    assert!(result.ptr_eq(&target));
    assert_eq!(result, object([("name", "John".into())]));
}

#[test]
fn assign_adds_properties_from_one_source() {
    let result = ware::assign(
        Object::new().into(),
        &[Object::new().insert("name", "John")],
    )
    .unwrap();
    assert_eq!(result, Value::from(object([("name", "John".into())])));
}

#[test]
fn assign_adds_properties_from_two_sources() {
    let result = ware::assign(
        Object::new().into(),
        &[
            Object::new().insert("name", "John"),
            Object::new().insert("age", 13),
        ],
    )
    .unwrap();
    assert_eq!(
        result,
        Value::from(object([("name", "John".into()), ("age", 13.into())])),
    );
}

#[test]
fn assign_later_source_overwrites_earlier() {
    let result = ware::assign(
        Object::new().into(),
        &[
            Object::new().insert("name", "John"),
            Object::new().insert("name", "Mike"),
        ],
    )
    .unwrap();
    assert_eq!(result, Value::from(object([("name", "Mike".into())])));
}

#[test]
fn assign_overwrites_target_key() {
    let target = Object::new().insert("name", "John").insert("age", 42);
    let result = ware::assign(
        target.into(),
        &[Object::new().insert("name", "Mike")],
    )
    .unwrap();
    assert_eq!(
        result,
        Value::from(object([("name", "Mike".into()), ("age", 42.into())])),
    );
}

#[test]
fn assign_includes_inherited_source_properties() {
    let prototype = Object::new().insert("name", "John");
    let source = Object::create(prototype);
    let result = ware::assign(Object::new().into(), &[source]).unwrap();
    assert_eq!(result, Value::from(object([("name", "John".into())])));
}

#[test]
fn assign_skips_hidden_source_properties() {
    let source = Object::new().define("name", "John", false);
    let result = ware::assign(Object::new().into(), &[source]).unwrap();
    assert_eq!(result, Value::from(Object::new()));
}

#[test]
fn assign_rejects_non_object_target() {
    let error = ware::assign(5.into(), &[]).unwrap_err();
    assert_eq!(
        error,
        ValueError::Type {
            expected: ValueType::Object,
            actual: ValueType::Number,
        },
    );
}

#[test_case(Value::Undefined; "undefined")]
#[test_case(Value::Null; "null")]
fn clone_returns_absent_source_unchanged(source: Value) {
    assert_eq!(ware::clone(source.clone()).unwrap(), source);
}

#[test]
fn clone_returns_new_object() {
    let source = Object::new();
    let result = ware::clone(source.clone().into())
        .unwrap()
        .try_into_object()
        .unwrap();
    assert!(!result.ptr_eq(&source));
}

#[test]
fn clone_copies_properties() {
    let source = Object::new().insert("name", "John").insert("age", 42);
    let result = ware::clone(source.clone().into()).unwrap();
    assert_eq!(result, Value::from(source));
}

#[test]
fn clone_flattens_inherited_properties() {
    let prototype = Object::new().insert("name", "John");
    let source = Object::create(prototype);
    let result = ware::clone(source.into())
        .unwrap()
        .try_into_object()
        .unwrap();
    assert_eq!(result, object([("name", "John".into())]));
    // The layers are gone, not just hidden
    assert!(result.prototype().is_none());
}

#[test]
fn clone_skips_hidden_properties() {
    let source = Object::new().define("name", "John", false);
    let result = ware::clone(source.into()).unwrap();
    assert_eq!(result, Value::from(Object::new()));
}

#[test]
fn clone_is_assign_into_fresh_target() {
    let prototype = Object::new().insert("name", "John");
    let source = Object::create(prototype).insert("age", 42);
    let assigned =
        ware::assign(Object::new().into(), &[source.clone()]).unwrap();
    let cloned = ware::clone(source.into()).unwrap();
    assert_eq!(assigned, cloned);
}

#[test]
fn clone_twice_yields_independent_results() {
    // Each call starts from a fresh target, so nothing can leak over
    let first = ware::clone(Object::new().insert("name", "John").into());
    let second = ware::clone(Object::new().insert("age", 42).into()).unwrap();
    drop(first);
    assert_eq!(second, Value::from(object([("age", 42.into())])));
}

#[test]
fn filter_keeps_matching_properties() {
    let source = Object::new()
        .insert("a", 1)
        .insert("b", 2)
        .insert("c", 3)
        .insert("d", 4);
    let result = ware::filter(&source, |value, _, _| is_even(value));
    assert_eq!(result, object([("b", 2.into()), ("d", 4.into())]));
}

#[test]
fn filter_includes_inherited_properties() {
    let prototype = Object::new()
        .insert("a", 1)
        .insert("b", 2)
        .insert("c", 3)
        .insert("d", 4);
    let source = Object::create(prototype);
    let result = ware::filter(&source, |value, _, _| is_even(value));
    assert_eq!(result, object([("b", 2.into()), ("d", 4.into())]));
}

#[test]
fn filter_calls_back_with_value_key_object() {
    let source = Object::new().insert("name", "John");
    let mut calls: Vec<(Value, String, bool)> = Vec::new();
    ware::filter(&source, |value, key, obj| {
        // Captured state stands in for the callback's receiver
        calls.push((value.clone(), key.to_owned(), obj.ptr_eq(&source)));
        false
    });
    assert_eq!(calls, [("John".into(), "name".to_owned(), true)]);
}

#[test]
fn filter_does_not_change_the_source() {
    let source = Object::new().insert("name", "John");
    let result = ware::filter(&source, |_, _, _| false);
    assert!(!result.ptr_eq(&source));
    assert_eq!(source, object([("name", "John".into())]));
}

#[test]
fn map_transforms_values() {
    let source = Object::new().insert("a", 1).insert("b", 2).insert("c", 3);
    let result = ware::map(&source, |value, _, _| double(value));
    assert_eq!(
        result,
        object([("a", 2.into()), ("b", 4.into()), ("c", 6.into())]),
    );
}

#[test]
fn map_includes_inherited_properties() {
    let prototype =
        Object::new().insert("a", 1).insert("b", 2).insert("c", 3);
    let source = Object::create(prototype);
    let result = ware::map(&source, |value, _, _| double(value));
    assert_eq!(
        result,
        object([("a", 2.into()), ("b", 4.into()), ("c", 6.into())]),
    );
}

#[test]
fn map_calls_back_with_value_key_object() {
    let source = Object::new().insert("name", "John");
    let mut calls: Vec<(Value, String, bool)> = Vec::new();
    ware::map(&source, |value, key, obj| {
        calls.push((value.clone(), key.to_owned(), obj.ptr_eq(&source)));
        Value::Undefined
    });
    assert_eq!(calls, [("John".into(), "name".to_owned(), true)]);
}

#[test]
fn map_does_not_change_the_source() {
    let source = Object::new().insert("name", "John");
    let result = ware::map(&source, |_, _, _| "Mike".into());
    assert!(!result.ptr_eq(&source));
    assert_eq!(source, object([("name", "John".into())]));
}

#[test]
fn map_keys_transforms_keys() {
    let source = Object::new().insert("name", "John").insert("age", 32);
    let result = ware::map_keys(&source, |key, _, _| key.to_uppercase());
    assert_eq!(
        result,
        object([("NAME", "John".into()), ("AGE", 32.into())]),
    );
}

#[test]
fn map_keys_includes_inherited_properties() {
    let prototype = Object::new().insert("name", "John").insert("age", 32);
    let source = Object::create(prototype);
    let result = ware::map_keys(&source, |key, _, _| key.to_uppercase());
    assert_eq!(
        result,
        object([("NAME", "John".into()), ("AGE", 32.into())]),
    );
}

#[test]
fn map_keys_calls_back_with_key_value_object() {
    // Key first here, unlike filter/map
    let source = Object::new().insert("name", "John");
    let mut calls: Vec<(String, Value, bool)> = Vec::new();
    ware::map_keys(&source, |key, value, obj| {
        calls.push((key.to_owned(), value.clone(), obj.ptr_eq(&source)));
        key.to_owned()
    });
    assert_eq!(calls, [("name".to_owned(), "John".into(), true)]);
}

#[test]
fn map_keys_collision_later_property_wins() {
    let source = Object::new().insert("a", 1).insert("b", 2);
    let result = ware::map_keys(&source, |_, _, _| "x".to_owned());
    assert_eq!(result, object([("x", 2.into())]));
}

#[test]
fn map_keys_does_not_change_the_source() {
    let source = Object::new().insert("name", "John");
    let result = ware::map_keys(&source, |_, _, _| "NAME".to_owned());
    assert!(!result.ptr_eq(&source));
    assert_eq!(source, object([("name", "John".into())]));
}

#[test]
fn keys_returns_own_keys_in_order() {
    let source = Object::new().insert("a", 1).insert("b", 2);
    assert_eq!(ware::keys(&source), ["a", "b"].into());
}

#[test]
fn keys_returns_inherited_keys() {
    let source = Object::create(Object::new().insert("a", 1).insert("b", 2));
    assert_eq!(ware::keys(&source), ["a", "b"].into());
}

#[test]
fn keys_skips_hidden_properties() {
    let source = Object::new().insert("a", 1).define("b", 2, false);
    assert_eq!(ware::keys(&source), ["a"].into());
}

#[test]
fn values_returns_own_values_in_order() {
    let source = Object::new().insert("a", 1).insert("b", 2);
    assert_eq!(ware::values(&source), [1, 2].into());
}

#[test]
fn values_returns_inherited_values() {
    let source = Object::create(Object::new().insert("a", 1).insert("b", 2));
    assert_eq!(ware::values(&source), [1, 2].into());
}

#[test]
fn is_empty_true_for_empty_object() {
    assert!(ware::is_empty(&Object::new()));
}

#[test]
fn is_empty_false_for_own_property() {
    assert!(!ware::is_empty(&Object::new().insert("name", "John")));
}

#[test]
fn is_empty_false_for_inherited_property() {
    let object = Object::create(Object::new().insert("name", "John"));
    assert!(!ware::is_empty(&object));
}

#[test]
fn is_empty_true_for_hidden_property_only() {
    assert!(ware::is_empty(&Object::new().define("name", "John", false)));
}

#[test]
fn shadowed_key_enumerated_once_at_derived_position() {
    let prototype = Object::new().insert("a", 1).insert("b", 2);
    let object = Object::create(prototype).insert("b", 20).insert("c", 3);
    assert_eq!(ware::keys(&object), ["b", "c", "a"].into());
    assert_eq!(ware::values(&object), [20, 3, 1].into());
}
