//! Maybe: nullable fields, default resolution and validation messages.

use proptest::prelude::*;
use serde_json::json;
use typed_record::{FieldMap, FieldSpec, FieldType, RecordError, RecordType, Typed, Value};
use typed_record_ext::Maybe;

fn value_type(spec: Maybe) -> RecordType {
    RecordType::new(FieldMap::new().field("value", spec)).unwrap()
}

fn maybe_string() -> RecordType {
    value_type(Maybe::new(FieldType::string()).unwrap())
}

// ── Construction ─────────────────────────────────────────────────────────────

#[test]
fn rejects_the_any_type() {
    let err = Maybe::new(Value::from(json!({}))).unwrap_err();
    assert!(matches!(err, RecordError::InvalidArgument(_)));
    assert!(err.to_string().contains("is not a valid type"));

    let err = Maybe::new(FieldType::any()).unwrap_err();
    assert_eq!(err.to_string(), "Any is not a valid type");
}

#[test]
fn rejects_unresolvable_specs() {
    let err = Maybe::new(Value::Null).unwrap_err();
    assert_eq!(err.to_string(), "null is not a valid type");
}

#[test]
fn rejects_default_of_the_wrong_type() {
    let err = Maybe::with_default(FieldType::string(), 0).unwrap_err();
    assert!(err.to_string().contains("is not nully nor of String type"));
    assert_eq!(err.to_string(), "0 is not nully nor of String type");
}

// ── Reading ──────────────────────────────────────────────────────────────────

#[test]
fn allows_an_undefined_value() {
    let r = maybe_string().construct_default().unwrap();
    assert_eq!(r.get("value"), Some(&Value::Undefined));
}

#[test]
fn allows_a_null_value() {
    let r = maybe_string().construct(json!({"value": null})).unwrap();
    assert_eq!(r.get("value"), Some(&Value::Null));
}

#[test]
fn allows_a_value_of_the_type() {
    let r = maybe_string().construct(json!({"value": "foo"})).unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("foo")));
}

#[test]
fn rejects_a_value_of_another_type() {
    let err = maybe_string().construct(json!({"value": 0})).unwrap_err();
    assert!(err
        .to_string()
        .contains("\"0\" is not nully nor it is of String type"));
}

#[test]
fn set_accepts_matching_and_null_values() {
    let r = maybe_string().construct_default().unwrap();
    let r = r.set("value", "foo").unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("foo")));
    let r = r.set("value", Value::Null).unwrap();
    assert_eq!(r.get("value"), Some(&Value::Null));
}

#[test]
fn set_rejects_other_types() {
    let r = maybe_string().construct_default().unwrap();
    let err = r.set("value", 0).unwrap_err();
    assert!(err.to_string().contains("is not nully nor it is of String type"));
}

#[test]
fn delete_resets_to_undefined() {
    let r = maybe_string().construct(json!({"value": "foo"})).unwrap();
    let r = r.delete("value").unwrap();
    assert_eq!(r.get("value"), Some(&Value::Undefined));
}

// ── Defaults ─────────────────────────────────────────────────────────────────

#[test]
fn takes_the_intrinsic_default_of_a_literal() {
    let r = value_type(Maybe::new("foo").unwrap()).construct_default().unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("foo")));
}

#[test]
fn uses_the_supplied_default() {
    let ty = value_type(Maybe::with_default(FieldType::string(), "foo").unwrap());
    let r = ty.construct_default().unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("foo")));
}

#[test]
fn supplied_default_beats_intrinsic_default() {
    let ty = value_type(Maybe::with_default("bar", "foo").unwrap());
    let r = ty.construct_default().unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("foo")));
}

#[test]
fn null_default_is_kept() {
    let ty = value_type(Maybe::with_default(FieldType::string(), Value::Null).unwrap());
    assert_eq!(ty.construct_default().unwrap().get("value"), Some(&Value::Null));
}

#[test]
fn delete_resets_to_the_default() {
    let ty = value_type(Maybe::new("foo").unwrap());
    let r = ty.construct(json!({"value": "bar"})).unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("bar")));
    let r = r.delete("value").unwrap();
    assert_eq!(r.get("value"), Some(&Value::from("foo")));
}

#[test]
fn wraps_record_types() {
    let point = RecordType::new(FieldMap::new().field("x", FieldType::num())).unwrap();
    let m = Maybe::new(FieldSpec::from(&point)).unwrap();
    assert!(m.read(Value::from(json!({"x": 1}))).unwrap().as_record().is_some());
    assert_eq!(m.read(Value::Null), Ok(Value::Null));
}

// ── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn non_nullish_reads_match_the_inner_type(s in ".*", n in any::<f64>()) {
        let m = Maybe::new(FieldType::string()).unwrap();
        prop_assert_eq!(m.read(Value::from(s.clone())), Ok(Value::from(s)));
        prop_assert!(m.read(Value::from(n)).is_err());
    }

    #[test]
    fn nullish_reads_pass_through_or_default(d in "[a-z]{1,8}") {
        let m = Maybe::with_default(FieldType::string(), d.clone()).unwrap();
        prop_assert_eq!(m.read(Value::Undefined), Ok(Value::from(d)));
        prop_assert_eq!(m.read(Value::Null), Ok(Value::Null));
    }
}
