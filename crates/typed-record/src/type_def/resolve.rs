//! Field spec resolution.
//!
//! Record schemas are declared with [`FieldSpec`]s: either an explicit
//! [`FieldType`] or a literal value standing for "the literal's primitive
//! type, defaulting to the literal".

use std::fmt;

use super::classes::*;
use super::FieldType;
use crate::record::{Record, RecordType};
use crate::value::Value;

#[derive(Debug, Clone)]
pub enum FieldSpec {
    Type(FieldType),
    Literal(Value),
}

/// Resolves a spec to its canonical field type.
///
/// Returns `None` for nullish literals, which name no type. Plain
/// structures and lists resolve to `Any`.
pub fn type_of(spec: &FieldSpec) -> Option<FieldType> {
    match spec {
        FieldSpec::Type(ty) => Some(ty.clone()),
        FieldSpec::Literal(value) => match value {
            Value::Undefined | Value::Null => None,
            Value::Bool(b) => Some(FieldType::Bool(BoolType::with_default(*b))),
            Value::Num(n) => Some(FieldType::Num(NumType::with_default(*n))),
            Value::Str(s) => Some(FieldType::Str(StrType::with_default(s.clone()))),
            Value::Record(r) => Some(FieldType::Record(RecordField::with_default(r.clone()))),
            Value::List(_) | Value::Map(_) => Some(FieldType::any()),
        },
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "{ty}"),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

impl From<FieldType> for FieldSpec {
    fn from(ty: FieldType) -> Self {
        Self::Type(ty)
    }
}

impl From<RecordType> for FieldSpec {
    fn from(record_type: RecordType) -> Self {
        Self::Type(FieldType::from(record_type))
    }
}

impl From<&RecordType> for FieldSpec {
    fn from(record_type: &RecordType) -> Self {
        Self::Type(FieldType::record(record_type))
    }
}

impl From<Value> for FieldSpec {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Record> for FieldSpec {
    fn from(record: Record) -> Self {
        Self::Literal(Value::Record(record))
    }
}

impl From<&str> for FieldSpec {
    fn from(s: &str) -> Self {
        Self::Literal(Value::from(s))
    }
}

impl From<String> for FieldSpec {
    fn from(s: String) -> Self {
        Self::Literal(Value::from(s))
    }
}

impl From<f64> for FieldSpec {
    fn from(n: f64) -> Self {
        Self::Literal(Value::from(n))
    }
}

impl From<i32> for FieldSpec {
    fn from(n: i32) -> Self {
        Self::Literal(Value::from(n))
    }
}

impl From<bool> for FieldSpec {
    fn from(b: bool) -> Self {
        Self::Literal(Value::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_carries_default() {
        let ty = type_of(&FieldSpec::from("foo")).expect("resolves");
        assert!(ty.is_str());
        assert_eq!(ty.default_value(), Value::from("foo"));
        assert_eq!(ty.type_name(), "String");

        let ty = type_of(&FieldSpec::from(3)).expect("resolves");
        assert_eq!(ty.type_name(), "Number");
        assert_eq!(ty.default_value(), Value::from(3));
    }

    #[test]
    fn explicit_type_is_used_as_is() {
        let ty = type_of(&FieldSpec::from(FieldType::string())).expect("resolves");
        assert!(ty.is_str());
        assert_eq!(ty.default_value(), Value::Undefined);
    }

    #[test]
    fn nullish_literals_do_not_resolve() {
        assert!(type_of(&FieldSpec::from(Value::Null)).is_none());
        assert!(type_of(&FieldSpec::from(Value::Undefined)).is_none());
    }

    #[test]
    fn structures_resolve_to_any() {
        let ty = type_of(&FieldSpec::from(Value::from(json!({})))).expect("resolves");
        assert!(ty.is_any());
    }
}
