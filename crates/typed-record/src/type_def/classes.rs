//! Built-in field type classes.
//!
//! The primitive classes optionally carry an intrinsic default, which is how
//! a literal field spec (`"foo"`, `1`, `true`) is represented once resolved.

use crate::error::TypeError;
use crate::record::RecordType;
use crate::value::Value;

// -------------------------------------------------------------------------
// AnyType

/// Accepts every value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyType;

impl AnyType {
    pub fn new() -> Self {
        Self
    }
    pub fn type_name(&self) -> String {
        "Any".to_owned()
    }
    pub fn read(&self, value: Value) -> Result<Value, TypeError> {
        Ok(value)
    }
}

// -------------------------------------------------------------------------
// BoolType

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolType {
    pub default: Option<bool>,
}

impl BoolType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_default(default: bool) -> Self {
        Self {
            default: Some(default),
        }
    }
    pub fn type_name(&self) -> String {
        "Boolean".to_owned()
    }
    pub fn read(&self, value: Value) -> Result<Value, TypeError> {
        match value {
            Value::Bool(_) => Ok(value),
            other => Err(TypeError::new(format!("\"{other}\" is not a boolean"))),
        }
    }
    pub fn default_value(&self) -> Value {
        self.default.map_or(Value::Undefined, Value::Bool)
    }
}

// -------------------------------------------------------------------------
// NumType

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumType {
    pub default: Option<f64>,
}

impl NumType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_default(default: f64) -> Self {
        Self {
            default: Some(default),
        }
    }
    pub fn type_name(&self) -> String {
        "Number".to_owned()
    }
    pub fn read(&self, value: Value) -> Result<Value, TypeError> {
        match value {
            Value::Num(_) => Ok(value),
            other => Err(TypeError::new(format!("\"{other}\" is not a number"))),
        }
    }
    pub fn default_value(&self) -> Value {
        self.default.map_or(Value::Undefined, Value::Num)
    }
}

// -------------------------------------------------------------------------
// StrType

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrType {
    pub default: Option<String>,
}

impl StrType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_default(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
        }
    }
    pub fn type_name(&self) -> String {
        "String".to_owned()
    }
    pub fn read(&self, value: Value) -> Result<Value, TypeError> {
        match value {
            Value::Str(_) => Ok(value),
            other => Err(TypeError::new(format!("\"{other}\" is not a string"))),
        }
    }
    pub fn default_value(&self) -> Value {
        self.default.clone().map_or(Value::Undefined, Value::Str)
    }
}

// -------------------------------------------------------------------------
// RecordField

/// A field holding a nested record of a given type.
#[derive(Debug, Clone)]
pub struct RecordField {
    pub record_type: RecordType,
    pub default: Option<crate::Record>,
}

impl RecordField {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            default: None,
        }
    }
    pub fn with_default(default: crate::Record) -> Self {
        Self {
            record_type: default.record_type().clone(),
            default: Some(default),
        }
    }
    pub fn type_name(&self) -> String {
        self.record_type.type_name()
    }
    /// Instances of the field's type (or a subtype) are kept as-is; plain
    /// structures and records of other types are converted.
    pub fn read(&self, value: Value) -> Result<Value, TypeError> {
        match value {
            Value::Record(ref r) if r.is_instance_of(&self.record_type) => Ok(value),
            Value::Map(_) | Value::Record(_) => self
                .record_type
                .construct(value)
                .map(Value::Record)
                .map_err(|err| TypeError::new(err.to_string())),
            other => Err(TypeError::new(format!(
                "\"{other}\" is not a {}",
                self.type_name()
            ))),
        }
    }
    pub fn default_value(&self) -> Value {
        self.default.clone().map_or(Value::Undefined, Value::Record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_reject_other_kinds() {
        assert!(StrType::new().read(Value::from("x")).is_ok());
        assert_eq!(
            StrType::new().read(Value::from(0)).unwrap_err().message(),
            "\"0\" is not a string"
        );
        assert!(NumType::new().read(Value::from("1")).is_err());
        assert!(BoolType::new().read(Value::Null).is_err());
        assert!(AnyType::new().read(Value::Undefined).is_ok());
    }

    #[test]
    fn intrinsic_defaults() {
        assert_eq!(StrType::with_default("foo").default_value(), Value::from("foo"));
        assert_eq!(NumType::with_default(2.0).default_value(), Value::from(2));
        assert_eq!(BoolType::new().default_value(), Value::Undefined);
    }
}
