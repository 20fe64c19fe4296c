//! Field types.
//!
//! The host's built-in classes and the [`Typed`] protocol are unified in the
//! [`FieldType`] sum type:
//! - `Any`, `Bool`, `Num`, `Str`: primitives, optionally with an intrinsic default
//! - `Record`: a nested record of a given type
//! - `Custom`: any type implementing [`Typed`]

pub mod abs_type;
pub mod builder;
pub mod classes;
pub mod resolve;

pub use abs_type::Typed;
pub use builder::FieldMap;
pub use classes::*;
pub use resolve::{type_of, FieldSpec};

use std::fmt;
use std::sync::Arc;

use crate::error::TypeError;
use crate::record::RecordType;
use crate::value::Value;

#[derive(Debug, Clone)]
pub enum FieldType {
    Any(AnyType),
    Bool(BoolType),
    Num(NumType),
    Str(StrType),
    Record(RecordField),
    Custom(Arc<dyn Typed>),
}

impl FieldType {
    pub fn any() -> Self {
        Self::Any(AnyType::new())
    }

    pub fn bool() -> Self {
        Self::Bool(BoolType::new())
    }

    pub fn num() -> Self {
        Self::Num(NumType::new())
    }

    pub fn string() -> Self {
        Self::Str(StrType::new())
    }

    pub fn record(record_type: &RecordType) -> Self {
        Self::Record(RecordField::new(record_type.clone()))
    }

    /// Wraps a protocol implementation.
    pub fn custom(typed: impl Typed + 'static) -> Self {
        Self::Custom(Arc::new(typed))
    }

    /// The universal placeholder type.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    pub fn as_record_type(&self) -> Option<&RecordType> {
        match self {
            Self::Record(field) => Some(&field.record_type),
            _ => None,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Self::Any(t) => t.type_name(),
            Self::Bool(t) => t.type_name(),
            Self::Num(t) => t.type_name(),
            Self::Str(t) => t.type_name(),
            Self::Record(t) => t.type_name(),
            Self::Custom(t) => t.type_name(),
        }
    }

    pub fn read(&self, value: Value) -> Result<Value, TypeError> {
        match self {
            Self::Any(t) => t.read(value),
            Self::Bool(t) => t.read(value),
            Self::Num(t) => t.read(value),
            Self::Str(t) => t.read(value),
            Self::Record(t) => t.read(value),
            Self::Custom(t) => t.read(value),
        }
    }

    pub fn default_value(&self) -> Value {
        match self {
            Self::Any(_) => Value::Undefined,
            Self::Bool(t) => t.default_value(),
            Self::Num(t) => t.default_value(),
            Self::Str(t) => t.default_value(),
            Self::Record(t) => t.default_value(),
            Self::Custom(t) => t.default_value(),
        }
    }
}

impl From<RecordType> for FieldType {
    fn from(record_type: RecordType) -> Self {
        Self::Record(RecordField::new(record_type))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}
