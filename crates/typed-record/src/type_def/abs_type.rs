//! The field-type protocol.
//!
//! Every field of a record is described by something implementing [`Typed`].
//! The built-in classes implement it directly; extension types plug in
//! through [`FieldType::Custom`](super::FieldType::Custom).

use std::fmt;

use crate::error::TypeError;
use crate::value::Value;

pub trait Typed: fmt::Debug + Send + Sync {
    /// Display name used in error messages and in composite type names.
    fn type_name(&self) -> String;

    /// Validates `value` and returns the (possibly coerced) value to store.
    ///
    /// Failures are returned as values; the record host decides whether to
    /// raise them.
    fn read(&self, value: Value) -> Result<Value, TypeError>;

    /// Value used when a field is absent at construction or reset by delete.
    fn default_value(&self) -> Value {
        Value::Undefined
    }
}
