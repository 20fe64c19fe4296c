//! Optional field type accepting both `Undefined` and `Null`.

use tracing::debug;
use typed_record::{type_of, FieldSpec, FieldType, RecordError, TypeError, Typed, Value};

/// An optional field of an inner type.
///
/// Unlike a plain optional, both `Undefined` and `Null` are accepted, a
/// default can be given explicitly, and a literal inner spec contributes its
/// own default.
///
/// ```
/// use typed_record::{FieldMap, FieldType, RecordType, Value};
/// use typed_record_ext::Maybe;
///
/// let note = RecordType::new(
///     FieldMap::new()
///         .field("title", Maybe::new(FieldType::string()).unwrap())
///         .field("kind", Maybe::with_default(FieldType::string(), "point").unwrap())
///         .field("text", Maybe::new("Some Text").unwrap())
///         .field("body", Maybe::with_default(FieldType::string(), Value::Null).unwrap()),
/// )
/// .unwrap();
///
/// let n = note.construct_default().unwrap();
/// assert_eq!(n.get("title"), Some(&Value::Undefined));
/// assert_eq!(n.get("kind"), Some(&Value::from("point")));
/// assert_eq!(n.get("text"), Some(&Value::from("Some Text")));
/// assert_eq!(n.get("body"), Some(&Value::Null));
/// ```
#[derive(Debug, Clone)]
pub struct Maybe {
    inner: FieldType,
    default: Value,
}

impl Maybe {
    pub fn new(spec: impl Into<FieldSpec>) -> Result<Self, RecordError> {
        Self::with_default(spec, Value::Undefined)
    }

    /// `default` may be `Undefined` (omitted), `Null`, or a value the inner
    /// type accepts.
    pub fn with_default(
        spec: impl Into<FieldSpec>,
        default: impl Into<Value>,
    ) -> Result<Self, RecordError> {
        let spec = spec.into();
        let inner = match type_of(&spec) {
            Some(ty) if !ty.is_any() => ty,
            _ => {
                return Err(RecordError::invalid_argument(format!(
                    "{spec} is not a valid type"
                )))
            }
        };

        let mut default = default.into();
        if !default.is_nullish() {
            default = inner.read(default.clone()).map_err(|_| {
                RecordError::invalid_argument(format!(
                    "{default} is not nully nor of {} type",
                    inner.type_name()
                ))
            })?;
        }
        if default.is_undefined() {
            default = inner.default_value();
        }

        let maybe = Self { inner, default };
        debug!(type_name = %maybe.type_name(), default = %maybe.default, "built Maybe");
        Ok(maybe)
    }

    pub fn inner(&self) -> &FieldType {
        &self.inner
    }

    pub fn default(&self) -> &Value {
        &self.default
    }
}

impl Typed for Maybe {
    fn type_name(&self) -> String {
        format!("Maybe({})", self.inner.type_name())
    }

    fn read(&self, value: Value) -> Result<Value, TypeError> {
        let value = if value.is_undefined() {
            self.default.clone()
        } else {
            value
        };
        if value.is_nullish() {
            return Ok(value);
        }
        self.inner.read(value.clone()).map_err(|_| {
            TypeError::new(format!(
                "\"{value}\" is not nully nor it is of {} type",
                self.inner.type_name()
            ))
        })
    }

    fn default_value(&self) -> Value {
        self.default.clone()
    }
}

impl From<Maybe> for FieldType {
    fn from(maybe: Maybe) -> Self {
        FieldType::custom(maybe)
    }
}

impl From<Maybe> for FieldSpec {
    fn from(maybe: Maybe) -> Self {
        FieldSpec::Type(maybe.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_wraps_inner() {
        let m = Maybe::new(FieldType::num()).unwrap();
        assert_eq!(m.type_name(), "Maybe(Number)");
    }

    #[test]
    fn explicit_default_beats_intrinsic() {
        let m = Maybe::with_default("bar", "foo").unwrap();
        assert_eq!(m.default(), &Value::from("foo"));
        let m = Maybe::new("bar").unwrap();
        assert_eq!(m.default(), &Value::from("bar"));
    }

    #[test]
    fn explicit_null_beats_intrinsic() {
        let m = Maybe::with_default("bar", Value::Null).unwrap();
        assert_eq!(m.default(), &Value::Null);
    }
}
