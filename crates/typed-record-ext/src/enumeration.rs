//! Field type restricted to a fixed set of values.

use tracing::debug;
use typed_record::{FieldSpec, FieldType, RecordError, TypeError, Typed, Value};

/// Accepts only members of a fixed, ordered value set.
///
/// Membership is SameValueZero: no coercion between kinds, records by
/// identity. An absent value is replaced by the default first, so without a
/// default an absent value (and therefore `delete`) is rejected.
///
/// ```
/// use typed_record::{FieldMap, RecordType, Value};
/// use typed_record_ext::Enum;
///
/// let block = RecordType::new(
///     FieldMap::new()
///         .field("kind", Enum::new(["text", "image"]).unwrap())
///         .field("align", Enum::with_default(["left", "center", "right"], "left").unwrap()),
/// )
/// .unwrap();
///
/// let b = block.construct(serde_json::json!({"kind": "text"})).unwrap();
/// assert_eq!(b.get("align"), Some(&Value::from("left")));
/// assert!(b.set("kind", "video").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Enum {
    values: Vec<Value>,
    default: Value,
    rendered: String,
}

impl Enum {
    pub fn new<I, V>(values: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::build(values.into_iter().map(Into::into).collect(), Value::Undefined)
    }

    /// `default` must be one of `values`.
    pub fn with_default<I, V>(values: I, default: impl Into<Value>) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::build(values.into_iter().map(Into::into).collect(), default.into())
    }

    /// Builds from a dynamic value, which must be a `List`.
    pub fn from_value(values: Value, default: Value) -> Result<Self, RecordError> {
        match values {
            Value::List(items) => Self::build(items, default),
            other => Err(RecordError::invalid_argument(format!(
                "{other} must be an array"
            ))),
        }
    }

    fn build(values: Vec<Value>, default: Value) -> Result<Self, RecordError> {
        if values.is_empty() {
            return Err(RecordError::invalid_argument(format!(
                "{} must contain elements",
                Value::List(values)
            )));
        }
        let rendered = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let enumeration = Self {
            values,
            default,
            rendered,
        };
        if !enumeration.default.is_undefined() && !enumeration.contains(&enumeration.default) {
            return Err(RecordError::invalid_argument(
                enumeration.not_in_set(&enumeration.default),
            ));
        }
        debug!(type_name = %enumeration.type_name(), "built Enum");
        Ok(enumeration)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|member| member.same_value_zero(value))
    }

    fn not_in_set(&self, value: &Value) -> String {
        format!("{value} is not in the set {{{}}}", self.rendered)
    }
}

impl Typed for Enum {
    fn type_name(&self) -> String {
        format!("Enum({})", self.rendered)
    }

    fn read(&self, value: Value) -> Result<Value, TypeError> {
        let value = if value.is_undefined() {
            self.default.clone()
        } else {
            value
        };
        if self.contains(&value) {
            Ok(value)
        } else {
            Err(TypeError::new(self.not_in_set(&value)))
        }
    }

    fn default_value(&self) -> Value {
        self.default.clone()
    }
}

impl From<Enum> for FieldType {
    fn from(enumeration: Enum) -> Self {
        FieldType::custom(enumeration)
    }
}

impl From<Enum> for FieldSpec {
    fn from(enumeration: Enum) -> Self {
        FieldSpec::Type(enumeration.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_values_in_declaration_order() {
        let e = Enum::new(["b", "a", "c"]).unwrap();
        assert_eq!(e.type_name(), "Enum(b, a, c)");
    }

    #[test]
    fn mixed_kinds_do_not_coerce() {
        let e = Enum::new([Value::from(1), Value::from("two")]).unwrap();
        assert!(e.read(Value::from(1)).is_ok());
        assert!(e.read(Value::from("1")).is_err());
        assert!(e.read(Value::from("two")).is_ok());
    }
}
