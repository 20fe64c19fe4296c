//! Discriminated-union field type.
//!
//! The value of a named string property (the tag) picks which record type a
//! structure becomes. Branch types are checked when the descriptor is built:
//! each must declare the tag property as a `String` field.

use indexmap::IndexMap;
use tracing::debug;
use typed_record::{type_of, FieldSpec, FieldType, RecordError, RecordType, TypeError, Typed, Value};

/// Chooses a record type from the value of `property`.
///
/// ```
/// use typed_record::{FieldMap, FieldType, RecordType};
/// use typed_record_ext::Discriminator;
///
/// let text = RecordType::new(
///     FieldMap::new().field("type", FieldType::string()).field("value", FieldType::string()),
/// )
/// .unwrap();
/// let number = RecordType::new(
///     FieldMap::new().field("type", FieldType::string()).field("value", FieldType::num()),
/// )
/// .unwrap();
///
/// let cell = RecordType::new(FieldMap::new().field(
///     "value",
///     Discriminator::new("type", [("text", &text), ("number", &number)]).unwrap(),
/// ))
/// .unwrap();
///
/// let c = cell
///     .construct(serde_json::json!({"value": {"type": "number", "value": 4}}))
///     .unwrap();
/// assert!(c.get("value").unwrap().as_record().unwrap().is_instance_of(&number));
/// ```
#[derive(Debug, Clone)]
pub struct Discriminator {
    property: String,
    types: IndexMap<String, RecordType>,
    default_type: Option<RecordType>,
}

impl Discriminator {
    pub fn new<I, K, S>(property: &str, types: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<FieldSpec>,
    {
        Self::build(property, types, None)
    }

    /// Like [`new`](Self::new), falling back to `default_type` for tags not
    /// in `types`.
    pub fn with_default<I, K, S>(
        property: &str,
        types: I,
        default_type: impl Into<FieldSpec>,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<FieldSpec>,
    {
        Self::build(property, types, Some(default_type.into()))
    }

    fn build<I, K, S>(
        property: &str,
        types: I,
        default_type: Option<FieldSpec>,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<FieldSpec>,
    {
        if property.is_empty() {
            return Err(RecordError::invalid_argument(format!(
                "{property} must be a string"
            )));
        }

        let mut branches = IndexMap::new();
        for (key, spec) in types {
            let key = key.into();
            let record_type = branch(property, &key, &spec.into())?;
            branches.insert(key, record_type);
        }
        if branches.is_empty() {
            return Err(RecordError::invalid_argument(
                "{} must contain at least one type mapping",
            ));
        }

        let default_type = default_type
            .map(|spec| branch(property, "default", &spec))
            .transpose()?;

        let discriminator = Self {
            property: property.to_owned(),
            types: branches,
            default_type,
        };
        debug!(
            type_name = %discriminator.type_name(),
            branches = discriminator.types.len(),
            has_default = discriminator.default_type.is_some(),
            "built Discriminator"
        );
        Ok(discriminator)
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn types(&self) -> &IndexMap<String, RecordType> {
        &self.types
    }

    pub fn default_type(&self) -> Option<&RecordType> {
        self.default_type.as_ref()
    }

    /// The record type selected for `tag`, if any.
    pub fn resolve(&self, tag: &str) -> Option<&RecordType> {
        self.types.get(tag).or(self.default_type.as_ref())
    }

    fn known_tags(&self) -> String {
        self.types
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Checks that `spec` names a record type declaring `property` as a string.
fn branch(property: &str, name: &str, spec: &FieldSpec) -> Result<RecordType, RecordError> {
    let Some(record_type) = type_of(spec)
        .as_ref()
        .and_then(FieldType::as_record_type)
        .cloned()
    else {
        return Err(RecordError::invalid_argument(format!(
            "{name} type must be a record"
        )));
    };
    match record_type.field(property) {
        None => Err(RecordError::invalid_argument(format!(
            "{name} type must have a {property} property"
        ))),
        Some(field) if !field.is_str() => Err(RecordError::invalid_argument(format!(
            "{name}.{property} must be a String type"
        ))),
        Some(_) => Ok(record_type),
    }
}

impl Typed for Discriminator {
    fn type_name(&self) -> String {
        format!("Discriminator({})", self.property)
    }

    fn read(&self, value: Value) -> Result<Value, TypeError> {
        if !value.is_object() {
            return Err(TypeError::new(format!("{value} is not an object")));
        }
        let Some(tag) = value.get(&self.property) else {
            return Err(TypeError::new(format!(
                "{value} does not have a {} property",
                self.property
            )));
        };
        let tag = match tag {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        };

        // The message lists only the explicit tags; a default type, when
        // present, has already been tried.
        let Some(target) = self.resolve(&tag) else {
            return Err(TypeError::new(format!(
                "{tag} is not in the set {{{}}}",
                self.known_tags()
            )));
        };

        if let Value::Record(record) = &value {
            if record.is_instance_of(target) {
                return Ok(value);
            }
        }
        debug!(
            property = %self.property,
            tag = %tag,
            target = %target.type_name(),
            "constructing discriminated record"
        );
        target
            .construct(value)
            .map(Value::Record)
            .map_err(|err| TypeError::new(err.to_string()))
    }
}

impl From<Discriminator> for FieldType {
    fn from(discriminator: Discriminator) -> Self {
        FieldType::custom(discriminator)
    }
}

impl From<Discriminator> for FieldSpec {
    fn from(discriminator: Discriminator) -> Self {
        FieldSpec::Type(discriminator.into())
    }
}
