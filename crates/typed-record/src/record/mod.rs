//! Record types and their instances.
//!
//! A [`RecordType`] is a reusable factory: an ordered schema of field types,
//! an optional label, an optional parent type it was derived from, and a
//! table of named [`Property`] accessors. Instances are [`Record`]s.
//!
//! Ancestry is explicit: a derived type keeps a handle to its parent, and
//! [`Record::is_instance_of`] walks that chain.

mod instance;
mod property;

pub use instance::Record;
pub use property::{Getter, Property, Setter};

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::RecordError;
use crate::type_def::{type_of, FieldMap, FieldType};
use crate::value::Value;

/// Ordered `field name → FieldType`.
pub type Schema = IndexMap<String, FieldType>;

struct RecordTypeInner {
    label: Option<String>,
    schema: Schema,
    parent: Option<RecordType>,
    properties: IndexMap<String, Property>,
}

/// Cheap to clone; clones share identity.
#[derive(Clone)]
pub struct RecordType {
    inner: Arc<RecordTypeInner>,
}

impl RecordType {
    /// Declares a new root record type.
    pub fn new(fields: FieldMap) -> Result<Self, RecordError> {
        Self::build(fields, None)
    }

    pub fn with_label(fields: FieldMap, label: impl Into<String>) -> Result<Self, RecordError> {
        Self::build(fields, Some(label.into()))
    }

    fn build(fields: FieldMap, label: Option<String>) -> Result<Self, RecordError> {
        let mut schema = Schema::with_capacity(fields.len());
        let mut properties = IndexMap::with_capacity(fields.len());
        for (key, spec) in fields {
            let Some(ty) = type_of(&spec) else {
                return Err(RecordError::invalid_argument(format!(
                    "Invalid field descriptor provided for \"{key}\" field"
                )));
            };
            properties.insert(key.clone(), Property::field(key.clone()));
            schema.insert(key, ty);
        }
        Ok(Self {
            inner: Arc::new(RecordTypeInner {
                label,
                schema,
                parent: None,
                properties,
            }),
        })
    }

    /// Creates a type derived from `parent`.
    ///
    /// `schema` is the complete schema of the new type (normally the
    /// parent's schema plus additions); `properties` are the accessors the new
    /// type adds on top of those inherited from its ancestors.
    pub fn derive(
        parent: &RecordType,
        schema: Schema,
        label: Option<String>,
        properties: IndexMap<String, Property>,
    ) -> Self {
        debug!(
            parent = %parent.type_name(),
            label = label.as_deref().unwrap_or(""),
            fields = schema.len(),
            "deriving record type"
        );
        Self {
            inner: Arc::new(RecordTypeInner {
                label,
                schema,
                parent: Some(parent.clone()),
                properties,
            }),
        }
    }

    /// A subclass with the same schema, as `class Sub extends Base {}` would give.
    pub fn subtype(&self, label: impl Into<String>) -> Self {
        Self::derive(self, self.schema().clone(), Some(label.into()), IndexMap::new())
    }

    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    /// The label, or a rendering of the schema for anonymous types.
    pub fn type_name(&self) -> String {
        if let Some(label) = &self.inner.label {
            return label.clone();
        }
        let fields: Vec<String> = self
            .inner
            .schema
            .iter()
            .map(|(key, ty)| format!("{key}: {}", ty.type_name()))
            .collect();
        format!("Record({{{}}})", fields.join(", "))
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    pub fn field(&self, key: &str) -> Option<&FieldType> {
        self.inner.schema.get(key)
    }

    /// Number of declared fields.
    pub fn size(&self) -> usize {
        self.inner.schema.len()
    }

    pub fn parent(&self) -> Option<&RecordType> {
        self.inner.parent.as_ref()
    }

    /// This type followed by its parent chain.
    pub fn ancestors(&self) -> impl Iterator<Item = &RecordType> {
        std::iter::successors(Some(self), |&ty| ty.parent())
    }

    /// `true` when `other` is this type or one of its ancestors.
    pub fn is_subtype_of(&self, other: &RecordType) -> bool {
        self.ancestors().any(|ty| ty.ptr_eq(other))
    }

    pub fn ptr_eq(&self, other: &RecordType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Finds a named property, nearest type first.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.ancestors().find_map(|ty| ty.inner.properties.get(name))
    }

    /// Builds an instance from a plain structure or another record.
    ///
    /// Every schema field is read through its type, absent ones from the
    /// type's default. Keys outside the schema are dropped. `Undefined` and
    /// `Null` build an all-defaults instance.
    pub fn construct(&self, value: impl Into<Value>) -> Result<Record, RecordError> {
        let source = value.into();
        match &source {
            Value::Undefined | Value::Null | Value::Map(_) | Value::Record(_) => {}
            other => {
                return Err(RecordError::invalid_argument(format!(
                    "{other} cannot be used to construct {}",
                    self.type_name()
                )))
            }
        }
        let mut fields = IndexMap::with_capacity(self.size());
        for (key, ty) in self.schema() {
            let raw = source.get(key).cloned().unwrap_or_default();
            fields.insert(key.clone(), read_field(key, ty, raw)?);
        }
        Ok(Record::from_parts(self.clone(), fields))
    }

    pub fn construct_default(&self) -> Result<Record, RecordError> {
        self.construct(Value::Undefined)
    }
}

/// Reads `value` into a field, substituting the type's default when absent.
pub(crate) fn read_field(key: &str, ty: &FieldType, value: Value) -> Result<Value, RecordError> {
    let value = if value.is_undefined() {
        ty.default_value()
    } else {
        value
    };
    ty.read(value).map_err(|source| RecordError::InvalidField {
        key: key.to_owned(),
        source,
    })
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.type_name())
            .field("parent", &self.parent().map(RecordType::type_name))
            .finish()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}
