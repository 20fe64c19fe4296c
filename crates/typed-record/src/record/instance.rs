//! Record instances.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::{read_field, RecordType};
use crate::error::RecordError;
use crate::value::{Map, Value};

/// An instance of a [`RecordType`].
///
/// Records are persistent: [`set`](Record::set), [`delete`](Record::delete)
/// and [`set_in`](Record::set_in) return a new record and leave the receiver
/// untouched. In-place writes ([`set_mut`](Record::set_mut),
/// [`assign`](Record::assign)) need a draft obtained from
/// [`as_mutable`](Record::as_mutable); [`as_immutable`](Record::as_immutable)
/// commits it.
#[derive(Clone)]
pub struct Record {
    ty: RecordType,
    fields: Arc<IndexMap<String, Value>>,
    draft: bool,
}

impl Record {
    pub(crate) fn from_parts(ty: RecordType, fields: IndexMap<String, Value>) -> Self {
        Self {
            ty,
            fields: Arc::new(fields),
            draft: false,
        }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    /// `true` when this record's type is `ty` or derives from it.
    pub fn is_instance_of(&self, ty: &RecordType) -> bool {
        self.ty.is_subtype_of(ty)
    }

    /// Identity: same type and same underlying storage.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        self.ty.ptr_eq(&other.ty) && Arc::ptr_eq(&self.fields, &other.fields)
    }

    pub fn size(&self) -> usize {
        self.ty.size()
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Follows `path` through nested records and plain maps.
    pub fn get_in(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.get(first)?, |value, key| value.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy with `key` set to `value`, read through the field's type.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<Record, RecordError> {
        let mut next = self.clone();
        next.write(key, value.into())?;
        Ok(next)
    }

    /// Returns a copy with `key` reset to the field's default.
    ///
    /// The default is read through the field's type like any other value, so
    /// deleting a field whose default does not validate fails.
    pub fn delete(&self, key: &str) -> Result<Record, RecordError> {
        self.set(key, Value::Undefined)
    }

    /// Sets a value at a nested path and commits each level through its
    /// owning field's type, innermost first.
    ///
    /// Missing or nullish intermediate values become plain maps.
    pub fn set_in(&self, path: &[&str], value: impl Into<Value>) -> Result<Record, RecordError> {
        match path {
            [] => Err(RecordError::invalid_argument("set_in requires a non-empty path")),
            [key] => self.set(key, value),
            [key, rest @ ..] => {
                let current = self.get(key).ok_or_else(|| self.unknown(key))?;
                let updated = set_in_value(current.clone(), rest, value.into(), path)?;
                self.set(key, updated)
            }
        }
    }

    /// Writes in place. Only drafts accept this.
    pub fn set_mut(&mut self, key: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        if !self.draft {
            return Err(RecordError::immutable());
        }
        self.write(key, value.into())
    }

    /// A draft copy that accepts in-place writes.
    pub fn as_mutable(&self) -> Record {
        Self {
            draft: true,
            ..self.clone()
        }
    }

    /// Commits a draft.
    pub fn as_immutable(self) -> Record {
        Self {
            draft: false,
            ..self
        }
    }

    /// Reads a named property defined on the record's type or an ancestor.
    pub fn prop(&self, name: &str) -> Option<Value> {
        self.ty.property(name).map(|p| p.get(self))
    }

    /// Writes a named property through its setter.
    pub fn assign(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        let property = self.ty.property(name).cloned().ok_or_else(|| self.unknown(name))?;
        property.set(self, value.into())
    }

    pub fn to_json(&self) -> serde_json::Value {
        Value::Map(self.fields.as_ref().clone()).to_json()
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), RecordError> {
        let ty = self.ty.field(key).ok_or_else(|| self.unknown(key))?;
        let value = read_field(key, ty, value)?;
        trace!(record = %self.ty.type_name(), field = key, "committing field");
        Arc::make_mut(&mut self.fields).insert(key.to_owned(), value);
        Ok(())
    }

    fn unknown(&self, key: &str) -> RecordError {
        RecordError::UnknownField {
            key: key.to_owned(),
            type_name: self.ty.type_name(),
        }
    }
}

fn set_in_value(
    target: Value,
    path: &[&str],
    value: Value,
    full_path: &[&str],
) -> Result<Value, RecordError> {
    let Some((key, rest)) = path.split_first() else {
        return Ok(value);
    };
    match target {
        Value::Record(record) => record.set_in(path, value).map(Value::Record),
        Value::Map(mut map) => {
            let child = map.get(*key).cloned().unwrap_or_default();
            let updated = set_in_value(child, rest, value, full_path)?;
            map.insert((*key).to_owned(), updated);
            Ok(Value::Map(map))
        }
        Value::Undefined | Value::Null => set_in_value(Value::Map(Map::new()), path, value, full_path),
        other => Err(RecordError::InvalidPath {
            path: full_path.join(", "),
            value: other.to_string(),
        }),
    }
}

impl PartialEq for Record {
    /// Structural: same type and equal field values.
    fn eq(&self, other: &Self) -> bool {
        self.ty.ptr_eq(&other.ty) && self.fields == other.fields
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type", &self.ty.type_name())
            .field("fields", &self.fields)
            .field("draft", &self.draft)
            .finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.label().unwrap_or("Record"))?;
        f.write_str(" {")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " \"{key}\": {}", value.to_json())?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_def::{FieldMap, FieldType};
    use serde_json::json;

    fn point() -> RecordType {
        RecordType::new(
            FieldMap::new()
                .field("x", FieldType::num())
                .field("label", "origin"),
        )
        .unwrap()
    }

    #[test]
    fn set_is_persistent() {
        let p = point().construct(json!({"x": 1})).unwrap();
        let q = p.set("x", 2).unwrap();
        assert_eq!(p.get("x"), Some(&Value::from(1)));
        assert_eq!(q.get("x"), Some(&Value::from(2)));
        assert!(!p.ptr_eq(&q));
    }

    #[test]
    fn clone_shares_identity() {
        let p = point().construct(json!({"x": 1})).unwrap();
        assert!(p.ptr_eq(&p.clone()));
    }

    #[test]
    fn display_lists_fields() {
        let p = point().construct(json!({"x": 1})).unwrap();
        assert_eq!(p.to_string(), r#"Record { "x": 1.0, "label": "origin" }"#);
    }
}
