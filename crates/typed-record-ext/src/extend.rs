//! Record type extension.

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;
use typed_record::{type_of, FieldMap, FieldSpec, Property, RecordError, RecordType, Value};

/// Derives a record type from `base` with additional fields.
///
/// The new type's schema is `base`'s schema followed by `fields`; its
/// instances are instances of `base` (and of every ancestor of `base`).
/// Each added field gets a property whose setter only writes to drafts.
/// Redeclaring a base field replaces its type in place.
///
/// ```
/// use typed_record::{FieldMap, FieldType, RecordType, Value};
/// use typed_record_ext::extend;
///
/// let base = RecordType::new(FieldMap::new().field("type", FieldType::string())).unwrap();
/// let text = extend(&base, FieldMap::new().field("value", FieldType::string()), None).unwrap();
///
/// let t = text
///     .construct(serde_json::json!({"type": "text", "value": "hi"}))
///     .unwrap();
/// assert!(t.is_instance_of(&base));
/// assert_eq!(t.size(), 2);
/// assert_eq!(t.prop("value"), Some(Value::from("hi")));
/// ```
pub fn extend(
    base: &RecordType,
    fields: FieldMap,
    label: Option<&str>,
) -> Result<RecordType, RecordError> {
    if fields.is_empty() {
        return Err(RecordError::invalid_argument(
            "At least one field must be defined",
        ));
    }

    let mut schema = base.schema().clone();
    let mut properties = IndexMap::with_capacity(fields.len());
    for (key, spec) in fields {
        let Some(field_type) = type_of(&spec) else {
            return Err(RecordError::invalid_argument(format!(
                "Invalid field descriptor provided for \"{key}\" field"
            )));
        };
        properties.insert(key.clone(), draft_only_property(&key));
        schema.insert(key, field_type);
    }

    let extended = RecordType::derive(base, schema, label.map(str::to_owned), properties);
    debug!(
        base = %base.type_name(),
        extended = %extended.type_name(),
        size = extended.size(),
        "extended record type"
    );
    Ok(extended)
}

/// [`extend`] for a base given as a field spec, which must name a record type.
pub fn extend_spec(
    base: impl Into<FieldSpec>,
    fields: FieldMap,
    label: Option<&str>,
) -> Result<RecordType, RecordError> {
    let base = base.into();
    let Some(base) = type_of(&base).and_then(|ty| ty.as_record_type().cloned()) else {
        return Err(RecordError::invalid_argument(
            "BaseRecord must be a Record type",
        ));
    };
    extend(&base, fields, label)
}

fn draft_only_property(key: &str) -> Property {
    let key: Arc<str> = Arc::from(key);
    let set_key = Arc::clone(&key);
    Property::new(
        move |record| record.get(&key).cloned().unwrap_or(Value::Undefined),
        move |record, value| {
            if !record.is_draft() {
                return Err(RecordError::immutable());
            }
            record.set_mut(&set_key, value)
        },
    )
}
