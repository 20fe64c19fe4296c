//! Ordered field declarations for record types.

use indexmap::IndexMap;

use super::resolve::FieldSpec;

/// Ordered `field name → FieldSpec` declarations.
///
/// ```
/// use typed_record::{FieldMap, FieldType, RecordType};
///
/// let point = RecordType::new(
///     FieldMap::new()
///         .field("id", FieldType::string())
///         .field("kind", "point"),
/// )
/// .unwrap();
/// assert_eq!(point.size(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: IndexMap<String, FieldSpec>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.insert(key, spec);
        self
    }

    /// Adds or replaces a declaration, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, spec: impl Into<FieldSpec>) {
        self.entries.insert(key.into(), spec.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, S: Into<FieldSpec>> FromIterator<(K, S)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, spec) in iter {
            map.insert(key, spec);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldSpec);
    type IntoIter = indexmap::map::IntoIter<String, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
