//! Dynamic value model shared by records and field types.
//!
//! `Undefined` stands for an absent value (a missing key, an omitted
//! argument) and is distinct from an explicit `Null`. Field types receive
//! and return `Value`s; the host substitutes a field's default for
//! `Undefined` before reading it.

use indexmap::IndexMap;
use std::fmt;

use crate::record::Record;

/// Ordered plain structure (string keys, insertion order).
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<Value>),
    Map(Map),
    Record(Record),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `true` for both `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Lists, plain maps and records.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_) | Self::Record(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Keyed lookup on a plain map or a record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(m) => m.get(key),
            Self::Record(r) => r.get(key),
            _ => None,
        }
    }

    /// Whether `key` is present: an own key of a plain map, or a field
    /// declared by a record's type.
    pub fn has_key(&self, key: &str) -> bool {
        match self {
            Self::Map(m) => m.contains_key(key),
            Self::Record(r) => r.record_type().field(key).is_some(),
            _ => false,
        }
    }

    /// SameValueZero comparison: primitives by value (`NaN` equals `NaN`,
    /// no cross-type coercion), records by identity, lists and maps
    /// structurally.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Record(a), Self::Record(b)) => a.ptr_eq(b),
            _ => self == other,
        }
    }

    /// Converts to plain JSON. `Undefined` map entries are skipped; any other
    /// `Undefined` becomes `null`, as do non-finite numbers.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Undefined | Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Num(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, v)| !v.is_undefined())
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Record(r) => r.to_json(),
        }
    }
}

fn format_num(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Num(n) => format_num(f, *n),
            Self::Str(s) => f.write_str(s),
            // Lists join like JS arrays: nullish items render empty.
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Map(_) => write!(f, "{}", self.to_json()),
            Self::Record(r) => write!(f, "{r}"),
        }
    }
}

// -------------------------------------------------------------------------
// Conversions

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Num(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_follows_js_string_conversion() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(0).to_string(), "0");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(-3.0).to_string(), "-3");
        assert_eq!(Value::Num(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(json!(["a", null, 2])).to_string(), "a,,2");
        assert_eq!(Value::List(vec![]).to_string(), "");
        assert_eq!(Value::from(json!({"foo": "bar"})).to_string(), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn same_value_zero_does_not_coerce() {
        assert!(Value::from(1).same_value_zero(&Value::from(1.0)));
        assert!(Value::Num(f64::NAN).same_value_zero(&Value::Num(f64::NAN)));
        assert!(!Value::from("1").same_value_zero(&Value::from(1)));
        assert!(!Value::Null.same_value_zero(&Value::Undefined));
    }

    #[test]
    fn json_conversion_keeps_key_order() {
        let value = Value::from(json!({"b": 1, "a": [true, null]}));
        let map = value.as_map().expect("map");
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(value.to_json(), json!({"b": 1.0, "a": [true, null]}));
    }

    #[test]
    fn keyed_lookup_on_maps() {
        let value = Value::from(json!({"a": null}));
        assert!(value.has_key("a"));
        assert!(!value.has_key("b"));
        assert_eq!(value.get("a"), Some(&Value::Null));
        assert!(!Value::from("a").has_key("a"));
    }

    #[test]
    fn undefined_entries_are_dropped_from_json() {
        let mut map = Map::new();
        map.insert("gone".into(), Value::Undefined);
        map.insert("kept".into(), Value::Null);
        assert_eq!(Value::Map(map).to_json(), json!({"kept": null}));
    }
}
