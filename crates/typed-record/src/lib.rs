//! `typed-record`: immutable records with typed fields.
//!
//! A [`RecordType`] is declared from an ordered [`FieldMap`]; each field is a
//! [`FieldType`], either one of the built-in classes or any implementation of
//! the [`Typed`] protocol. Every value entering a record (construction,
//! `set`, `delete`, `set_in`, draft writes) is read through its field's type.
//!
//! ```
//! use typed_record::{FieldMap, FieldType, RecordType, Value};
//!
//! let user = RecordType::new(
//!     FieldMap::new()
//!         .field("id", FieldType::string())
//!         .field("role", "member"),
//! )
//! .unwrap();
//!
//! let alice = user.construct(serde_json::json!({"id": "alice"})).unwrap();
//! assert_eq!(alice.get("role"), Some(&Value::from("member")));
//!
//! let admin = alice.set("role", "admin").unwrap();
//! assert_eq!(alice.get("role"), Some(&Value::from("member")));
//! assert_eq!(admin.get("role"), Some(&Value::from("admin")));
//! ```

pub mod error;
pub mod record;
pub mod type_def;
pub mod value;

pub use error::{RecordError, TypeError, IMMUTABLE_SET};
pub use record::{Property, Record, RecordType, Schema};
pub use type_def::{type_of, FieldMap, FieldSpec, FieldType, Typed};
pub use value::{Map, Value};
