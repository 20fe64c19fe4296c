//! `typed-record-ext`: extended field types for `typed-record`.
//!
//! - [`extend`]: derive a record type with extra fields, keeping instance-of
//!   relationships with the base type
//! - [`Maybe`]: optional field accepting both `Undefined` and `Null`, with
//!   richer default handling
//! - [`Enum`]: field restricted to a fixed value set
//! - [`Discriminator`]: field whose record type is chosen by a string tag
//!
//! Descriptors are built once, at schema-definition time, and convert into
//! [`FieldSpec`](typed_record::FieldSpec) for use in a
//! [`FieldMap`](typed_record::FieldMap). Malformed arguments fail with
//! [`RecordError::InvalidArgument`](typed_record::RecordError::InvalidArgument);
//! values that do not fit a descriptor are reported by its
//! [`read`](typed_record::Typed::read) as a
//! [`TypeError`](typed_record::TypeError).

pub mod discriminator;
pub mod enumeration;
pub mod extend;
pub mod maybe;

pub use discriminator::Discriminator;
pub use enumeration::Enum;
pub use extend::{extend, extend_spec};
pub use maybe::Maybe;
