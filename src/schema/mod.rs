//! Field schema subsystem
//!
//! Articles carry ordered field lists; submissions are checked against them
//! by a single [`FieldValidator`].
//!
//! # Design Principles
//!
//! - Validation is pure: same schema and data, same messages
//! - Problems are returned, never raised
//! - Messages follow schema field order
//! - Persisted field records are mapped to [`FieldDefinition`] first

mod adapter;
mod errors;
mod types;
mod validator;

pub use adapter::{split_records, FieldRecord, FieldSection};
pub use errors::{IssueKind, RangeBound, ValidationIssue};
pub use types::{check_structure, FieldDefinition, FieldType, FieldValidation};
pub use validator::{validate, FieldValidator};
