//! Field validator for shop floor submissions
//!
//! Validation semantics:
//! - Fields are checked in schema order
//! - A required field that is absent, null, or "" yields only the required issue
//! - An optional empty field is valid
//! - number: must be a JSON number, then min and max are checked independently
//! - select: when options are defined, value must be one of them as a string
//! - text, boolean and unrecognized types get no structural check
//! - Keys not declared in the schema are ignored
//!
//! The validator never fails: every problem becomes a [`ValidationIssue`].

use serde_json::{Map, Value};

use super::errors::ValidationIssue;
use super::types::{FieldDefinition, FieldType};

/// Validates submissions against an ordered field list.
///
/// Holds a borrowed schema only. Validation is pure and deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'a> {
    fields: &'a [FieldDefinition],
}

impl<'a> FieldValidator<'a> {
    pub fn new(fields: &'a [FieldDefinition]) -> Self {
        Self { fields }
    }

    /// Returns the issues found in `data`, in schema order.
    pub fn validate_issues(&self, data: &Map<String, Value>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for field in self.fields {
            check_field(field, data.get(&field.key), &mut issues);
        }
        issues
    }

    /// Returns rendered error messages; empty means accepted.
    pub fn validate(&self, data: &Map<String, Value>) -> Vec<String> {
        self.validate_issues(data)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Validates `data` against `schema` and returns the error messages.
pub fn validate(schema: &[FieldDefinition], data: &Map<String, Value>) -> Vec<String> {
    FieldValidator::new(schema).validate(data)
}

fn check_field(field: &FieldDefinition, value: Option<&Value>, issues: &mut Vec<ValidationIssue>) {
    let value = match value {
        Some(v) if !is_empty(v) => v,
        _ => {
            if field.is_required() {
                issues.push(ValidationIssue::required(&field.label));
            }
            return;
        }
    };

    match &field.field_type {
        FieldType::Number => {
            let Some(number) = value.as_f64() else {
                issues.push(ValidationIssue::not_a_number(&field.label));
                return;
            };
            if let Some(min) = field.min() {
                if number < min {
                    issues.push(ValidationIssue::below_min(&field.label, min));
                }
            }
            if let Some(max) = field.max() {
                if number > max {
                    issues.push(ValidationIssue::above_max(&field.label, max));
                }
            }
        }
        FieldType::Select => {
            if let Some(options) = field.options() {
                let selected = value
                    .as_str()
                    .is_some_and(|s| options.iter().any(|opt| opt == s));
                if !selected {
                    issues.push(ValidationIssue::invalid_selection(&field.label));
                }
            }
        }
        FieldType::Text | FieldType::Boolean | FieldType::Unrecognized(_) => {}
    }
}

/// Null and "" count as empty; 0 and false do not.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
