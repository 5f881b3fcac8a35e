//! Field Validator Invariant Tests
//!
//! - Validation is deterministic
//! - Empty schema accepts anything
//! - Undeclared keys never affect the result
//! - A required empty field yields exactly one message
//! - Messages follow schema order

use serde_json::{json, Map, Value};
use shopfloor::schema::{validate, FieldDefinition, FieldValidator, IssueKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn obj(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("test data must be an object")
}

fn schema_from(value: Value) -> Vec<FieldDefinition> {
    serde_json::from_value(value).expect("valid schema json")
}

fn weight_schema() -> Vec<FieldDefinition> {
    schema_from(json!([
        {"key": "weight", "label": "Weight", "type": "number",
         "validation": {"required": true, "min": 10, "max": 100}}
    ]))
}

fn mixed_schema() -> Vec<FieldDefinition> {
    schema_from(json!([
        {"key": "lot", "label": "Lot", "type": "text", "validation": {"required": true}},
        {"key": "weight", "label": "Weight", "type": "number", "validation": {"min": 0, "max": 5}},
        {"key": "quality", "label": "Quality", "type": "select",
         "validation": {"options": ["Pass", "Fail"]}},
        {"key": "checked", "label": "Checked", "type": "boolean"}
    ]))
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_required_number_missing() {
    assert_eq!(
        validate(&weight_schema(), &obj(json!({}))),
        vec!["Field 'Weight' is required."]
    );
}

#[test]
fn test_number_below_min() {
    assert_eq!(
        validate(&weight_schema(), &obj(json!({"weight": 5}))),
        vec!["Field 'Weight' must be at least 10."]
    );
}

#[test]
fn test_number_above_max() {
    assert_eq!(
        validate(&weight_schema(), &obj(json!({"weight": 150}))),
        vec!["Field 'Weight' must be at most 100."]
    );
}

#[test]
fn test_select_outside_options() {
    let schema = schema_from(json!([
        {"key": "quality", "label": "Quality", "type": "select",
         "validation": {"options": ["Pass", "Fail"]}}
    ]));
    assert_eq!(
        validate(&schema, &obj(json!({"quality": "Maybe"}))),
        vec!["Field 'Quality' has an invalid selection."]
    );
}

#[test]
fn test_extra_field_ignored() {
    let schema = schema_from(json!([
        {"key": "weight", "label": "Weight", "type": "number", "validation": {"required": true}}
    ]));
    assert!(validate(&schema, &obj(json!({"weight": 50, "extraField": "ignored"}))).is_empty());
}

#[test]
fn test_empty_schema_accepts_anything() {
    assert!(validate(&[], &obj(json!({"anything": "value"}))).is_empty());
}

// =============================================================================
// Invariants
// =============================================================================

/// Same submission validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let schema = mixed_schema();
    let data = obj(json!({"weight": 9, "quality": "maybe"}));

    let first = validate(&schema, &data);
    for _ in 0..100 {
        assert_eq!(validate(&schema, &data), first);
    }
}

/// Inputs are left untouched.
#[test]
fn test_inputs_not_mutated() {
    let schema = mixed_schema();
    let data = obj(json!({"weight": "heavy"}));
    let (schema_before, data_before) = (schema.clone(), data.clone());

    let _ = validate(&schema, &data);
    assert_eq!(schema, schema_before);
    assert_eq!(data, data_before);
}

/// Undeclared keys never change the outcome.
#[test]
fn test_undeclared_keys_do_not_matter() {
    let schema = mixed_schema();
    let base = obj(json!({"lot": "L-1", "weight": 7}));
    let mut noisy = base.clone();
    noisy.insert("operator".into(), json!(null));
    noisy.insert("Weight".into(), json!("x"));
    noisy.insert("extra".into(), json!({"nested": [1, 2]}));

    assert_eq!(validate(&schema, &base), validate(&schema, &noisy));
}

/// Required empty values produce only the required message.
#[test]
fn test_required_empty_yields_single_message() {
    for empty in [json!(null), json!("")] {
        let data = obj(json!({"weight": empty}));
        let issues = FieldValidator::new(&weight_schema()).validate_issues(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), IssueKind::RequiredFieldMissing);
    }
}

/// Output is bounded: at most two messages per number field, one otherwise.
#[test]
fn test_output_is_bounded() {
    let schema = mixed_schema();
    let data = obj(json!({"lot": "", "weight": -1, "quality": 3, "checked": "yes"}));
    let errors = validate(&schema, &data);
    assert!(errors.len() <= schema.len() + 1);
    assert_eq!(
        errors,
        vec![
            "Field 'Lot' is required.",
            "Field 'Weight' must be at least 0.",
            "Field 'Quality' has an invalid selection."
        ]
    );
}

// =============================================================================
// Leniency
// =============================================================================

/// Text fields accept non-string values.
#[test]
fn test_text_accepts_number() {
    let schema = schema_from(json!([
        {"key": "note", "label": "Note", "type": "text", "validation": {"required": true}}
    ]));
    assert!(validate(&schema, &obj(json!({"note": 42}))).is_empty());
}

/// Boolean fields accept any non-empty value.
#[test]
fn test_boolean_accepts_string() {
    let schema = mixed_schema();
    let data = obj(json!({"lot": "L-1", "checked": "sometimes"}));
    assert!(validate(&schema, &data).is_empty());
}

/// Unknown types get no type-specific checks.
#[test]
fn test_unknown_type_is_lenient() {
    let schema = schema_from(json!([
        {"key": "when", "label": "When", "type": "date", "validation": {"min": 3}}
    ]));
    assert!(validate(&schema, &obj(json!({"when": 1}))).is_empty());
}

/// Fractional bounds render like plain numbers.
#[test]
fn test_fractional_bound_message() {
    let schema = schema_from(json!([
        {"key": "t", "label": "Thickness", "type": "number", "validation": {"max": 2.5}}
    ]));
    assert_eq!(
        validate(&schema, &obj(json!({"t": 2.75}))),
        vec!["Field 'Thickness' must be at most 2.5."]
    );
}
