//! Field schema type definitions
//!
//! Supported field types:
//! - text: free-form value, no structural check
//! - number: JSON number with optional min/max bounds
//! - boolean: any non-empty value, no structural check
//! - select: string drawn from an ordered option list
//!
//! Any other type string deserializes to [`FieldType::Unrecognized`], keeps
//! its original spelling, and receives no type-specific checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Field types an article schema may declare
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Select,
    /// Unknown type string, stored verbatim. Empty when the type was missing.
    Unrecognized(String),
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Unrecognized(String::new())
    }
}

impl FieldType {
    /// Returns the type name as it appears in schema JSON
    pub fn type_name(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Select => "select",
            FieldType::Unrecognized(name) => name,
        }
    }

    /// Parses a type name, keeping unknown names as `Unrecognized`
    pub fn from_name(name: &str) -> Self {
        match name {
            "text" => FieldType::Text,
            "number" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "select" => FieldType::Select,
            other => FieldType::Unrecognized(other.to_string()),
        }
    }

    /// True when the schema declared no type at all
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldType::Unrecognized(name) if name.is_empty())
    }
}

impl From<Option<String>> for FieldType {
    fn from(name: Option<String>) -> Self {
        name.map(|n| FieldType::from_name(&n)).unwrap_or_default()
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Unrecognized(name) => name,
            known => known.type_name().to_string(),
        }
    }
}

/// Validation rules attached to a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Whether an empty value is rejected
    #[serde(default)]
    pub required: bool,
    /// Lower bound, only consulted for number fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound, only consulted for number fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Allowed values, only consulted for select fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// One field of an article schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Lookup key into the submitted values
    pub key: String,
    /// Human-readable name used in messages
    pub label: String,
    #[serde(rename = "type", default, skip_serializing_if = "FieldType::is_missing")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FieldDefinition {
    /// Create a field with no validation rules
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            validation: None,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Number)
    }

    pub fn boolean(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Boolean)
    }

    /// Create a select field with the given options
    pub fn select<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(key, label, FieldType::Select)
            .with_options(options.into_iter().map(Into::into).collect())
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.rules_mut().required = true;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.rules_mut().min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.rules_mut().max = Some(max);
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.rules_mut().options = Some(options);
        self
    }

    fn rules_mut(&mut self) -> &mut FieldValidation {
        self.validation.get_or_insert_with(FieldValidation::default)
    }

    pub fn is_required(&self) -> bool {
        self.validation.as_ref().is_some_and(|v| v.required)
    }

    pub fn min(&self) -> Option<f64> {
        self.validation.as_ref().and_then(|v| v.min)
    }

    pub fn max(&self) -> Option<f64> {
        self.validation.as_ref().and_then(|v| v.max)
    }

    /// Options, if defined and non-empty
    pub fn options(&self) -> Option<&[String]> {
        self.validation
            .as_ref()
            .and_then(|v| v.options.as_deref())
            .filter(|opts| !opts.is_empty())
    }
}

/// Checks the structure of a field list (not a submission).
///
/// Keys must be non-empty and unique within the list.
pub fn check_structure(fields: &[FieldDefinition]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.key.trim().is_empty() {
            return Err(format!("Field '{}' has an empty key", field.label));
        }
        if !seen.insert(field.key.as_str()) {
            return Err(format!("Duplicate field key '{}'", field.key));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_definition() {
        let field: FieldDefinition = serde_json::from_value(json!({
            "key": "weight",
            "label": "Weight",
            "type": "number",
            "validation": {"required": true, "min": 10, "max": 100}
        }))
        .unwrap();

        assert_eq!(field.field_type, FieldType::Number);
        assert!(field.is_required());
        assert_eq!(field.min(), Some(10.0));
        assert_eq!(field.max(), Some(100.0));
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let unknown: FieldDefinition =
            serde_json::from_value(json!({"key": "d", "label": "Date", "type": "date"})).unwrap();
        assert_eq!(unknown.field_type, FieldType::Unrecognized("date".into()));

        let missing: FieldDefinition =
            serde_json::from_value(json!({"key": "d", "label": "Date"})).unwrap();
        assert!(missing.field_type.is_missing());
        assert!(!missing.is_required());

        let null: FieldDefinition =
            serde_json::from_value(json!({"key": "d", "label": "Date", "type": null})).unwrap();
        assert!(null.field_type.is_missing());
    }

    #[test]
    fn test_unknown_type_serializes_verbatim() {
        let field: FieldDefinition =
            serde_json::from_value(json!({"key": "d", "label": "Date", "type": "date"})).unwrap();
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "date");

        let missing = serde_json::to_value(FieldDefinition::new("d", "Date", FieldType::default()))
            .unwrap();
        assert!(missing.get("type").is_none());
    }

    #[test]
    fn test_empty_options_are_treated_as_undefined() {
        let field = FieldDefinition::select("q", "Quality", Vec::<String>::new());
        assert!(field.options().is_none());
    }

    #[test]
    fn test_builder_sets_rules() {
        let field = FieldDefinition::number("w", "Weight").required().with_min(1.0);
        assert!(field.is_required());
        assert_eq!(field.min(), Some(1.0));
        assert_eq!(field.max(), None);
    }

    #[test]
    fn test_type_names_round_trip() {
        for ty in [FieldType::Text, FieldType::Number, FieldType::Boolean, FieldType::Select] {
            assert_eq!(FieldType::from_name(ty.type_name()), ty);
        }
        let color = FieldType::from_name("color");
        assert_eq!(color, FieldType::Unrecognized("color".into()));
        assert_eq!(color.type_name(), "color");
    }

    #[test]
    fn test_check_structure_rejects_duplicates() {
        let fields = vec![
            FieldDefinition::text("lot", "Lot"),
            FieldDefinition::number("lot", "Lot number"),
        ];
        let err = check_structure(&fields).unwrap_err();
        assert!(err.contains("Duplicate"));
    }

    #[test]
    fn test_check_structure_rejects_empty_key() {
        let fields = vec![FieldDefinition::text(" ", "Blank")];
        assert!(check_structure(&fields).is_err());
    }
}
