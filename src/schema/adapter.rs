//! Persisted field records
//!
//! Stored article schemas use a flat camelCase record per field
//! (`fieldKey`, `fieldLabel`, `fieldType`, ...). Records are mapped to
//! [`FieldDefinition`] before validation so every caller goes through the
//! same [`FieldValidator`](super::FieldValidator).

use serde::{Deserialize, Serialize};

use super::types::{FieldDefinition, FieldType, FieldValidation};

/// Which list of an article a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSection {
    /// Engineering metadata captured with the article
    Attribute,
    /// Operator-entered data captured per entry
    ShopFloor,
}

/// Field definition as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub field_key: String,
    pub field_label: String,
    /// Raw type string; unknown values are kept as-is, "" when missing
    #[serde(default)]
    pub field_type: String,
    /// `None` when the definition carried no validation block at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub section: FieldSection,
}

impl FieldRecord {
    /// Builds a record from a canonical definition.
    pub fn from_definition(field: &FieldDefinition, section: FieldSection) -> Self {
        let rules = field.validation.clone().unwrap_or_default();
        Self {
            field_key: field.key.clone(),
            field_label: field.label.clone(),
            field_type: field.field_type.type_name().to_string(),
            required: field.validation.as_ref().map(|v| v.required),
            min_value: rules.min,
            max_value: rules.max,
            options: rules.options,
            section,
        }
    }

    fn has_rules(&self) -> bool {
        self.required.is_some() || self.min_value.is_some() || self.max_value.is_some() || self.options.is_some()
    }
}

impl From<&FieldRecord> for FieldDefinition {
    fn from(record: &FieldRecord) -> Self {
        let validation = record.has_rules().then(|| FieldValidation {
            required: record.required.unwrap_or(false),
            min: record.min_value,
            max: record.max_value,
            options: record.options.clone(),
        });
        Self {
            key: record.field_key.clone(),
            label: record.field_label.clone(),
            field_type: FieldType::from_name(&record.field_type),
            validation,
        }
    }
}

/// Splits records into (attribute, shop floor) definitions, keeping order.
pub fn split_records(records: &[FieldRecord]) -> (Vec<FieldDefinition>, Vec<FieldDefinition>) {
    let mut attribute = Vec::new();
    let mut shop_floor = Vec::new();
    for record in records {
        match record.section {
            FieldSection::Attribute => attribute.push(FieldDefinition::from(record)),
            FieldSection::ShopFloor => shop_floor.push(FieldDefinition::from(record)),
        }
    }
    (attribute, shop_floor)
}
