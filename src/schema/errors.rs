//! Validation issue types
//!
//! Issue kinds:
//! - REQUIRED_FIELD_MISSING
//! - TYPE_MISMATCH
//! - RANGE_VIOLATION
//! - INVALID_SELECTION
//!
//! Issues are values, never raised. Each one renders to the exact
//! message string returned to API clients.

use std::fmt;

/// Issue kind codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Required field absent, null, or empty string
    RequiredFieldMissing,
    /// Number field holding a non-numeric value
    TypeMismatch,
    /// Number outside min/max
    RangeViolation,
    /// Select value not a string or not among options
    InvalidSelection,
}

impl IssueKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::RequiredFieldMissing => "REQUIRED_FIELD_MISSING",
            IssueKind::TypeMismatch => "TYPE_MISMATCH",
            IssueKind::RangeViolation => "RANGE_VIOLATION",
            IssueKind::InvalidSelection => "INVALID_SELECTION",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which numeric bound was crossed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    Min(f64),
    Max(f64),
}

/// One problem found in a submission
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    RequiredFieldMissing { label: String },
    TypeMismatch { label: String },
    RangeViolation { label: String, bound: RangeBound },
    InvalidSelection { label: String },
}

impl ValidationIssue {
    pub fn required(label: impl Into<String>) -> Self {
        Self::RequiredFieldMissing { label: label.into() }
    }

    pub fn not_a_number(label: impl Into<String>) -> Self {
        Self::TypeMismatch { label: label.into() }
    }

    pub fn below_min(label: impl Into<String>, min: f64) -> Self {
        Self::RangeViolation {
            label: label.into(),
            bound: RangeBound::Min(min),
        }
    }

    pub fn above_max(label: impl Into<String>, max: f64) -> Self {
        Self::RangeViolation {
            label: label.into(),
            bound: RangeBound::Max(max),
        }
    }

    pub fn invalid_selection(label: impl Into<String>) -> Self {
        Self::InvalidSelection { label: label.into() }
    }

    pub fn kind(&self) -> IssueKind {
        match self {
            Self::RequiredFieldMissing { .. } => IssueKind::RequiredFieldMissing,
            Self::TypeMismatch { .. } => IssueKind::TypeMismatch,
            Self::RangeViolation { .. } => IssueKind::RangeViolation,
            Self::InvalidSelection { .. } => IssueKind::InvalidSelection,
        }
    }

    /// Label of the offending field
    pub fn label(&self) -> &str {
        match self {
            Self::RequiredFieldMissing { label }
            | Self::TypeMismatch { label }
            | Self::RangeViolation { label, .. }
            | Self::InvalidSelection { label } => label,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFieldMissing { label } => write!(f, "Field '{}' is required.", label),
            Self::TypeMismatch { label } => write!(f, "Field '{}' must be a number.", label),
            Self::RangeViolation {
                label,
                bound: RangeBound::Min(min),
            } => write!(f, "Field '{}' must be at least {}.", label, js_number(*min)),
            Self::RangeViolation {
                label,
                bound: RangeBound::Max(max),
            } => write!(f, "Field '{}' must be at most {}.", label, js_number(*max)),
            Self::InvalidSelection { label } => {
                write!(f, "Field '{}' has an invalid selection.", label)
            }
        }
    }
}

/// Renders a bound the way a browser prints a number.
///
/// Plain decimal between 1e-6 and 1e21, otherwise exponent form with an
/// explicit sign (`1e+21`, `1e-7`). Negative zero prints as `0`.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
