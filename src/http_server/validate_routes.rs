//! Validation HTTP Routes
//!
//! Dry-run endpoint: checks a submission against an inline schema without
//! storing anything. Always answers 200; the verdict is in the body.

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ApiResult;
use crate::schema::{FieldDefinition, FieldValidator};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub schema: Vec<FieldDefinition>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidateResponse {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Create validation routes
pub fn validate_routes() -> Router {
    Router::new().route("/validate", post(validate_handler))
}

async fn validate_handler(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> ApiResult<Json<ValidateResponse>> {
    let Json(request) = payload?;
    let errors = FieldValidator::new(&request.schema).validate(&request.data);
    Ok(Json(ValidateResponse::from_errors(errors)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_errors() {
        assert!(ValidateResponse::from_errors(vec![]).valid);
        let response = ValidateResponse::from_errors(vec!["Field 'A' is required.".into()]);
        assert!(!response.valid);
        assert_eq!(response.errors.len(), 1);
    }
}
