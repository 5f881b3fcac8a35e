//! Catalog error types

use thiserror::Error;
use uuid::Uuid;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Article not found: {0}")]
    ArticleNotFound(Uuid),

    /// Article definition rejected before any data check
    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    /// Submission is not a JSON object
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// Submission checked against the schema and rejected
    #[error("Validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<String>),

    /// Snapshot file could not be read or written
    #[error("Snapshot error at {path}: {message}")]
    Snapshot { path: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn snapshot(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Snapshot {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Validation messages, if this is a validation failure
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}
