//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use super::entities::{FieldValue, NumericField};
use thiserror::Error;

/// Failure of one `/analyze` call. No variant is retried.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Connection refused, DNS failure, timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Endpoint answered with a non-2xx status. `body` is truncated.
    #[error("analysis endpoint returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Body did not match the result shape.
    #[error("malformed analysis response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("{field} expects a whole number, got {value}")]
    FieldType {
        field: NumericField,
        value: FieldValue,
    },

    #[error("UI error: {0}")]
    Ui(String),
}
