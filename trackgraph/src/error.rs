use std::fmt;

use crate::model::VertexId;

/// Failures of construction, ingestion and strict mutation calls. `code()` is the
/// stable identifier surfaced to JS.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    InvalidId { kind: &'static str, id: u32 },
    InvalidEdge { u: VertexId, v: VertexId, reason: &'static str },
    NonFinite { param: &'static str },
    OutOfRange { param: &'static str, min: f64, max: f64, got: f64 },
    LimitExceeded { what: &'static str, limit: usize },
    JsonParse(String),
}

impl GraphError {
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::InvalidId { .. } => "invalid_id",
            GraphError::InvalidEdge { .. } => "invalid_edge",
            GraphError::NonFinite { .. } => "non_finite",
            GraphError::OutOfRange { .. } => "out_of_range",
            GraphError::LimitExceeded { .. } => "limit_exceeded",
            GraphError::JsonParse(_) => "json_parse",
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidId { kind, id } => write!(f, "invalid {} id {}", kind, id),
            GraphError::InvalidEdge { u, v, reason } => write!(f, "invalid edge ({}, {}): {}", u, v, reason),
            GraphError::NonFinite { param } => write!(f, "parameter '{}' must be finite", param),
            GraphError::OutOfRange { param, min, max, got } => {
                write!(f, "parameter '{}' out of range [{}, {}]: {}", param, min, max, got)
            }
            GraphError::LimitExceeded { what, limit } => write!(f, "too many {} (limit {})", what, limit),
            GraphError::JsonParse(msg) => write!(f, "json: {}", msg),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::JsonParse(e.to_string())
    }
}
