//! Error types for trellis
//!
//! Malformed graph mutation is reported as a recoverable value; "not
//! reachable" and "no ancestor" outcomes are `Option` results on the
//! operations themselves and never surface here.

use thiserror::Error;

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Edge insertion referenced a vertex that is not in the graph.
    /// The graph is left unmodified.
    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    /// Create an error for an edge endpoint that is absent from the graph
    pub fn vertex_not_found(id: impl std::fmt::Debug) -> Self {
        TrellisError::VertexNotFound {
            id: format!("{:?}", id),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrellisError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::VertexNotFound { .. } => "vertex_not_found",
            TrellisError::Io(_) => "io_error",
            TrellisError::Toml(_) => "toml_error",
            TrellisError::Json(_) => "json_error",
            TrellisError::InvalidValue { .. } => "invalid_value",
            TrellisError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_not_found_message() {
        let err = TrellisError::vertex_not_found(&42);
        assert_eq!(err.to_string(), "vertex not found: 42");
    }

    #[test]
    fn test_to_json_shape() {
        let err = TrellisError::invalid_value("traversal.max_nodes", 0);
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid traversal.max_nodes: 0");
    }
}
