//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid arguments to graph operations)
//! - 3: Data error (unreadable document, unknown vertex, capacity exhausted)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad document, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("vertex {id} does not belong to this graph")]
    ForeignVertex { id: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} is full (capacity {capacity})")]
    CapacityExceeded { context: String, capacity: usize },

    #[error("invalid document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a vertex handle that is not a live member of the graph
    pub fn foreign_vertex(id: impl std::fmt::Display) -> Self {
        GraphError::ForeignVertex { id: id.to_string() }
    }

    /// Create an error for a bounded container that has no room left
    pub fn capacity_exceeded(context: &str, capacity: usize) -> Self {
        GraphError::CapacityExceeded {
            context: context.to_string(),
            capacity,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::ForeignVertex { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::NotFound { .. }
            | GraphError::CapacityExceeded { .. }
            | GraphError::InvalidDocument { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Yaml(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::TomlSer(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::ForeignVertex { .. } => "foreign_vertex",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::NotFound { .. } => "not_found",
            GraphError::CapacityExceeded { .. } => "capacity_exceeded",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::Io(_) => "io_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) | GraphError::TomlSer(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            GraphError::foreign_vertex("v0@g1").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphError::not_found("vertex", "z").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::capacity_exceeded("queue", 2).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::not_found("vertex", "z").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "not_found");
        assert_eq!(json["error"]["message"], "vertex not found: z");
    }

    #[test]
    fn test_capacity_message() {
        let err = GraphError::capacity_exceeded("stack", 4);
        assert_eq!(err.to_string(), "stack is full (capacity 4)");
    }
}
