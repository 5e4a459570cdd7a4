//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown node, missing edge, no route)

mod macros;

use std::fmt::Debug;

use thiserror::Error;

/// Exit codes for the waypath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, missing edge, no route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Hash index errors
    #[error("invalid key: keys must be present")]
    InvalidKey,

    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    // Graph errors
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("no path from {start} to {end}")]
    PathNotFound { start: String, end: String },

    #[error("no nodes reachable from {start}")]
    NoReachableNodes { start: String },

    // Usage errors
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a key already present in a hash index
    pub fn duplicate_key(key: &impl Debug) -> Self {
        WaypathError::DuplicateKey {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a key missing from a hash index
    pub fn key_not_found(key: &impl Debug) -> Self {
        WaypathError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a node missing from a graph
    pub fn node_not_found(node: &impl Debug) -> Self {
        WaypathError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a directed edge missing from a graph
    pub fn edge_not_found(from: &impl Debug, to: &impl Debug) -> Self {
        WaypathError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub fn path_not_found(start: &impl Debug, end: &impl Debug) -> Self {
        WaypathError::PathNotFound {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }

    pub fn no_reachable_nodes(start: &impl Debug) -> Self {
        WaypathError::NoReachableNodes {
            start: format!("{:?}", start),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation, keeping the path in the message
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WaypathError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// True for the "no route" outcome that presentation treats like an empty path
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, WaypathError::PathNotFound { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UsageError(_) | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::InvalidKey
            | WaypathError::DuplicateKey { .. }
            | WaypathError::KeyNotFound { .. }
            | WaypathError::NodeNotFound { .. }
            | WaypathError::EdgeNotFound { .. }
            | WaypathError::PathNotFound { .. }
            | WaypathError::NoReachableNodes { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::InvalidKey => "invalid_key",
            WaypathError::DuplicateKey { .. } => "duplicate_key",
            WaypathError::KeyNotFound { .. } => "key_not_found",
            WaypathError::NodeNotFound { .. } => "node_not_found",
            WaypathError::EdgeNotFound { .. } => "edge_not_found",
            WaypathError::PathNotFound { .. } => "path_not_found",
            WaypathError::NoReachableNodes { .. } => "no_reachable_nodes",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Other(_) => "other",
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
