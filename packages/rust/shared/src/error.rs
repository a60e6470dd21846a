//! Error types for featuregate.
//!
//! Every failure is raised at build time, before any selector is emitted.
//! Library crates use [`FeatureGateError`] via `thiserror`.

use std::path::PathBuf;

/// Top-level error type for all featuregate operations.
#[derive(Debug, thiserror::Error)]
pub enum FeatureGateError {
    /// A gate was invoked without an enclosing selector.
    #[error("`{operation}` must be called within a selector")]
    Usage { operation: String },

    /// A feature argument was not a text token.
    #[error("`{value}` is not a string for `{operation}`")]
    Type { operation: String, value: String },

    /// A text feature that cannot be used as a class name.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FeatureGateError>;

impl FeatureGateError {
    /// Create a usage error for the named operation.
    pub fn usage(operation: impl Into<String>) -> Self {
        Self::Usage {
            operation: operation.into(),
        }
    }

    /// Create a type error naming the offending value and operation.
    pub fn type_error(operation: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Type {
            operation: operation.into(),
            value: value.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
