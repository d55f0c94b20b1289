//! Error types for streamweld-cdc
//!
//! The builder layer performs no local recovery: failures from the connector
//! boundary are propagated to the caller unchanged.

use thiserror::Error;

/// Result type alias for CDC builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving, configuring, or building a CDC source
#[derive(Debug, Error)]
pub enum Error {
    /// No builder registered under the requested dialect key.
    /// Fatal to the job; surfaced at resolution time.
    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A required connection field was absent when the runtime source was
    /// actually constructed. Raised by the connector-side builder and passed
    /// through unwrapped.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// SQL synthesis was asked to project a table with zero columns.
    #[error("empty projection: table '{0}' has no columns")]
    EmptyProjection(String),

    /// Configuration validation failed
    #[error("configuration error: {0}")]
    Config(String),

    /// YAML error
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error (for out-of-tree dialect builders)
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unsupported-dialect error
    pub fn unsupported_dialect(dialect: impl Into<String>) -> Self {
        Self::UnsupportedDialect(dialect.into())
    }
}
