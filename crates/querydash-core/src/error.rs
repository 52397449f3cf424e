//! Error types for querydash-core.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a query hash cannot be computed.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The data source names a dialect that no query runner is registered for.
    #[error("unknown data source dialect: {0}")]
    UnknownDialect(String),
}

/// Error returned when loading a query runner registry fails.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// IO error reading the registry file.
    #[error("failed to read dialect table {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The registry document is not valid JSON or has the wrong shape.
    #[error("invalid dialect table: {0}")]
    Json(#[from] serde_json::Error),

    /// A dialect name was empty.
    #[error("dialect names must not be empty")]
    EmptyDialect,
}
