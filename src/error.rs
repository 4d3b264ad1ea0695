//! Error types for the resolver indexer
//!
//! This module provides a consolidated error type for the crate. The only
//! error class the projection engine itself produces is a failed entity
//! store operation, which is terminal for the event being processed and
//! must propagate to the host processing loop.

use thiserror::Error;

/// Indexer error type
#[derive(Error, Debug)]
pub enum IndexerError {
    /// Entity store operation error
    #[error("Store error: {0}")]
    StoreError(String),

    /// Data serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for the resolver indexer
pub type Result<T> = std::result::Result<T, IndexerError>;

/// Convert a displayable error to a StoreError
pub fn to_store_error<E: std::fmt::Display>(err: E) -> IndexerError {
    IndexerError::StoreError(err.to_string())
}

/// Convert a displayable error to a SerializationError
pub fn to_serialization_error<E: std::fmt::Display>(err: E) -> IndexerError {
    IndexerError::SerializationError(err.to_string())
}

/// Convert a displayable error to a ConfigError
pub fn to_config_error<E: std::fmt::Display>(err: E) -> IndexerError {
    IndexerError::ConfigError(err.to_string())
}
