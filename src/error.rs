//! Error types for syncmap
//!
//! Provides a unified error type for all map operations.

use thiserror::Error;

/// Result type alias using SyncMapError
pub type Result<T> = std::result::Result<T, SyncMapError>;

/// Unified error type for SyncMap operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncMapError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("unknown key")]
    MissingKey,

    #[error("key already exists")]
    KeyExists,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corrupt payload: {0}")]
    Corruption(String),
}
