//! Core error types for ascend-core.
//!
//! This module defines the error hierarchy using thiserror. Note that
//! the task engine itself has no fatal conditions -- invalid references
//! are silent no-ops and degenerate calibration input produces a sparse
//! (but valid) schedule. Errors here come from the edges: storage,
//! configuration, sync, and input parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ascend-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Remote mirroring errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Snapshot-store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data directory could not be resolved or created
    #[error("Failed to open data directory {path}: {message}")]
    OpenFailed { path: PathBuf, message: String },

    /// Failed to read a snapshot record
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write a snapshot record
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Remote mirroring errors. All of these are advisory -- local state
/// transitions never depend on sync success.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Sync endpoint/key not configured (offline mode)
    #[error("Sync is not configured (ASCEND_SYNC_URL / ASCEND_SYNC_KEY unset)")]
    NotConfigured,

    /// Request failed at the transport level
    #[error("Sync request failed: {0}")]
    RequestFailed(String),

    /// Remote rejected the record
    #[error("Sync endpoint returned status {status} for table '{table}'")]
    RejectedStatus { table: String, status: u16 },
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::RequestFailed(err.to_string())
    }
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
