//! Core error types for chunkwise-core.
//!
//! Every failure in this crate is recoverable. Validation errors are shown
//! to the user, storage read failures fall back to defaults, and
//! presentation failures are only logged.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a chunk cannot start.
///
/// Only the first failing check is reported: task, then duration, then
/// checklist. The display strings are the notices shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a task.")]
    EmptyTask,

    #[error("Please enter a valid time.")]
    InvalidDuration,

    #[error("Please check all the boxes.")]
    IncompleteChecklist,
}

/// Key/value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading a key failed
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// The backing store could not be opened
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Display chrome errors (orientation lock, system bars).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("Orientation change to {requested} denied: {reason}")]
    OrientationDenied { requested: String, reason: String },
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
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}
