use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the listen-together mediator.
///
/// Only the ambient layers (configuration loading and logging setup) can fail.
/// Command mediation itself never surfaces errors to callers.
#[derive(Error, Debug)]
pub enum MediatorError {
    /// Configuration field missing or invalid
    #[error("invalid config field '{field}' in {component}: {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Component containing the field
        component: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error with path context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Configuration schema could not be exported
    #[error("failed to export config schema: {0}")]
    Schema(String),

    /// Logging could not be initialised
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for mediator setup operations.
pub type Result<T> = result::Result<T, MediatorError>;

impl MediatorError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        MediatorError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path that failed.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        MediatorError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(component: &str, field: &str, reason: impl Into<String>) -> Self {
        MediatorError::InvalidConfigField {
            field: field.to_string(),
            component: component.to_string(),
            reason: reason.into(),
        }
    }
}
