//! Error types for format operations
//!
//! The converter itself is total and never returns an error. Everything that
//! surrounds it (format lookup, option parsing, writing exports) reports
//! failures through [`FormatError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A format parameter could not be interpreted
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },

    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
