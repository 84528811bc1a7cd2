//! Typed error handling for nestcheck.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.
//!
//! The analysis core itself is total: classification, graph building and
//! walking never fail. Errors only arise at the edges — reading a universe
//! file, decoding its records, or loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nestcheck operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum NestcheckError {
    /// I/O error when reading files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Decode error in a universe file
    #[error("Decode error in {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Malformed type universe (duplicate type records etc.)
    #[error("Universe error: {message}")]
    Universe { message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl NestcheckError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a decode error for a universe file.
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a universe error.
    pub fn universe(message: impl Into<String>) -> Self {
        Self::Universe {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (can continue with other inputs).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Decode { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for nestcheck results.
pub type NestcheckResult<T> = Result<T, NestcheckError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> NestcheckResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> NestcheckResult<T> {
        self.map_err(|e| NestcheckError::io(path, e))
    }
}
