//! Unified error types for mapstore.
//!
//! Store operations themselves never fail: absence surfaces as `Null` or
//! `false`, and structural conflicts on write are coerced. This type covers
//! everything around them: parsing path text, extracting typed values,
//! loading configuration, and JSON conversion.

use thiserror::Error;

/// All mapstore errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Path text could not be parsed
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Wrong type for a typed extraction
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for mapstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `WrongType` error from type names.
    pub fn wrong_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::WrongType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Check if this is a path parse error.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::InvalidPath(_))
    }

    /// Check if this is a type mismatch.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
