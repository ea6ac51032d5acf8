//! Error handling module for assigntui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for assigntui
#[derive(Error, Debug)]
pub enum AssignError {
    /// The requested category has no option catalog (likely a typo in the
    /// category name; not user-recoverable)
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Persisting the settings record failed (storage unavailable, rename
    /// failed, etc.); transient, the submission is preserved for retry
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Catalog invariant violations (duplicate ids, empty category names)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for assigntui operations
pub type Result<T> = std::result::Result<T, AssignError>;

// Convenient error constructors
impl AssignError {
    /// Create an unknown-category error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory(category.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssignError::unknown_category("corr");
        assert_eq!(err.to_string(), "Unknown category: corr");

        let err = AssignError::persistence("disk full");
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AssignError = io_err.into();
        assert!(matches!(err, AssignError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = AssignError::catalog("duplicate id");
        assert!(matches!(err, AssignError::Catalog(_)));

        let err = AssignError::terminal("raw mode failed");
        assert!(matches!(err, AssignError::Terminal(_)));
    }
}
