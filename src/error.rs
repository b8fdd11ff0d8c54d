//! Error handling for the LuaPad-RS application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.
//!
//! The autocomplete core never fails at call time; degenerate input is
//! clamped or yields a closed popup. Errors only surface when options are
//! validated at construction and when preferences are read from or written
//! to disk.

use thiserror::Error;

/// Main error type for LuaPad-RS operations
#[derive(Error, Debug)]
pub enum LuaPadError {
    /// Invalid options or failed preference loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LuaPadError>,
    },
}

impl LuaPadError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LuaPadError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for LuaPadError {
    fn from(err: serde_json::Error) -> Self {
        LuaPadError::Serialization(err.to_string())
    }
}

/// Result type alias for LuaPad-RS operations
pub type Result<T> = std::result::Result<T, LuaPadError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LuaPadError::from(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LuaPadError::from(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LuaPadError::Config("max_candidates must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: max_candidates must be at least 1"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = LuaPadError::Serialization("test".to_string());
        let with_ctx = err.with_context("Failed to parse preferences");
        assert!(with_ctx.to_string().contains("Failed to parse preferences"));
        assert!(with_ctx.to_string().contains("test"));
    }

    #[test]
    fn test_io_result_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("Reading app state").unwrap_err();
        assert!(err.to_string().starts_with("Reading app state"));
    }
}
