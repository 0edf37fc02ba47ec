//! Error types for the AEAI site.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all site crates. Uses `thiserror` for derive macros.

use thiserror::Error;

/// Errors that can occur while serving the site.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found (unknown slug, missing page).
    #[error("Not found: {0}")]
    NotFound(String),

    /// CMS request failure: transport, non-2xx status, or a payload that
    /// could not be decoded. Callers substitute fallback content.
    #[error("CMS error: {message}")]
    Cms {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a CMS error without an underlying cause.
    pub fn cms(msg: impl Into<String>) -> Self {
        Self::Cms {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a CMS error wrapping an underlying cause.
    pub fn cms_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Cms {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Whether this error came from the CMS boundary.
    ///
    /// CMS errors are never surfaced to visitors; pages swap in fallback
    /// content instead.
    pub fn is_cms(&self) -> bool {
        matches!(self, Self::Cms { .. })
    }
}

/// Result type alias using the site's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::config("bad"), Error::Config(_)));
        assert!(matches!(Error::not_found("x"), Error::NotFound(_)));
        assert!(matches!(Error::invalid_data("y"), Error::InvalidData(_)));
    }

    #[test]
    fn test_cms_error_display() {
        let err = Error::cms("connection refused");
        assert_eq!(err.to_string(), "CMS error: connection refused");
        assert!(err.is_cms());
    }

    #[test]
    fn test_cms_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = Error::cms_with_source("fetch failed", io);
        assert!(err.is_cms());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_non_cms_errors_are_not_cms() {
        assert!(!Error::not_found("page").is_cms());
        assert!(!Error::config("missing").is_cms());
    }
}
