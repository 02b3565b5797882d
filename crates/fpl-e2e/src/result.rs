//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type E2eResult<T> = Result<T, E2eError>;

/// Errors that can occur while driving a scenario
#[derive(Debug, Error)]
pub enum E2eError {
    /// Field path handed to a tab selector was empty or malformed
    #[error("Invalid field path: {message}")]
    InvalidFieldPath {
        /// Error message
        message: String,
    },

    /// No element matched a selector
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Selector that failed to match
        selector: String,
    },

    /// A visibility or text assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    NavigationError {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Operation timed out
    #[error("Operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Browser executable could not be launched
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level error (script evaluation, detached frame, ...)
    #[error("Page error: {message}")]
    PageError {
        /// Error message
        message: String,
    },

    /// Suite configuration error (missing credentials, bad URL, ...)
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl E2eError {
    /// Build an assertion failure for a selector/text pair.
    #[must_use]
    pub fn assertion(selector: &str, text: &str) -> Self {
        Self::AssertionFailed {
            message: format!("expected element {selector} to be visible with text '{text}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_path_display() {
        let err = E2eError::InvalidFieldPath {
            message: "path is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid field path: path is empty");
    }

    #[test]
    fn test_assertion_helper_includes_selector_and_text() {
        let err = E2eError::assertion("//tr[1]", "Care order");
        let msg = err.to_string();
        assert!(msg.contains("//tr[1]"));
        assert!(msg.contains("Care order"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = E2eError::from(io);
        assert!(matches!(err, E2eError::Io(_)));
    }
}
