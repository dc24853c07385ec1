//! Custom error types for the roster board
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for roster board operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A page snapshot could not be turned into a render tree
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// A render tree lookup came back empty
    #[error("{element_type} not found: {identifier}")]
    ElementNotFound {
        element_type: &'static str,
        identifier: String,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl RosterError {
    /// Create a "not found" error for student cards
    pub fn card_not_found(identifier: impl Into<String>) -> Self {
        Self::ElementNotFound {
            element_type: "Card",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a card's payment status badge
    pub fn status_not_found(identifier: impl Into<String>) -> Self {
        Self::ElementNotFound {
            element_type: "Status badge",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for action buttons
    pub fn button_not_found(identifier: impl Into<String>) -> Self {
        Self::ElementNotFound {
            element_type: "Action button",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for filter buttons
    pub fn filter_not_found(identifier: impl Into<String>) -> Self {
        Self::ElementNotFound {
            element_type: "Filter button",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for month sections
    pub fn section_not_found(identifier: impl Into<String>) -> Self {
        Self::ElementNotFound {
            element_type: "Section",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RosterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for roster board operations
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RosterError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = RosterError::card_not_found("Ivanov");
        assert_eq!(err.to_string(), "Card not found: Ivanov");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_badge_not_found() {
        let err = RosterError::status_not_found("card-1234abcd");
        assert_eq!(err.to_string(), "Status badge not found: card-1234abcd");
        assert!(err.is_not_found());
        assert!(!RosterError::Tui("x".into()).is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let roster_err: RosterError = io_err.into();
        assert!(matches!(roster_err, RosterError::Io(_)));
    }
}
