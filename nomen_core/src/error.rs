//! Error types for nomen_core.

use thiserror::Error;

/// Result type alias using nomen_core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of contract that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad caller input.
    Precondition,
    /// The implementation broke one of its own guarantees.
    Postcondition,
    /// The object was not in a state that permits the operation.
    InvalidState,
}

impl ErrorKind {
    /// Returns a stable lowercase label (used in CLI output).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Precondition => "precondition",
            ErrorKind::Postcondition => "postcondition",
            ErrorKind::InvalidState => "invalid-state",
        }
    }
}

/// Contract violations raised by name operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition failed: null-like input, index out of range,
    /// malformed delimiter.
    #[error("Precondition violated: {message}")]
    Precondition {
        message: String,
        #[source]
        cause: Option<Box<Error>>,
    },

    /// A postcondition or invariant failed after the operation ran.
    #[error("Postcondition violated: {message}")]
    Postcondition {
        message: String,
        #[source]
        cause: Option<Box<Error>>,
    },

    /// The receiver is in a state that does not allow the operation.
    #[error("Invalid state: {message}")]
    InvalidState {
        message: String,
        #[source]
        cause: Option<Box<Error>>,
    },
}

impl Error {
    /// Create a Precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Error::Precondition {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a Postcondition error.
    pub fn postcondition(message: impl Into<String>) -> Self {
        Error::Postcondition {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an InvalidState error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach an underlying cause, replacing any previous one.
    pub fn with_cause(mut self, error: Error) -> Self {
        match &mut self {
            Error::Precondition { cause, .. }
            | Error::Postcondition { cause, .. }
            | Error::InvalidState { cause, .. } => *cause = Some(Box::new(error)),
        }
        self
    }

    /// Which contract this error reports.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Precondition { .. } => ErrorKind::Precondition,
            Error::Postcondition { .. } => ErrorKind::Postcondition,
            Error::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    /// The human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Precondition { message, .. }
            | Error::Postcondition { message, .. }
            | Error::InvalidState { message, .. } => message,
        }
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Error::Precondition { cause, .. }
            | Error::Postcondition { cause, .. }
            | Error::InvalidState { cause, .. } => cause.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kinds_are_distinct() {
        assert_eq!(Error::precondition("x").kind(), ErrorKind::Precondition);
        assert_eq!(Error::postcondition("x").kind(), ErrorKind::Postcondition);
        assert_eq!(Error::invalid_state("x").kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_display_includes_message() {
        let err = Error::precondition("index out of bounds");
        assert_eq!(err.to_string(), "Precondition violated: index out of bounds");
        assert_eq!(err.message(), "index out of bounds");
    }

    #[test]
    fn test_with_cause_is_reported_as_source() {
        let inner = Error::postcondition("clone differs");
        let outer = Error::invalid_state("copy failed").with_cause(inner.clone());

        assert_eq!(outer.kind(), ErrorKind::InvalidState);
        assert_eq!(outer.cause(), Some(&inner));
        assert_eq!(
            outer.source().map(|s| s.to_string()),
            Some(inner.to_string())
        );
    }

    #[test]
    fn test_no_cause_by_default() {
        let err = Error::precondition("bad");
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ErrorKind::Precondition.as_str(), "precondition");
        assert_eq!(ErrorKind::Postcondition.as_str(), "postcondition");
        assert_eq!(ErrorKind::InvalidState.as_str(), "invalid-state");
    }
}
