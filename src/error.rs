//! Error types for pwd-brkr.

use thiserror::Error;

/// Main error type for break sessions.
#[derive(Debug, Error)]
pub enum Error {
    /// Request rejected before any background task starts.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A REPL verb was given arguments it cannot parse.
    #[error("{0}")]
    Usage(String),

    /// I/O error from the terminal or stdin.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other runtime fault during a run.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns true if the error was raised by input validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = Error::invalid("target must not be empty");
        assert_eq!(err.to_string(), "invalid input: target must not be empty");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn io_error_converts() {
        let err: Error = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_invalid_input());
    }
}
