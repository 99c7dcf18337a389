//! Unified error handling for Devwf Core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single `Result` alias, with user-actionable suggestions and a category
//! for exit-code mapping.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error)]
pub enum DevwfError {
    /// Errors from the domain layer (input validation failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (scaffold orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DevwfError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in devwf".into(),
                "Please report this issue at: https://github.com/devwf/devwf/issues".into(),
            ],
        }
    }

    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input (validation failures).
    Validation,
    /// A referenced resource does not exist.
    NotFound,
    /// Configuration problem.
    Configuration,
    /// Internal/system failure.
    Internal,
}

/// Convenient result type alias.
pub type DevwfResult<T> = Result<T, DevwfError>;
