//! Unified error handling for Fastscaf Core.
//!
//! Wraps domain and application errors behind one type with a stable
//! category and suggestion surface for the CLI layer.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Fastscaf Core operations.
#[derive(Debug, Error)]
pub enum FastscafError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl FastscafError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid user input; nothing was written.
    Validation,
    /// A target file already exists; already-ensured directories stay.
    Conflict,
    /// Configuration problem.
    Configuration,
    /// Filesystem or other internal failure.
    Internal,
}

/// Convenient result type alias.
pub type FastscafResult<T> = Result<T, FastscafError>;
