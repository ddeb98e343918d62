//! Domain-layer errors.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Business-rule violations.
///
/// All errors are:
/// - Cloneable (callers may retry with corrected input)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Problem: {reason}"),
                "Use CamelCase without separators".into(),
                "Examples: BookStore, MyAwesomeApp".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
        }
    }
}
