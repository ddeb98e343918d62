//! Application layer errors.
//!
//! These represent orchestration failures, not business-rule violations —
//! those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving generation through the ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target artifact file already exists; generation never overwrites.
    #[error("file already exists: {path}")]
    ArtifactExists { path: PathBuf },

    /// Filesystem operation failed (permissions, missing parent, disk full).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ArtifactExists { path } => vec![
                format!("'{}' already exists", path.display()),
                "Pick a different name, or remove the file first".into(),
                "Generated files are never overwritten".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArtifactExists { .. } => ErrorCategory::Conflict,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
