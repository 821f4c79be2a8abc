//! Application layer errors.
//!
//! These errors represent failures in orchestration, not placement logic.
//! Placement decisions never fail; an unsupported type is a skip.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, WarpackError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Copying an artifact into the webapp tree failed. Aborts the run.
    #[error("Failed to copy file for artifact[{artifact}] to {target}: {source}")]
    CopyFailed {
        artifact: String,
        target: PathBuf,
        #[source]
        source: Box<WarpackError>,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An artifact manifest could not be read or understood.
    #[error("Invalid artifact manifest {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// In-memory adapter state is unavailable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CopyFailed { target, .. } => vec![
                format!("Could not write: {}", target.display()),
                "Check that you have write permissions on the output directory".into(),
                "Check available disk space".into(),
                "Make sure the resolved artifact file still exists".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Check the manifest at {}", path.display()),
                "Each [[artifact]] needs group_id, artifact_id, version and file".into(),
                "Or a coordinate = \"group:artifact:version[:type[:classifier]]\"".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CopyFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ManifestError { .. } => ErrorCategory::Validation,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
