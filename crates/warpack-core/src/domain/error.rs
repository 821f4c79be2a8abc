// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (plans and reports are cloned freely)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// An unsupported artifact type is deliberately absent: it is a skip
/// decision, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid artifact coordinate \"{coordinate}\": {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },

    #[error("Unknown dependency scope: {0}")]
    UnknownScope(String),

    #[error("Unknown duplicate policy: {0}")]
    UnknownDuplicatePolicy(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Every artifact needs a non-empty '{field}'"),
                "Check the artifact manifest entry".into(),
            ],
            Self::InvalidCoordinate { coordinate, .. } => vec![
                format!("Could not read coordinate: {coordinate}"),
                "Use the form group:artifact:version[:type[:classifier]]".into(),
                "Example: org.apache.commons:commons-lang3:3.14.0:jar".into(),
            ],
            Self::UnknownScope(scope) => vec![
                format!("'{scope}' is not a dependency scope"),
                "Supported scopes: compile, provided, runtime, test, system, import".into(),
            ],
            Self::UnknownDuplicatePolicy(policy) => vec![
                format!("'{policy}' is not a duplicate policy"),
                "Supported policies: keep-all, dedupe-identical".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidCoordinate { .. }
            | Self::UnknownScope(_)
            | Self::UnknownDuplicatePolicy(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
