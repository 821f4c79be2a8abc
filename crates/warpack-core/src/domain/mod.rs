//! Core domain layer for Warpack.
//!
//! This module contains pure placement logic with no I/O. Final-name
//! computation, scope filtering and copying are reached through ports
//! defined in the application layer.
//!
//! - **No I/O**: decisions are computed from values only
//! - **Immutable entities**: `Artifact` is a plain value, built once
//! - **Closed dispatch**: type-to-directory mapping is a table in `rules`
//!
// Public API - what the world sees
pub mod collision;
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

// Re-exports for convenience
pub use collision::DuplicateSet;
pub use entities::{
    artifact::{Artifact, ArtifactBuilder, ArtifactKey},
    placement::{Conflict, Decision, PackagingPlan, Placement, SkipReason},
};

pub use error::{DomainError, ErrorCategory};

pub use rules::{PACKAGING_RULES, PackagingRule};

pub use value_objects::{DuplicatePolicy, FilenameTransform, Scope, TargetDirectory};
