//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the packaging service needs from outside.
//! The `warpack-adapters` crate provides implementations.

use crate::domain::Artifact;
use crate::error::WarpackResult;
use std::path::Path;

/// Port computing an artifact's default output filename.
///
/// Implemented by:
/// - `warpack_adapters::MavenFinalNames` (`artifactId-version[-classifier].ext`)
///
/// Must be deterministic: the service calls it once per artifact in the
/// collision pass and relies on the same answer in the placement pass.
#[cfg_attr(test, mockall::automock)]
pub trait FinalNameProvider: Send + Sync {
    fn final_name(&self, artifact: &Artifact) -> String;
}

/// Port deciding whether an artifact is visible at runtime.
///
/// Implemented by:
/// - `warpack_adapters::RuntimeScopeFilter`
#[cfg_attr(test, mockall::automock)]
pub trait ScopeFilter: Send + Sync {
    fn includes(&self, artifact: &Artifact) -> bool;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `warpack_adapters::filesystem::LocalFilesystem` (production)
/// - `warpack_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WarpackResult<()>;

    /// Copy `source` to `destination`, replacing an existing file.
    fn copy_file(&self, source: &Path, destination: &Path) -> WarpackResult<()>;
}
