//! Infrastructure adapters for Warpack.
//!
//! This crate implements the ports defined in `warpack-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod final_name;
pub mod manifest;
pub mod scope;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use final_name::MavenFinalNames;
pub use manifest::{ManifestFormat, ManifestLoader};
pub use scope::RuntimeScopeFilter;
