//! Application layer for Warpack.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PackagingService)
//! - **Ports**: Interface definitions (traits) for external collaborators
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Inclusion, renaming
//! and type dispatch live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PackagingReport, PackagingService};

// Re-export port traits (for adapter implementation)
pub use ports::{FinalNameProvider, Filesystem, ScopeFilter};

pub use error::ApplicationError;
