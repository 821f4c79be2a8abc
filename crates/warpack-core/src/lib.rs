//! Warpack Core - artifact placement for web-application archives
//!
//! This crate provides the domain and application layers that decide, for
//! every resolved dependency artifact, whether it belongs in the `WEB-INF`
//! tree, where it goes, and under which filename.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          warpack-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (PackagingService)             │
//! │   collision pass, then placement pass   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (FinalNameProvider, ScopeFilter, Fs)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    warpack-adapters (Infrastructure)    │
//! │ (MavenFinalNames, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Artifact, DuplicateSet, Placement)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warpack_core::{application::PackagingService, domain::{Artifact, Scope}};
//!
//! let artifact = Artifact::builder()
//!     .group_id("com.x")
//!     .artifact_id("foo")
//!     .version("1.0")
//!     .scope(Scope::Runtime)
//!     .file("/repo/com/x/foo/1.0/foo-1.0.jar")
//!     .build()
//!     .unwrap();
//!
//! // Use application service (with injected adapters)
//! let service = PackagingService::new(final_names, scope_filter, filesystem);
//! service.package(&[artifact], "target/webapp").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PackagingReport, PackagingService,
        ports::{FinalNameProvider, Filesystem, ScopeFilter},
    };
    pub use crate::domain::{
        Artifact, ArtifactBuilder, Decision, DuplicatePolicy, DuplicateSet, PackagingPlan,
        Placement, Scope, SkipReason, TargetDirectory,
    };
    pub use crate::error::{WarpackError, WarpackResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
