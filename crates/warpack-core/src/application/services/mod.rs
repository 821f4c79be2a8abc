//! Application services - orchestrate use cases.
//!
//! `PackagingService` runs the two-pass placement (collision scan, then
//! placement) and, for `package`, the copy side effects.

pub mod packaging_service;

pub use packaging_service::{PackagingReport, PackagingService};
