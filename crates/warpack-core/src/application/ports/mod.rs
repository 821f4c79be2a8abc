//! Application ports (traits) for external collaborators.
//!
//! Ports define what the packaging service needs from the outside world.
//! Adapters in `warpack-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the service, implemented by infrastructure
//!   - `FinalNameProvider`: Default output filename per artifact
//!   - `ScopeFilter`: Runtime visibility
//!   - `Filesystem`: Directory creation and copying

pub mod output;

pub use output::{FinalNameProvider, Filesystem, ScopeFilter};
