pub mod artifact;
pub mod placement;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactBuilder, ArtifactKey};
pub use placement::{Conflict, Decision, PackagingPlan, Placement, SkipReason};
