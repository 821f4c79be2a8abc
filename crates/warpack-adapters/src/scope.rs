//! Runtime scope filter.

use warpack_core::{
    application::ports::ScopeFilter,
    domain::{Artifact, Scope},
};

/// Maven's runtime scope filter.
///
/// Runtime visibility covers `compile` and `runtime` artifacts. An artifact
/// without a declared scope is treated as visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeScopeFilter;

impl RuntimeScopeFilter {
    pub fn new() -> Self {
        Self
    }

    pub const fn includes_scope(scope: Option<Scope>) -> bool {
        match scope {
            None | Some(Scope::Compile) | Some(Scope::Runtime) => true,
            Some(Scope::Provided) | Some(Scope::Test) | Some(Scope::System) | Some(Scope::Import) => {
                false
            }
        }
    }
}

impl ScopeFilter for RuntimeScopeFilter {
    fn includes(&self, artifact: &Artifact) -> bool {
        Self::includes_scope(artifact.scope())
    }
}
