use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{
    collision::DuplicateSet, entities::artifact::Artifact, rules, value_objects::TargetDirectory,
};

/// Why an artifact was left out of the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum SkipReason {
    /// Declared optional by its dependent.
    Optional,
    /// Not visible at runtime (provided, test, system, ...).
    NotRuntimeScoped,
    /// No packaging rule for this type.
    UnsupportedType { artifact_type: String },
    /// Same coordinates as another artifact in the run that was kept instead.
    DuplicateArtifact,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optional => f.write_str("optional"),
            Self::NotRuntimeScoped => f.write_str("not runtime scoped"),
            Self::UnsupportedType { artifact_type } => {
                write!(f, "unsupported type '{artifact_type}'")
            }
            Self::DuplicateArtifact => f.write_str("duplicate artifact"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum Decision {
    Place { directory: TargetDirectory },
    Skip { cause: SkipReason },
}

/// Placement decision for a single artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub artifact: Artifact,
    /// Name proposed by the final-name collaborator.
    pub candidate_name: String,
    /// Name after the type's filename transform and collision renaming.
    pub file_name: String,
    pub decision: Decision,
}

impl Placement {
    /// Decide inclusion, directory and filename for one artifact.
    ///
    /// The type's filename transform and collision renaming run for every
    /// artifact, in that order, so the group prefix never takes part in the
    /// extension swap. Type dispatch only happens for artifacts that are
    /// non-optional and runtime visible.
    pub fn decide(
        artifact: &Artifact,
        candidate_name: &str,
        duplicates: &DuplicateSet,
        runtime_visible: bool,
    ) -> Self {
        debug!(file_name = %candidate_name, "Processing");
        let rule = rules::rule_for(artifact.artifact_type());
        let file_name = match rule {
            Some(rule) => rule.transform.apply(candidate_name),
            None => candidate_name.to_owned(),
        };
        let file_name = duplicates.disambiguate(artifact, candidate_name, &file_name);

        if artifact.is_optional() {
            return Self::skipped(artifact, candidate_name, file_name, SkipReason::Optional);
        }
        if !runtime_visible {
            return Self::skipped(
                artifact,
                candidate_name,
                file_name,
                SkipReason::NotRuntimeScoped,
            );
        }

        match rule {
            Some(rule) => Self {
                artifact: artifact.clone(),
                candidate_name: candidate_name.to_owned(),
                file_name,
                decision: Decision::Place {
                    directory: rule.directory,
                },
            },
            None => {
                debug!(
                    "Artifact of type[{}] is not supported, ignoring[{}]",
                    artifact.artifact_type(),
                    artifact
                );
                Self::skipped(
                    artifact,
                    candidate_name,
                    file_name,
                    SkipReason::UnsupportedType {
                        artifact_type: artifact.artifact_type().to_owned(),
                    },
                )
            }
        }
    }

    pub fn skipped(
        artifact: &Artifact,
        candidate_name: &str,
        file_name: String,
        reason: SkipReason,
    ) -> Self {
        Self {
            artifact: artifact.clone(),
            candidate_name: candidate_name.to_owned(),
            file_name,
            decision: Decision::Skip { cause: reason },
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self.decision, Decision::Place { .. })
    }

    pub fn directory(&self) -> Option<TargetDirectory> {
        match self.decision {
            Decision::Place { directory } => Some(directory),
            Decision::Skip { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.decision {
            Decision::Place { .. } => None,
            Decision::Skip { cause } => Some(cause),
        }
    }

    /// Path relative to the webapp root, e.g. `WEB-INF/lib/foo-1.0.jar`.
    pub fn target_path(&self) -> Option<PathBuf> {
        self.directory()
            .map(|dir| dir.as_path().join(&self.file_name))
    }
}

/// Two or more placed artifacts that still resolve to the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub path: PathBuf,
    pub artifacts: Vec<String>,
}

/// Outcome of the planning pass, in supplier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackagingPlan {
    placements: Vec<Placement>,
    duplicates: DuplicateSet,
    conflicts: Vec<Conflict>,
}

impl PackagingPlan {
    pub fn new(placements: Vec<Placement>, duplicates: DuplicateSet) -> Self {
        let conflicts = find_conflicts(&placements);
        Self {
            placements,
            duplicates,
            conflicts,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placed(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| p.is_included())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| !p.is_included())
    }

    pub fn duplicates(&self) -> &DuplicateSet {
        &self.duplicates
    }

    /// Paths claimed by more than one placed artifact after renaming.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }
}

fn find_conflicts(placements: &[Placement]) -> Vec<Conflict> {
    let mut by_path: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for placement in placements {
        if let Some(path) = placement.target_path() {
            by_path
                .entry(path)
                .or_default()
                .push(placement.artifact.to_string());
        }
    }

    by_path
        .into_iter()
        .filter(|(_, artifacts)| artifacts.len() > 1)
        .map(|(path, artifacts)| {
            warn!(
                path = %path.display(),
                count = artifacts.len(),
                "Several artifacts resolve to the same path; the last one copied wins"
            );
            Conflict { path, artifacts }
        })
        .collect()
}
