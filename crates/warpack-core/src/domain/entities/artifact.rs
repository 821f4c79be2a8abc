use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::Scope};

/// A resolved dependency artifact.
///
/// Immutable once built. Identity (group, artifact id, version, classifier)
/// only ever disambiguates colliding filenames; placement is driven by
/// `artifact_type`, `scope` and `optional`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    artifact_type: String,
    scope: Option<Scope>,
    optional: bool,
    file: PathBuf,
}

/// Full identity of an artifact, used to spot the same artifact listed twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    pub artifact_type: String,
}

impl Artifact {
    pub fn builder() -> ArtifactBuilder {
        ArtifactBuilder::default()
    }

    /// Parse `group:artifact:version[:type[:classifier]]` into a builder.
    ///
    /// The type defaults to `jar`. Scope, optional flag and file are left for
    /// the caller to set.
    pub fn parse_coordinate(coordinate: &str) -> Result<ArtifactBuilder, DomainError> {
        let parts: Vec<&str> = coordinate.split(':').collect();

        if !(3..=5).contains(&parts.len()) {
            return Err(DomainError::InvalidCoordinate {
                coordinate: coordinate.to_owned(),
                reason: format!("expected 3 to 5 colon-separated parts, got {}", parts.len()),
            });
        }

        if let Some(index) = parts.iter().position(|p| p.trim().is_empty()) {
            let label = match index {
                0 => "group id",
                1 => "artifact id",
                2 => "version",
                3 => "type",
                _ => "classifier",
            };
            return Err(DomainError::InvalidCoordinate {
                coordinate: coordinate.to_owned(),
                reason: format!("{label} is empty"),
            });
        }

        let mut builder = Self::builder()
            .group_id(parts[0])
            .artifact_id(parts[1])
            .version(parts[2]);
        if let Some(artifact_type) = parts.get(3) {
            builder = builder.artifact_type(*artifact_type);
        }
        if let Some(classifier) = parts.get(4) {
            builder = builder.classifier(*classifier);
        }
        Ok(builder)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Location of the resolved artifact on disk.
    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
            classifier: self.classifier.clone(),
            artifact_type: self.artifact_type.clone(),
        }
    }
}

impl fmt::Display for Artifact {
    /// Maven's `group:artifact:type[:classifier]:version[:scope]` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", self.version)?;
        if let Some(scope) = self.scope {
            write!(f, ":{scope}")?;
        }
        Ok(())
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ArtifactBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    classifier: Option<String>,
    artifact_type: Option<String>,
    scope: Option<Scope>,
    optional: bool,
    file: Option<PathBuf>,
}

impl ArtifactBuilder {
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn artifact_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn maybe_scope(mut self, scope: Option<Scope>) -> Self {
        self.scope = scope;
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Build the artifact.
    ///
    /// The type defaults to `jar` and the file to an empty path. Empty
    /// identity fields and an explicitly empty type are rejected.
    pub fn build(self) -> Result<Artifact, DomainError> {
        let group_id = required(self.group_id, "group_id")?;
        let artifact_id = required(self.artifact_id, "artifact_id")?;
        let version = required(self.version, "version")?;
        let artifact_type = required(
            Some(self.artifact_type.unwrap_or_else(|| "jar".to_owned())),
            "type",
        )?;

        Ok(Artifact {
            group_id,
            artifact_id,
            version,
            classifier: self.classifier.filter(|c| !c.trim().is_empty()),
            artifact_type,
            scope: self.scope,
            optional: self.optional,
            file: self.file.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(DomainError::MissingRequiredField { field })
}
