//! Artifact manifest loading.
//!
//! Dependency resolution happens elsewhere; a manifest is the resolved
//! artifact list handed to warpack. Both TOML and JSON are accepted:
//!
//! ```toml
//! [[artifact]]
//! coordinate = "com.x:foo:1.0:jar"
//! scope = "runtime"
//! file = "repo/com/x/foo/1.0/foo-1.0.jar"
//!
//! [[artifact]]
//! group_id = "com.y"
//! artifact_id = "taglib"
//! version = "2.0"
//! type = "tld"
//! optional = false
//! file = "/abs/path/taglib-2.0.tld"
//! ```
//!
//! Explicit fields win over the parts of `coordinate`. Relative `file` paths
//! resolve against the manifest's directory.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, instrument};

use warpack_core::{
    application::ApplicationError,
    domain::{Artifact, Scope},
    error::{WarpackError, WarpackResult},
};

/// On-disk manifest format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestDocument {
    #[serde(default, rename = "artifact")]
    artifacts: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    coordinate: Option<String>,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    classifier: Option<String>,
    #[serde(rename = "type")]
    artifact_type: Option<String>,
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
    file: PathBuf,
}

/// Reads artifact manifests into domain artifacts, preserving entry order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a manifest file.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> WarpackResult<Vec<Artifact>> {
        let content = std::fs::read_to_string(path).map_err(|e| manifest_error(path, e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let artifacts = self.parse(&content, ManifestFormat::from_path(path), base_dir, path)?;
        debug!(count = artifacts.len(), "Manifest loaded");
        Ok(artifacts)
    }

    /// Parse manifest text. `origin` only labels errors.
    pub fn parse(
        &self,
        content: &str,
        format: ManifestFormat,
        base_dir: &Path,
        origin: &Path,
    ) -> WarpackResult<Vec<Artifact>> {
        let document: ManifestDocument = match format {
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| manifest_error(origin, e))?,
            ManifestFormat::Json => {
                serde_json::from_str(content).map_err(|e| manifest_error(origin, e))?
            }
        };

        document
            .artifacts
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry_to_artifact(entry, base_dir).map_err(|reason| {
                    manifest_error(origin, format!("artifact #{}: {reason}", index + 1))
                })
            })
            .collect()
    }
}

fn entry_to_artifact(entry: ManifestEntry, base_dir: &Path) -> Result<Artifact, String> {
    let mut builder = match &entry.coordinate {
        Some(coordinate) => Artifact::parse_coordinate(coordinate).map_err(|e| e.to_string())?,
        None => Artifact::builder(),
    };

    if let Some(group_id) = entry.group_id {
        builder = builder.group_id(group_id);
    }
    if let Some(artifact_id) = entry.artifact_id {
        builder = builder.artifact_id(artifact_id);
    }
    if let Some(version) = entry.version {
        builder = builder.version(version);
    }
    if let Some(classifier) = entry.classifier {
        builder = builder.classifier(classifier);
    }
    if let Some(artifact_type) = entry.artifact_type {
        builder = builder.artifact_type(artifact_type);
    }

    let scope = entry
        .scope
        .as_deref()
        .map(Scope::from_str)
        .transpose()
        .map_err(|e| e.to_string())?;

    let file = if entry.file.is_absolute() {
        entry.file
    } else {
        base_dir.join(entry.file)
    };

    builder
        .maybe_scope(scope)
        .optional(entry.optional)
        .file(file)
        .build()
        .map_err(|e| e.to_string())
}

fn manifest_error(path: &Path, e: impl std::fmt::Display) -> WarpackError {
    ApplicationError::ManifestError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
