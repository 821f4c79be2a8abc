//! Domain value objects: Scope, TargetDirectory, FilenameTransform, DuplicatePolicy.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO dispatch logic. Which artifact type lands where lives in
//! `rules.rs`. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── Scope ────────────────────────────────────────────────────────────────────

/// Dependency scope as declared by the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl Scope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::System => "system",
            Self::Import => "import",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compile" => Ok(Self::Compile),
            "provided" => Ok(Self::Provided),
            "runtime" => Ok(Self::Runtime),
            "test" => Ok(Self::Test),
            "system" => Ok(Self::System),
            "import" => Ok(Self::Import),
            other => Err(DomainError::UnknownScope(other.to_owned())),
        }
    }
}

// ── TargetDirectory ──────────────────────────────────────────────────────────

/// A directory of the web-application tree that receives artifacts.
///
/// The paths are fixed; containers look for libraries, tag libraries and
/// service archives at exactly these locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetDirectory {
    #[serde(rename = "WEB-INF/lib")]
    Lib,
    #[serde(rename = "WEB-INF/tld")]
    Tld,
    #[serde(rename = "WEB-INF/services")]
    Services,
}

impl TargetDirectory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lib => "WEB-INF/lib",
            Self::Tld => "WEB-INF/tld",
            Self::Services => "WEB-INF/services",
        }
    }

    /// Relative path of this directory inside the webapp root.
    pub fn as_path(&self) -> &'static Path {
        Path::new(self.as_str())
    }
}

impl fmt::Display for TargetDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FilenameTransform ────────────────────────────────────────────────────────

/// Rewrite applied to the candidate filename, before any group prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilenameTransform {
    /// Use the filename as is.
    Keep,
    /// Replace everything from the last `.` with `.jar`; a name without a
    /// `.` gets `.jar` appended.
    ReplaceExtensionWithJar,
}

impl FilenameTransform {
    pub fn apply(self, file_name: &str) -> String {
        match self {
            Self::Keep => file_name.to_owned(),
            Self::ReplaceExtensionWithJar => {
                let stem = file_name
                    .rfind('.')
                    .map_or(file_name, |dot| &file_name[..dot]);
                format!("{stem}.jar")
            }
        }
    }
}

// ── DuplicatePolicy ──────────────────────────────────────────────────────────

/// How artifacts with the exact same coordinates are treated.
///
/// With `KeepAll` two identical artifacts both receive the same group prefix
/// and the second copy overwrites the first. `DedupeIdentical` drops every
/// later occurrence before the collision scan runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    KeepAll,
    #[default]
    DedupeIdentical,
}

impl DuplicatePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeepAll => "keep-all",
            Self::DedupeIdentical => "dedupe-identical",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keep-all" | "keep_all" | "keep" => Ok(Self::KeepAll),
            "dedupe-identical" | "dedupe_identical" | "dedupe" => Ok(Self::DedupeIdentical),
            other => Err(DomainError::UnknownDuplicatePolicy(other.to_owned())),
        }
    }
}
