//! Packaging rule registry: which artifact types go where.
//!
//! # Adding a type
//!
//! Append a `PackagingRule` to [`PACKAGING_RULES`]. Nothing else changes;
//! any type without a rule is skipped as unsupported.

use crate::domain::value_objects::{FilenameTransform, TargetDirectory};

/// Placement rule for one artifact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackagingRule {
    /// Artifact type tag, matched exactly.
    pub artifact_type: &'static str,
    pub directory: TargetDirectory,
    pub transform: FilenameTransform,
}

pub static PACKAGING_RULES: &[PackagingRule] = &[
    PackagingRule {
        artifact_type: "tld",
        directory: TargetDirectory::Tld,
        transform: FilenameTransform::Keep,
    },
    PackagingRule {
        artifact_type: "aar",
        directory: TargetDirectory::Services,
        transform: FilenameTransform::Keep,
    },
    PackagingRule {
        artifact_type: "jar",
        directory: TargetDirectory::Lib,
        transform: FilenameTransform::Keep,
    },
    PackagingRule {
        artifact_type: "ejb",
        directory: TargetDirectory::Lib,
        transform: FilenameTransform::Keep,
    },
    PackagingRule {
        artifact_type: "ejb-client",
        directory: TargetDirectory::Lib,
        transform: FilenameTransform::Keep,
    },
    PackagingRule {
        artifact_type: "test-jar",
        directory: TargetDirectory::Lib,
        transform: FilenameTransform::Keep,
    },
    PackagingRule {
        artifact_type: "par",
        directory: TargetDirectory::Lib,
        transform: FilenameTransform::ReplaceExtensionWithJar,
    },
];

/// Look up the rule for an artifact type.
pub fn rule_for(artifact_type: &str) -> Option<&'static PackagingRule> {
    PACKAGING_RULES
        .iter()
        .find(|rule| rule.artifact_type == artifact_type)
}

/// All supported type tags, in registry order.
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    PACKAGING_RULES.iter().map(|rule| rule.artifact_type)
}
