//! Maven-style final filenames.

use warpack_core::{application::ports::FinalNameProvider, domain::Artifact};

/// `artifactId-version[-classifier].extension`, the layout Maven uses for
/// files in a local repository.
///
/// The extension comes from the artifact type's handler: the jar-packaged
/// types map to `jar`, every other type is its own extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenFinalNames;

impl MavenFinalNames {
    pub fn new() -> Self {
        Self
    }

    /// File extension for an artifact type.
    pub fn extension_for(artifact_type: &str) -> &str {
        match artifact_type {
            "jar" | "ejb" | "ejb-client" | "test-jar" | "maven-plugin" | "java-source"
            | "javadoc" => "jar",
            other => other,
        }
    }
}

impl FinalNameProvider for MavenFinalNames {
    fn final_name(&self, artifact: &Artifact) -> String {
        let extension = Self::extension_for(artifact.artifact_type());
        match artifact.classifier() {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                artifact.artifact_id(),
                artifact.version(),
                classifier,
                extension
            ),
            None => format!(
                "{}-{}.{}",
                artifact.artifact_id(),
                artifact.version(),
                extension
            ),
        }
    }
}
