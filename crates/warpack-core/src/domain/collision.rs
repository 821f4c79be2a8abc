//! Filename collision detection.
//!
//! The scan is purely name based: two artifacts collide when their candidate
//! filenames are equal, whatever their type, scope or optional flag. An
//! artifact that will never be copied still forces its partner to be renamed.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::Artifact;

/// Candidate filenames claimed by more than one artifact in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DuplicateSet {
    names: BTreeSet<String>,
}

impl DuplicateSet {
    /// Build the set from candidate names in supplier order.
    ///
    /// A name is recorded once no matter how many artifacts claim it.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name.to_owned()) && duplicates.insert(name.to_owned()) {
                debug!(file_name = %name, "Duplicate found");
            }
        }

        Self { names: duplicates }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Duplicate names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Filename to use for `artifact`: `file_name` itself, or
    /// `"{group_id}-{file_name}"` when `candidate` collides.
    ///
    /// `file_name` is the candidate after the type's filename transform;
    /// the collision check always uses the untransformed candidate.
    pub fn disambiguate(&self, artifact: &Artifact, candidate: &str, file_name: &str) -> String {
        if !self.contains(candidate) {
            return file_name.to_owned();
        }

        let renamed = format!("{}-{}", artifact.group_id(), file_name);
        debug!(candidate = %candidate, renamed = %renamed, "Renamed to");
        renamed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(group: &str) -> Artifact {
        Artifact::builder()
            .group_id(group)
            .artifact_id("foo")
            .version("1.0")
            .build()
            .unwrap()
    }

    #[test]
    fn unique_names_produce_empty_set() {
        let set = DuplicateSet::from_names(["a-1.0.jar", "b-1.0.jar", "c-1.0.tld"]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn shared_name_is_reported_once() {
        let set = DuplicateSet::from_names(["foo-1.0.jar", "foo-1.0.jar", "foo-1.0.jar", "x.jar"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["foo-1.0.jar"]);
    }

    #[test]
    fn set_is_independent_of_iteration_order() {
        let names = ["b.jar", "a.jar", "c.jar", "a.jar", "b.jar", "d.jar"];
        let forward = DuplicateSet::from_names(names);

        let mut reversed = names;
        reversed.reverse();
        let backward = DuplicateSet::from_names(reversed);

        let mut rotated = names;
        rotated.rotate_left(2);
        let shifted = DuplicateSet::from_names(rotated);

        assert_eq!(forward, backward);
        assert_eq!(forward, shifted);
        assert!(forward.contains("a.jar"));
        assert!(forward.contains("b.jar"));
        assert!(!forward.contains("c.jar"));
    }

    #[test]
    fn disambiguate_prefixes_group_for_colliding_names() {
        let set = DuplicateSet::from_names(["foo-1.0.jar", "foo-1.0.jar"]);
        assert_eq!(
            set.disambiguate(&artifact("com.x"), "foo-1.0.jar", "foo-1.0.jar"),
            "com.x-foo-1.0.jar"
        );
        assert_eq!(
            set.disambiguate(&artifact("com.y"), "foo-1.0.jar", "foo-1.0.jar"),
            "com.y-foo-1.0.jar"
        );
    }

    #[test]
    fn disambiguate_keeps_unique_names() {
        let set = DuplicateSet::from_names(["foo-1.0.jar"]);
        assert_eq!(
            set.disambiguate(&artifact("com.x"), "foo-1.0.jar", "foo-1.0.jar"),
            "foo-1.0.jar"
        );
    }

    #[test]
    fn disambiguate_checks_candidate_but_prefixes_file_name() {
        let set = DuplicateSet::from_names(["foo-1.0.par", "foo-1.0.par"]);
        assert_eq!(
            set.disambiguate(&artifact("com.x"), "foo-1.0.par", "foo-1.0.jar"),
            "com.x-foo-1.0.jar"
        );
        assert_eq!(
            set.disambiguate(&artifact("com.x"), "foo-1.0.jar", "foo-1.0.jar"),
            "foo-1.0.jar"
        );
    }

    #[test]
    fn serializes_as_plain_list() {
        let set = DuplicateSet::from_names(["b.jar", "b.jar", "a.jar", "a.jar"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["a.jar","b.jar"]"#);
    }
}
