//! Packaging Service - main application orchestrator.
//!
//! This service coordinates one packaging run:
//! 1. Drop repeated artifacts (per `DuplicatePolicy`)
//! 2. Collision pass: candidate names for every artifact, duplicate set
//! 3. Placement pass: inclusion, renaming, type dispatch
//! 4. Copy every placed artifact into the webapp tree
//!
//! Steps 1 to 3 are pure and exposed as [`PackagingService::plan`].

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{FinalNameProvider, Filesystem, ScopeFilter},
    },
    domain::{
        Artifact, ArtifactKey, DuplicatePolicy, DuplicateSet, PackagingPlan, Placement,
        SkipReason, TargetDirectory,
    },
    error::{WarpackError, WarpackResult},
};

/// Result of a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingReport {
    pub webapp_dir: PathBuf,
    pub plan: PackagingPlan,
    /// Files written, in copy order.
    pub written: Vec<PathBuf>,
}

impl PackagingReport {
    pub fn copied_count(&self) -> usize {
        self.written.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.plan.skipped_count()
    }
}

/// Artifact placement service.
///
/// Holds no state between runs; every call recomputes the duplicate set.
pub struct PackagingService {
    final_names: Box<dyn FinalNameProvider>,
    scope_filter: Box<dyn ScopeFilter>,
    filesystem: Box<dyn Filesystem>,
    policy: DuplicatePolicy,
}

impl PackagingService {
    /// Create a new packaging service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use warpack_core::application::{PackagingService, ports::*};
    ///
    /// let service = PackagingService::new(
    ///     final_names,  // impl FinalNameProvider
    ///     scope_filter, // impl ScopeFilter
    ///     filesystem,   // impl Filesystem
    /// );
    /// ```
    pub fn new(
        final_names: Box<dyn FinalNameProvider>,
        scope_filter: Box<dyn ScopeFilter>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            final_names,
            scope_filter,
            filesystem,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Compute placement decisions without touching the filesystem.
    #[instrument(skip_all, fields(artifacts = artifacts.len(), policy = %self.policy))]
    pub fn plan(&self, artifacts: &[Artifact]) -> PackagingPlan {
        let runtime_visible: Vec<bool> = artifacts
            .iter()
            .map(|artifact| self.scope_filter.includes(artifact))
            .collect();
        let repeated = self.repeated_indices(artifacts, &runtime_visible);

        // Collision pass.
        let candidates: Vec<Option<String>> = artifacts
            .iter()
            .enumerate()
            .map(|(index, artifact)| {
                (!repeated.contains(&index)).then(|| self.final_names.final_name(artifact))
            })
            .collect();
        let duplicates = DuplicateSet::from_names(candidates.iter().flatten());

        // Placement pass.
        let placements = artifacts
            .iter()
            .zip(&candidates)
            .zip(&runtime_visible)
            .map(|((artifact, candidate), &visible)| match candidate {
                Some(name) => Placement::decide(artifact, name, &duplicates, visible),
                None => {
                    let name = self.final_names.final_name(artifact);
                    debug!(
                        artifact = %artifact,
                        "Identical artifact listed more than once, ignoring"
                    );
                    Placement::skipped(artifact, &name, name.clone(), SkipReason::DuplicateArtifact)
                }
            })
            .collect();

        let plan = PackagingPlan::new(placements, duplicates);
        info!(
            placed = plan.placed_count(),
            skipped = plan.skipped_count(),
            duplicates = plan.duplicates().len(),
            "Packaging plan computed"
        );
        plan
    }

    /// Place every included artifact under `webapp_dir`.
    ///
    /// The first copy failure aborts the run; files already written stay.
    #[instrument(
        skip_all,
        fields(artifacts = artifacts.len(), webapp_dir = %webapp_dir.as_ref().display())
    )]
    pub fn package(
        &self,
        artifacts: &[Artifact],
        webapp_dir: impl AsRef<Path>,
    ) -> WarpackResult<PackagingReport> {
        let webapp_dir = webapp_dir.as_ref();
        let plan = self.plan(artifacts);

        let mut created: BTreeSet<TargetDirectory> = BTreeSet::new();
        let mut written = Vec::with_capacity(plan.placed_count());

        for placement in plan.placed() {
            let Some(directory) = placement.directory() else {
                continue;
            };
            let target_dir = webapp_dir.join(directory.as_path());
            let target = target_dir.join(&placement.file_name);

            if created.insert(directory) {
                self.filesystem
                    .create_dir_all(&target_dir)
                    .map_err(|e| copy_failed(&placement.artifact, &target, e))?;
            }

            self.filesystem
                .copy_file(placement.artifact.file(), &target)
                .map_err(|e| copy_failed(&placement.artifact, &target, e))?;

            debug!(artifact = %placement.artifact, target = %target.display(), "Copied");
            written.push(target);
        }

        info!(copied = written.len(), "Packaging completed");
        Ok(PackagingReport {
            webapp_dir: webapp_dir.to_path_buf(),
            plan,
            written,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Indices of artifacts that repeat another artifact's coordinates.
    ///
    /// For each key the first occurrence that ships is kept. When no
    /// occurrence ships, the first one is kept.
    fn repeated_indices(
        &self,
        artifacts: &[Artifact],
        runtime_visible: &[bool],
    ) -> HashSet<usize> {
        if self.policy == DuplicatePolicy::KeepAll {
            return HashSet::new();
        }

        let ships = |index: usize| !artifacts[index].is_optional() && runtime_visible[index];
        let mut kept: HashMap<ArtifactKey, usize> = HashMap::new();
        for (index, artifact) in artifacts.iter().enumerate() {
            match kept.entry(artifact.key()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(mut slot) => {
                    if !ships(*slot.get()) && ships(index) {
                        slot.insert(index);
                    }
                }
            }
        }

        let kept: HashSet<usize> = kept.into_values().collect();
        (0..artifacts.len()).filter(|index| !kept.contains(index)).collect()
    }
}

fn copy_failed(artifact: &Artifact, target: &Path, cause: WarpackError) -> WarpackError {
    ApplicationError::CopyFailed {
        artifact: artifact.to_string(),
        target: target.to_path_buf(),
        source: Box::new(cause),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockFinalNameProvider, MockScopeFilter};
    use crate::domain::{Scope, TargetDirectory};
    use crate::error::WarpackError;

    // ── fixtures ──────────────────────────────────────────────────────────────

    fn artifact(group: &str, id: &str, kind: &str, scope: Scope) -> Artifact {
        Artifact::builder()
            .group_id(group)
            .artifact_id(id)
            .version("1.0")
            .artifact_type(kind)
            .scope(scope)
            .file(format!("/repo/{group}/{id}-1.0.{kind}"))
            .build()
            .unwrap()
    }

    /// `artifactId-version.type`, like the Maven default for these types.
    fn final_names() -> Box<MockFinalNameProvider> {
        let mut mock = MockFinalNameProvider::new();
        mock.expect_final_name().returning(|a| {
            format!("{}-{}.{}", a.artifact_id(), a.version(), a.artifact_type())
        });
        Box::new(mock)
    }

    fn runtime_scope() -> Box<MockScopeFilter> {
        let mut mock = MockScopeFilter::new();
        mock.expect_includes().returning(|a| {
            matches!(a.scope(), None | Some(Scope::Compile) | Some(Scope::Runtime))
        });
        Box::new(mock)
    }

    /// Filesystem double recording copies (destination -> source).
    fn recording_fs() -> (Box<MockFilesystem>, Arc<Mutex<HashMap<PathBuf, PathBuf>>>) {
        let copies = Arc::new(Mutex::new(HashMap::new()));
        let sink = Arc::clone(&copies);
        let mut mock = MockFilesystem::new();
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_copy_file().returning(move |src, dest| {
            sink.lock()
                .unwrap()
                .insert(dest.to_path_buf(), src.to_path_buf());
            Ok(())
        });
        (Box::new(mock), copies)
    }

    fn service(fs: Box<MockFilesystem>) -> PackagingService {
        PackagingService::new(final_names(), runtime_scope(), fs)
    }

    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a debug-level subscriber and return what it logged.
    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || LogSink(Arc::clone(&sink)))
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    // ── scenarios ─────────────────────────────────────────────────────────────

    #[test]
    fn colliding_jars_are_prefixed_with_their_group() {
        let (fs, copies) = recording_fs();
        let a = artifact("com.x", "foo", "jar", Scope::Runtime);
        let b = artifact("com.y", "foo", "jar", Scope::Runtime);

        let report = service(fs).package(&[a, b], "/out").unwrap();

        assert_eq!(
            report.plan.duplicates().iter().collect::<Vec<_>>(),
            vec!["foo-1.0.jar"]
        );
        let copies = copies.lock().unwrap();
        assert_eq!(
            copies.get(Path::new("/out/WEB-INF/lib/com.x-foo-1.0.jar")),
            Some(&PathBuf::from("/repo/com.x/foo-1.0.jar"))
        );
        assert_eq!(
            copies.get(Path::new("/out/WEB-INF/lib/com.y-foo-1.0.jar")),
            Some(&PathBuf::from("/repo/com.y/foo-1.0.jar"))
        );
        assert_eq!(copies.len(), 2);
    }

    #[test]
    fn tag_library_goes_to_tld_directory() {
        let (fs, copies) = recording_fs();
        let c = artifact("org.c", "c", "tld", Scope::Runtime);

        service(fs).package(&[c], "/out").unwrap();

        assert!(
            copies
                .lock()
                .unwrap()
                .contains_key(Path::new("/out/WEB-INF/tld/c-1.0.tld"))
        );
    }

    #[test]
    fn unsupported_type_is_skipped_without_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_copy_file().never();

        let d = artifact("org.d", "d", "war", Scope::Compile);
        let report = service(Box::new(fs)).package(&[d], "/out").unwrap();

        assert_eq!(report.copied_count(), 0);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(
            report.plan.placements()[0].skip_reason(),
            Some(&SkipReason::UnsupportedType {
                artifact_type: "war".into()
            })
        );
    }

    #[test]
    fn par_is_converted_to_jar_in_lib() {
        let (fs, copies) = recording_fs();
        let e = artifact("org.e", "e", "par", Scope::Runtime);

        service(fs).package(&[e], "/out").unwrap();

        let copies = copies.lock().unwrap();
        assert!(copies.contains_key(Path::new("/out/WEB-INF/lib/e-1.0.jar")));
        assert_eq!(copies.len(), 1);
    }

    // ── diagnostics ───────────────────────────────────────────────────────────

    #[test]
    fn unsupported_type_logs_exactly_one_diagnostic() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_copy_file().never();
        let svc = service(Box::new(fs));
        let d = artifact("org.d", "d", "war", Scope::Compile);

        let logs = captured_logs(|| {
            let report = svc.package(&[d], "/out").unwrap();
            assert_eq!(report.copied_count(), 0);
        });

        let unsupported: Vec<&str> = logs
            .lines()
            .filter(|line| line.contains("is not supported"))
            .collect();
        assert_eq!(unsupported.len(), 1, "{logs}");
        assert!(unsupported[0].contains("type[war]"), "{logs}");
        assert!(unsupported[0].contains("org.d:d:war:1.0"), "{logs}");
    }

    #[test]
    fn collisions_log_the_duplicate_and_each_rename() {
        let (fs, _) = recording_fs();
        let svc = service(fs);
        let artifacts = [
            artifact("com.x", "foo", "jar", Scope::Runtime),
            artifact("com.y", "foo", "jar", Scope::Runtime),
        ];

        let logs = captured_logs(|| {
            svc.plan(&artifacts);
        });

        let found = logs.lines().filter(|line| line.contains("Duplicate found"));
        assert_eq!(found.count(), 1, "{logs}");
        let renames: Vec<&str> = logs
            .lines()
            .filter(|line| line.contains("Renamed to"))
            .collect();
        assert_eq!(renames.len(), 2, "{logs}");
        assert!(renames[0].contains("com.x-foo-1.0.jar"), "{logs}");
        assert!(renames[1].contains("com.y-foo-1.0.jar"), "{logs}");
    }

    // ── inclusion ─────────────────────────────────────────────────────────────

    #[test]
    fn optional_artifact_is_never_copied_but_still_collides() {
        let (fs, copies) = recording_fs();
        let kept = artifact("com.x", "foo", "jar", Scope::Runtime);
        let optional = Artifact::builder()
            .group_id("com.y")
            .artifact_id("foo")
            .version("1.0")
            .scope(Scope::Runtime)
            .optional(true)
            .file("/repo/com.y/foo-1.0.jar")
            .build()
            .unwrap();

        let report = service(fs).package(&[kept, optional], "/out").unwrap();

        let copies = copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        assert!(copies.contains_key(Path::new("/out/WEB-INF/lib/com.x-foo-1.0.jar")));
        assert_eq!(
            report.plan.placements()[1].skip_reason(),
            Some(&SkipReason::Optional)
        );
    }

    #[test]
    fn excluded_scope_still_forces_rename() {
        let (fs, copies) = recording_fs();
        let provided = artifact("javax.servlet", "api", "jar", Scope::Provided);
        let runtime = artifact("org.acme", "api", "jar", Scope::Compile);

        service(fs).package(&[provided, runtime], "/out").unwrap();

        let copies = copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        assert!(copies.contains_key(Path::new("/out/WEB-INF/lib/org.acme-api-1.0.jar")));
    }

    #[test]
    fn test_scoped_artifacts_are_left_out() {
        let (fs, copies) = recording_fs();
        let t = artifact("org.junit", "junit", "jar", Scope::Test);

        let report = service(fs).package(&[t], "/out").unwrap();

        assert!(copies.lock().unwrap().is_empty());
        assert_eq!(
            report.plan.placements()[0].skip_reason(),
            Some(&SkipReason::NotRuntimeScoped)
        );
    }

    // ── determinism ───────────────────────────────────────────────────────────

    #[test]
    fn planning_twice_gives_identical_plans() {
        let (fs, _) = recording_fs();
        let svc = service(fs);
        let artifacts = vec![
            artifact("com.x", "foo", "jar", Scope::Runtime),
            artifact("com.y", "foo", "jar", Scope::Runtime),
            artifact("com.z", "bar", "ejb", Scope::Compile),
        ];

        assert_eq!(svc.plan(&artifacts), svc.plan(&artifacts));
    }

    #[test]
    fn duplicate_set_does_not_depend_on_order() {
        let (fs, _) = recording_fs();
        let svc = service(fs);
        let mut artifacts = vec![
            artifact("com.x", "foo", "jar", Scope::Runtime),
            artifact("com.y", "bar", "jar", Scope::Runtime),
            artifact("com.y", "foo", "jar", Scope::Runtime),
            artifact("com.z", "bar", "jar", Scope::Test),
        ];

        let forward = svc.plan(&artifacts).duplicates().clone();
        artifacts.reverse();
        let backward = svc.plan(&artifacts).duplicates().clone();

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 2);
    }

    // ── identical artifacts ───────────────────────────────────────────────────

    #[test]
    fn identical_artifacts_are_deduplicated_by_default() {
        let (fs, copies) = recording_fs();
        let a = artifact("com.x", "foo", "jar", Scope::Runtime);

        let report = service(fs).package(&[a.clone(), a], "/out").unwrap();

        assert!(report.plan.duplicates().is_empty());
        assert_eq!(
            report.plan.placements()[1].skip_reason(),
            Some(&SkipReason::DuplicateArtifact)
        );
        let copies = copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        assert!(copies.contains_key(Path::new("/out/WEB-INF/lib/foo-1.0.jar")));
    }

    #[test]
    fn keep_all_renames_identical_artifacts_to_the_same_name() {
        let (fs, _) = recording_fs();
        let a = artifact("com.x", "foo", "jar", Scope::Runtime);

        let plan = service(fs)
            .with_policy(DuplicatePolicy::KeepAll)
            .plan(&[a.clone(), a]);

        assert!(plan.duplicates().contains("foo-1.0.jar"));
        assert_eq!(plan.placed_count(), 2);
        assert_eq!(plan.conflicts().len(), 1);
        assert_eq!(
            plan.conflicts()[0].path,
            Path::new("WEB-INF/lib/com.x-foo-1.0.jar")
        );
    }

    #[test]
    fn runtime_copy_ships_when_an_earlier_copy_is_test_scoped() {
        let (fs, copies) = recording_fs();
        let test_scoped = artifact("com.x", "foo", "jar", Scope::Test);
        let runtime = artifact("com.x", "foo", "jar", Scope::Runtime);

        let report = service(fs).package(&[test_scoped, runtime], "/out").unwrap();

        assert!(report.plan.duplicates().is_empty());
        assert_eq!(
            report.plan.placements()[0].skip_reason(),
            Some(&SkipReason::DuplicateArtifact)
        );
        assert_eq!(
            report.plan.placements()[1].directory(),
            Some(TargetDirectory::Lib)
        );
        let copies = copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        assert!(copies.contains_key(Path::new("/out/WEB-INF/lib/foo-1.0.jar")));
    }

    #[test]
    fn required_copy_ships_when_an_earlier_copy_is_optional() {
        let (fs, copies) = recording_fs();
        let optional = Artifact::builder()
            .group_id("com.x")
            .artifact_id("foo")
            .version("1.0")
            .scope(Scope::Runtime)
            .optional(true)
            .file("/repo/com.x/foo-1.0.jar")
            .build()
            .unwrap();
        let required = artifact("com.x", "foo", "jar", Scope::Compile);

        let report = service(fs).package(&[optional, required], "/out").unwrap();

        assert_eq!(report.copied_count(), 1);
        assert!(
            copies
                .lock()
                .unwrap()
                .contains_key(Path::new("/out/WEB-INF/lib/foo-1.0.jar"))
        );
    }

    #[test]
    fn excluded_repeats_keep_the_first_occurrence() {
        let (fs, _) = recording_fs();
        let a = artifact("com.x", "foo", "jar", Scope::Test);

        let plan = service(fs).plan(&[a.clone(), a]);

        assert_eq!(plan.placed_count(), 0);
        assert_eq!(
            plan.placements()[0].skip_reason(),
            Some(&SkipReason::NotRuntimeScoped)
        );
        assert_eq!(
            plan.placements()[1].skip_reason(),
            Some(&SkipReason::DuplicateArtifact)
        );
    }

    // ── failures ──────────────────────────────────────────────────────────────

    #[test]
    fn first_copy_failure_aborts_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_copy_file().times(1).returning(|_, dest| {
            Err(ApplicationError::FilesystemError {
                path: dest.to_path_buf(),
                reason: "No space left on device".into(),
            }
            .into())
        });

        let artifacts = vec![
            artifact("com.x", "first", "jar", Scope::Runtime),
            artifact("com.x", "second", "jar", Scope::Runtime),
        ];
        let err = service(Box::new(fs))
            .package(&artifacts, "/out")
            .unwrap_err();

        match &err {
            WarpackError::Application(ApplicationError::CopyFailed {
                artifact,
                target,
                source,
            }) => {
                assert_eq!(artifact, "com.x:first:jar:1.0:runtime");
                assert_eq!(target, Path::new("/out/WEB-INF/lib/first-1.0.jar"));
                assert!(matches!(
                    **source,
                    WarpackError::Application(ApplicationError::FilesystemError { .. })
                ));
                let cause = std::error::Error::source(&err)
                    .and_then(|copy_failure| std::error::Error::source(copy_failure))
                    .map(ToString::to_string);
                assert!(cause.is_some_and(|c| c.contains("No space left")), "{err}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directories_are_created_once_each() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/out/WEB-INF/lib"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/out/WEB-INF/tld"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_copy_file().times(3).returning(|_, _| Ok(()));

        let artifacts = vec![
            artifact("g", "a", "jar", Scope::Runtime),
            artifact("g", "b", "ejb-client", Scope::Runtime),
            artifact("g", "c", "tld", Scope::Runtime),
        ];
        let report = service(Box::new(fs)).package(&artifacts, "/out").unwrap();

        assert_eq!(report.copied_count(), 3);
        assert_eq!(
            report.plan.placements()[2].directory(),
            Some(TargetDirectory::Tld)
        );
    }
}
