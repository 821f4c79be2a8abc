//! Packaging runs wired with the real adapters over an in-memory filesystem.

use std::path::{Path, PathBuf};

use warpack_adapters::{
    ManifestFormat, ManifestLoader, MavenFinalNames, MemoryFilesystem, RuntimeScopeFilter,
};
use warpack_core::prelude::*;

const MANIFEST: &str = r#"
[[artifact]]
coordinate = "com.a:util:1.0"
scope = "compile"
file = "repo/com/a/util-1.0.jar"

[[artifact]]
coordinate = "com.b:util:1.0"
file = "repo/com/b/util-1.0.jar"

[[artifact]]
coordinate = "javax.servlet:servlet-api:3.1"
scope = "provided"
file = "repo/servlet-api-3.1.jar"

[[artifact]]
coordinate = "com.x:model:2.0:par"
scope = "runtime"
file = "repo/model-2.0.par"

[[artifact]]
coordinate = "com.x:tags:2.0:tld"
file = "repo/tags-2.0.tld"

[[artifact]]
coordinate = "com.x:remote:1.0:aar"
optional = true
file = "repo/remote-1.0.aar"
"#;

fn artifacts() -> Vec<Artifact> {
    parse(MANIFEST)
}

fn parse(manifest: &str) -> Vec<Artifact> {
    ManifestLoader::new()
        .parse(
            manifest,
            ManifestFormat::Toml,
            Path::new("/build"),
            Path::new("/build/artifacts.toml"),
        )
        .unwrap()
}

fn service(fs: &MemoryFilesystem) -> PackagingService {
    PackagingService::new(
        Box::new(MavenFinalNames::new()),
        Box::new(RuntimeScopeFilter::new()),
        Box::new(fs.clone()),
    )
}

#[test]
fn package_writes_expected_tree() {
    let fs = MemoryFilesystem::new();
    let report = service(&fs).package(&artifacts(), "/webapp").unwrap();

    assert_eq!(report.copied_count(), 4);
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("/webapp/WEB-INF/lib/com.a-util-1.0.jar"),
            PathBuf::from("/webapp/WEB-INF/lib/com.b-util-1.0.jar"),
            PathBuf::from("/webapp/WEB-INF/lib/model-2.0.jar"),
            PathBuf::from("/webapp/WEB-INF/tld/tags-2.0.tld"),
        ]
    );
    assert_eq!(
        fs.copied_from(Path::new("/webapp/WEB-INF/lib/model-2.0.jar")),
        Some(PathBuf::from("/build/repo/model-2.0.par"))
    );
    assert!(!fs.exists(Path::new("/webapp/WEB-INF/services")));
}

#[test]
fn skip_reasons_follow_inclusion_rules() {
    let fs = MemoryFilesystem::new();
    let plan = service(&fs).plan(&artifacts());

    let reasons: Vec<_> = plan
        .skipped()
        .map(|p| (p.artifact.artifact_id().to_owned(), p.skip_reason().cloned()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            ("servlet-api".to_owned(), Some(SkipReason::NotRuntimeScoped)),
            ("remote".to_owned(), Some(SkipReason::Optional)),
        ]
    );
    assert!(fs.list_files().is_empty());
}

#[test]
fn first_copy_failure_stops_the_run() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/webapp/WEB-INF/lib/com.b-util-1.0.jar");

    let err = service(&fs).package(&artifacts(), "/webapp").unwrap_err();

    assert!(err.to_string().contains("com.b:util:jar:1.0"), "{err}");
    assert_eq!(
        fs.list_files(),
        vec![PathBuf::from("/webapp/WEB-INF/lib/com.a-util-1.0.jar")]
    );
}

#[test]
fn runtime_listing_ships_after_a_test_scoped_one() {
    let fs = MemoryFilesystem::new();
    let artifacts = parse(
        r#"
        [[artifact]]
        coordinate = "com.x:foo:1.0"
        scope = "test"
        file = "repo/foo-1.0.jar"

        [[artifact]]
        coordinate = "com.x:foo:1.0"
        scope = "runtime"
        file = "repo/foo-1.0.jar"
        "#,
    );

    let report = service(&fs).package(&artifacts, "/webapp").unwrap();

    assert_eq!(report.copied_count(), 1);
    assert_eq!(
        fs.list_files(),
        vec![PathBuf::from("/webapp/WEB-INF/lib/foo-1.0.jar")]
    );
}

#[test]
fn renamed_par_keeps_a_single_jar_extension() {
    let fs = MemoryFilesystem::new();
    let artifacts = parse(
        r#"
        [[artifact]]
        coordinate = "com.x:model:2.0:par"
        file = "repo/com/x/model-2.0.par"

        [[artifact]]
        coordinate = "org.y:model:2.0:par"
        file = "repo/org/y/model-2.0.par"
        "#,
    );

    service(&fs).package(&artifacts, "/webapp").unwrap();

    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("/webapp/WEB-INF/lib/com.x-model-2.0.jar"),
            PathBuf::from("/webapp/WEB-INF/lib/org.y-model-2.0.jar"),
        ]
    );
}
