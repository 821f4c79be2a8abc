//! Command handlers, one module per subcommand.
//!
//! Handlers translate CLI arguments into service calls and display results.
//! No placement logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod package;
pub mod plan;

use std::path::Path;

use warpack_adapters::{LocalFilesystem, ManifestLoader, MavenFinalNames, RuntimeScopeFilter};
use warpack_core::{
    application::PackagingService,
    domain::{Artifact, Decision, DuplicatePolicy, PackagingPlan},
};

use crate::{
    cli::{DuplicatePolicyArg, PlanFormat},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Read a manifest, reporting a missing file as a not-found error.
pub(crate) fn load_manifest(path: &Path) -> CliResult<Vec<Artifact>> {
    if !path.is_file() {
        return Err(CliError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(ManifestLoader::new().load(path)?)
}

/// The `--duplicates` flag wins over the configured policy.
pub(crate) fn resolve_policy(
    flag: Option<DuplicatePolicyArg>,
    configured: DuplicatePolicy,
) -> DuplicatePolicy {
    flag.map_or(configured, DuplicatePolicy::from)
}

/// Production wiring: Maven names, runtime scope, local disk.
pub(crate) fn build_service(policy: DuplicatePolicy) -> PackagingService {
    PackagingService::new(
        Box::new(MavenFinalNames::new()),
        Box::new(RuntimeScopeFilter::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_policy(policy)
}

/// Print a plan in the requested format.
pub(crate) fn render_plan(
    plan: &PackagingPlan,
    format: PlanFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        PlanFormat::Json => {
            let json = serde_json::to_string_pretty(plan)
                .with_cli_context(|| "Failed to serialise packaging plan")?;
            output.data(&json)?;
        }

        PlanFormat::List => {
            for path in plan.placed().filter_map(|p| p.target_path()) {
                output.data(&path.display().to_string())?;
            }
        }

        PlanFormat::Table => {
            output.header(&format!(
                "Packaging plan: {} placed, {} skipped",
                plan.placed_count(),
                plan.skipped_count()
            ))?;
            for placement in plan.placements() {
                match &placement.decision {
                    Decision::Place { .. } => {
                        let target = placement
                            .target_path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_default();
                        output.print(&format!("  + {target:<48} {}", placement.artifact))?;
                    }
                    Decision::Skip { cause } => {
                        output.dim(&format!(
                            "  - {:<48} {}",
                            format!("({cause})"),
                            placement.artifact
                        ))?;
                    }
                }
            }

            if !plan.duplicates().is_empty() {
                let names: Vec<&str> = plan.duplicates().iter().collect();
                output.info(&format!(
                    "Renamed with group prefix: {}",
                    names.join(", ")
                ))?;
            }
            for conflict in plan.conflicts() {
                output.warning(&format!(
                    "{} is written by {}",
                    conflict.path.display(),
                    conflict.artifacts.join(" and ")
                ))?;
            }
        }
    }

    Ok(())
}
