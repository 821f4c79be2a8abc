//! Implementation of the `warpack package` command.
//!
//! Responsibility: load the manifest, resolve the output directory and
//! duplicate policy, run the packaging service and display results.

use tracing::{info, instrument};

use crate::{
    cli::{OutputFormat, PackageArgs, PlanFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `warpack package` command.
#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn execute(args: PackageArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let artifacts = super::load_manifest(&args.manifest)?;
    let policy = super::resolve_policy(args.duplicates, config.packaging.duplicate_policy);
    let webapp_dir = args.output.unwrap_or(config.packaging.output_dir);
    let service = super::build_service(policy);

    if args.dry_run {
        let plan = service.plan(&artifacts);
        if output.format() == OutputFormat::Json {
            return super::render_plan(&plan, PlanFormat::Json, &output);
        }
        output.info(&format!(
            "Dry run: nothing is copied into {}",
            webapp_dir.display()
        ))?;
        return super::render_plan(&plan, PlanFormat::Table, &output);
    }

    info!(artifacts = artifacts.len(), webapp_dir = %webapp_dir.display(), "Packaging started");
    let report = service.package(&artifacts, &webapp_dir)?;

    if output.format() == OutputFormat::Json {
        let summary = serde_json::json!({
            "webapp_dir": report.webapp_dir,
            "copied": report.written,
            "skipped": report.skipped_count(),
            "plan": report.plan,
        });
        let json = serde_json::to_string_pretty(&summary)
            .with_cli_context(|| "Failed to serialise packaging report")?;
        output.data(&json)?;
        return Ok(());
    }

    for conflict in report.plan.conflicts() {
        output.warning(&format!(
            "{} was written more than once ({})",
            conflict.path.display(),
            conflict.artifacts.join(", ")
        ))?;
    }
    output.success(&format!(
        "Copied {} artifact(s) into {} ({} skipped)",
        report.copied_count(),
        report.webapp_dir.display(),
        report.skipped_count()
    ))?;

    Ok(())
}
