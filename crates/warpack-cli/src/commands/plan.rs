//! `warpack plan`: print placement decisions without copying.

use tracing::instrument;

use crate::{
    cli::{OutputFormat, PlanArgs, PlanFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let artifacts = super::load_manifest(&args.manifest)?;
    let policy = super::resolve_policy(args.duplicates, config.packaging.duplicate_policy);
    let plan = super::build_service(policy).plan(&artifacts);

    // `--output-format json` applies to every command.
    let format = if output.format() == OutputFormat::Json {
        PlanFormat::Json
    } else {
        args.format
    };

    super::render_plan(&plan, format, &output)
}
