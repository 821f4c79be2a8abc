//! Flags shared by every warpack subcommand.
//!
//! Flattened into [`super::Cli`] and marked `global`, so `warpack -vv plan x`
//! and `warpack plan x -vv` mean the same thing.

use clap::Args;
use std::path::PathBuf;

/// Verbosity, colour, config file and output format.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// How much of the placement engine's reasoning to show on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more of the placement decisions (-v, -vv, -vvv)",
        long_help = "Show more of the placement decisions on stderr:
    (none)  - Warnings and errors, e.g. two artifacts still sharing a path
    -v      - Plan and copy summaries
    -vv     - Every artifact processed, duplicate names, group-prefix renames,
              unsupported types and each file copied
    -vvv    - Everything, including library internals

RUST_LOG takes precedence over this flag."
    )]
    pub verbose: u8,

    /// Only report errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Plain, uncoloured output. Set implicitly by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit `warpack.toml`; the user config directory is used otherwise.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this warpack.toml instead of the default one"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render plans and reports"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of plans, reports and errors on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from the config, else human on a terminal and plain
    /// when piped.
    #[default]
    Auto,
    /// Coloured tables.
    Human,
    /// Same tables without colour.
    Plain,
    /// One JSON document with every placement decision.
    Json,
}
