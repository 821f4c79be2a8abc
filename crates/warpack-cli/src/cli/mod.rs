//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "warpack",
    bin_name = "warpack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Lay out resolved artifacts into a web application tree",
    long_about = "Warpack decides, for every resolved artifact, whether it ships in the \
                  web application, which WEB-INF directory it lands in and under which \
                  filename. Colliding filenames are prefixed with the group id.",
    after_help = "EXAMPLES:\n\
        \x20 warpack plan artifacts.toml\n\
        \x20 warpack package artifacts.toml -o target/webapp\n\
        \x20 warpack package artifacts.toml --dry-run\n\
        \x20 warpack completions bash > /usr/share/bash-completion/completions/warpack",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy the manifest's artifacts into a webapp directory.
    #[command(
        visible_alias = "p",
        about = "Assemble the WEB-INF tree",
        after_help = "EXAMPLES:\n\
            \x20 warpack package artifacts.toml\n\
            \x20 warpack package artifacts.json --output build/webapp\n\
            \x20 warpack package artifacts.toml --dry-run"
    )]
    Package(PackageArgs),

    /// Show placement decisions without copying anything.
    #[command(
        about = "Show placement decisions",
        after_help = "EXAMPLES:\n\
            \x20 warpack plan artifacts.toml\n\
            \x20 warpack plan artifacts.toml --format json\n\
            \x20 warpack plan artifacts.toml --format list"
    )]
    Plan(PlanArgs),

    /// Initialise a Warpack configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 warpack init          # default location\n\
            \x20 warpack init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 warpack completions bash > ~/.local/share/bash-completion/completions/warpack\n\
            \x20 warpack completions zsh  > ~/.zfunc/_warpack\n\
            \x20 warpack completions fish > ~/.config/fish/completions/warpack.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Warpack configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 warpack config get packaging.duplicate_policy\n\
            \x20 warpack config list\n\
            \x20 warpack config path"
    )]
    Config(ConfigCommands),
}

// ── package ───────────────────────────────────────────────────────────────────

/// Arguments for `warpack package`.
#[derive(Debug, Args)]
pub struct PackageArgs {
    /// Artifact manifest (`.toml` or `.json`).
    #[arg(value_name = "MANIFEST", help = "Artifact manifest (.toml or .json)")]
    pub manifest: PathBuf,

    /// Override `packaging.output_dir`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Webapp directory to write into"
    )]
    pub output: Option<PathBuf>,

    /// Override `packaging.duplicate_policy`.
    #[arg(
        long = "duplicates",
        value_name = "POLICY",
        value_enum,
        help = "How to treat artifacts listed twice"
    )]
    pub duplicates: Option<DuplicatePolicyArg>,

    /// Print the plan instead of copying.
    #[arg(long = "dry-run", help = "Show what would be copied without copying")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `warpack plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Artifact manifest (`.toml` or `.json`).
    #[arg(value_name = "MANIFEST", help = "Artifact manifest (.toml or .json)")]
    pub manifest: PathBuf,

    /// Override `packaging.duplicate_policy`.
    #[arg(
        long = "duplicates",
        value_name = "POLICY",
        value_enum,
        help = "How to treat artifacts listed twice"
    )]
    pub duplicates: Option<DuplicatePolicyArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable table.
    Table,
    /// One target path per placed artifact.
    List,
    /// JSON document.
    Json,
}

/// `--duplicates` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicatePolicyArg {
    /// Keep every listed artifact, even exact repeats.
    KeepAll,
    /// Drop later repeats of the same coordinates.
    DedupeIdentical,
}

impl From<DuplicatePolicyArg> for warpack_core::domain::DuplicatePolicy {
    fn from(arg: DuplicatePolicyArg) -> Self {
        match arg {
            DuplicatePolicyArg::KeepAll => Self::KeepAll,
            DuplicatePolicyArg::DedupeIdentical => Self::DedupeIdentical,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `warpack init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `warpack completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `warpack config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `packaging.output_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}
