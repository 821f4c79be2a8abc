//! Tracing subscriber setup for the `warpack` binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. What each level shows for a packaging run:
//!
//! | Flag(s)   | Level | Events                                              |
//! |-----------|-------|-----------------------------------------------------|
//! | `--quiet` | ERROR | failed runs only                                    |
//! | (none)    | WARN  | paths still shared by two artifacts after renaming  |
//! | `-v`      | INFO  | plan and copy summaries                             |
//! | `-vv`     | DEBUG | per artifact: processing, renames, unsupported types|
//! | `-vvv`    | TRACE | everything                                          |
//!
//! A `RUST_LOG` in the environment replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that receive the chosen level; everything else stays off.
const WARPACK_TARGETS: [&str; 3] = ["warpack", "warpack_core", "warpack_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn default_directives(level: LevelFilter) -> String {
    WARPACK_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
