//! `wikiracer START END`: print a topic chain from START to END.
//!
//! The route is printed to stdout as `[START, ..., END]`, or `[]` when none
//! was found. Logs go to stderr (`RUST_LOG` controls the level). Settings come
//! from `wikiracer.toml` / `$WIKIRACER_CONFIG` and `WIKIRACER_*` overrides.

use anyhow::Context;
use clap::Parser;
use wikiracer_harness::config::RaceConfig;
use wikiracer_harness::logging::init_logging;
use wikiracer_harness::runner::race_online;

#[derive(Debug, Parser)]
#[command(name = "wikiracer", version, about = "Find a link path between two wiki topics")]
struct Cli {
    /// Topic to start from, as it appears in page URLs (e.g. `Albert_Einstein`).
    start: String,
    /// Topic to reach.
    end: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = RaceConfig::load(None).context("loading configuration")?;
    let report = race_online(&config, &cli.start, &cli.end)
        .with_context(|| format!("racing from {} to {}", cli.start, cli.end))?;
    println!("{}", report.path);
    Ok(())
}
