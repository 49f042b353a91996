//! Runs one fixture race and prints deterministic `key=value` lines for
//! cross-process comparison.
//!
//! Usage: `race_fixture [FIXTURE] [PREFETCH_WORKERS]`
//! (defaults: `rome_mini`, 8).

use std::process::ExitCode;

use lock_tests::{fixture_race, report_lines};
use wikiracer_harness::runner::race;
use wikiracer_search::policy::SearchPolicy;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "rome_mini".into());
    let workers = match args.next().map(|w| w.parse::<usize>()) {
        None => SearchPolicy::default().prefetch_workers,
        Some(Ok(workers)) => workers,
        Some(Err(e)) => {
            eprintln!("invalid worker count: {e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(fixture) = fixture_race(&name) else {
        eprintln!("unknown fixture {name:?}");
        return ExitCode::FAILURE;
    };

    let policy = SearchPolicy {
        prefetch_workers: workers,
        ..SearchPolicy::default()
    };
    let lines = race(fixture.graph, &policy, &fixture.start, &fixture.end)
        .map_err(|e| e.to_string())
        .and_then(|report| report_lines(&report).map_err(|e| e.to_string()));
    match lines {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("race failed: {e}");
            ExitCode::FAILURE
        }
    }
}
