//! Cross-process determinism: the `race_fixture` binary must print the same
//! lines under different working directories and environments, and those
//! lines must match an in-process race.

use std::process::Command;

use lock_tests::{fixture_race, report_lines};
use wikiracer_harness::runner::race;
use wikiracer_search::policy::SearchPolicy;

fn run_variant(fixture: &str, workers: &str, work_dir: &std::path::Path, env: &[(&str, &str)]) -> String {
    let mut command = Command::new(env!("CARGO_BIN_EXE_race_fixture"));
    command
        .args([fixture, workers])
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, value) in env {
        command.env(key, value);
    }
    let output = command.output().unwrap();
    assert!(
        output.status.success(),
        "race_fixture failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn in_process(fixture: &str) -> String {
    let race_fixture = fixture_race(fixture).unwrap();
    let report = race(
        race_fixture.graph,
        &SearchPolicy::default(),
        &race_fixture.start,
        &race_fixture.end,
    )
    .unwrap();
    let mut out = report_lines(&report).unwrap().join("\n");
    out.push('\n');
    out
}

#[test]
fn fixture_output_is_stable_across_processes() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    for fixture in ["rome_mini", "lattice_3x3"] {
        let expected = in_process(fixture);
        let variants = [
            run_variant(fixture, "8", dir_a.path(), &[]),
            run_variant(fixture, "8", dir_b.path(), &[("LC_ALL", "C"), ("LANG", "C")]),
            run_variant(fixture, "1", dir_a.path(), &[("LANG", "tr_TR.UTF-8")]),
            run_variant(fixture, "0", dir_b.path(), &[("RUST_LOG", "debug")]),
        ];
        for (i, output) in variants.iter().enumerate() {
            assert_eq!(output, &expected, "{fixture}: variant {i} diverged");
        }
    }
}

#[test]
fn rome_mini_fixture_lines() {
    let output = in_process("rome_mini");
    assert!(output.contains("path=[Rome, Galileo_Galilei, Physics]\n"));
    assert!(output.contains("hops=2\n"));
    assert!(output.contains("termination_reason=goal_reached\n"));
    assert!(output.contains("transcript_digest=sha256:"));
}
