//! Configuration lock tests against real files on disk.
//!
//! Only explicit paths are used here; environment layering is covered by the
//! harness unit tests, which isolate the process environment.

use std::fs;

use wikiracer_harness::config::RaceConfig;
use wikiracer_harness::error::RunError;
use wikiracer_search::policy::{SearchPolicy, DEFAULT_START_PRIORITY};

#[test]
fn full_file_round_trips_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.toml");
    fs::write(
        &path,
        r#"
[http]
base_url = "http://localhost:9000"
topic_prefix = "/pages/"
user_agent = "lock-tests"
timeout_secs = 3

[search]
start_priority = 500
prefetch_workers = 0
expand_once = true
queue_capacity = 16
record_expansions = true
"#,
    )
    .unwrap();

    let config = RaceConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.http.base_url, "http://localhost:9000");
    assert_eq!(config.http.topic_prefix, "/pages/");
    assert_eq!(config.http.user_agent, "lock-tests");
    assert_eq!(config.http.timeout_secs, 3);
    assert_eq!(
        config.search,
        SearchPolicy {
            start_priority: 500,
            prefetch_workers: 0,
            expand_once: true,
            queue_capacity: 16,
            record_expansions: true,
        }
    );
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.toml");
    fs::write(&path, "[search]\nexpand_once = true\n").unwrap();

    let config = RaceConfig::load(Some(path.as_path())).unwrap();
    assert!(config.search.expand_once);
    assert_eq!(config.search.start_priority, DEFAULT_START_PRIORITY);
    assert_eq!(config.http, RaceConfig::default().http);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in [
        ("workers.toml", "[search]\nprefetch_workers = 100000\n"),
        ("url.toml", "[http]\nbase_url = \"en.wikipedia.org\"\n"),
        ("type.toml", "[search]\nexpand_once = \"maybe\"\n"),
        ("unknown.toml", "[http]\nproxy = \"socks5://x\"\n"),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        let err = RaceConfig::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, RunError::Config { .. }), "{name}: {err:?}");
    }
}
