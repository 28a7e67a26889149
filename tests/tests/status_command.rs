#![cfg(unix)]
//! Runs the real command path against a shell script posing as the client.

use std::fs;
use std::sync::Mutex;

use hostmap_common::config::Config;
use hostmap_common::error::{CommandFailure, HostmapError};
use hostmap_core::source::{PeerSource, TailscaleSource};
use hostmap_core::sync::SyncService;
use hostmap_integration_tests::{at_minute, config_for, fake_binary, read, status_json, write_hosts};

// Writing an executable while another thread forks can fail with ETXTBSY.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn two_owners() -> String {
    status_json(
        1,
        &[
            ("Pi", 1, &["100.64.0.1"][..]),
            ("NAS", 2, &["100.64.0.2"][..]),
        ],
    )
}

fn script_printing(dir: &std::path::Path, json: &str) -> std::path::PathBuf {
    let json_path = dir.join("status.json");
    fs::write(&json_path, json).unwrap();
    fake_binary(dir, &format!("[ \"$1 $2\" = \"status --json\" ] || exit 64\ncat '{}'", json_path.display()))
}

#[test]
fn own_peers_only_without_include_shared() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let binary = script_printing(dir.path(), &two_owners());

    let records = TailscaleSource::new(&binary, false).fetch_peers().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hostname(), "pi");
    assert!(!records[0].is_shared());
}

#[test]
fn include_shared_tags_foreign_peers() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let binary = script_printing(dir.path(), &two_owners());
    let hosts = write_hosts(dir.path(), "127.0.0.1 localhost\n");

    let cfg = Config {
        ts_binary: binary,
        include_shared: true,
        ..config_for(&hosts)
    };
    let report = SyncService::from_config(&cfg).run_at(at_minute(10)).unwrap();

    assert_eq!(report.entries(), 2);
    let content = read(&hosts);
    assert!(content.contains("100.64.0.1\tpi \t\n"));
    assert!(content.contains("100.64.0.2\tnas\t# shared\n"));
}

#[test]
fn non_zero_exit_is_fatal_and_leaves_hosts_alone() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let binary = fake_binary(dir.path(), "echo 'not logged in' >&2\nexit 1");
    let hosts = write_hosts(dir.path(), "127.0.0.1 localhost\n");

    let cfg = Config {
        ts_binary: binary,
        ..config_for(&hosts)
    };
    let err = SyncService::from_config(&cfg).run().unwrap_err();

    match err {
        HostmapError::ExternalCommand {
            reason: CommandFailure::ExitStatus { stderr, .. },
            ..
        } => assert_eq!(stderr, "not logged in"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(read(&hosts), "127.0.0.1 localhost\n");
}

#[test]
fn garbage_output_is_fatal() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let binary = fake_binary(dir.path(), "echo 'Tailscale is stopped.'");

    let err = TailscaleSource::new(&binary, false).fetch_peers().unwrap_err();

    assert!(matches!(
        err,
        HostmapError::ExternalCommand {
            reason: CommandFailure::Decode(_),
            ..
        }
    ));
}
