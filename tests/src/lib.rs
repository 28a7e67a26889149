//! Fixtures shared by the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use hostmap_common::config::Config;
use hostmap_common::peer::PeerRecord;
use hostmap_core::block::BlockFormatter;
use hostmap_core::sync::SyncService;
use serde_json::{Map, Value, json};

pub fn at_minute(minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 1, 9, minute, 0).unwrap()
}

pub fn write_hosts(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    fs::write(&path, content).unwrap();
    path
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// A service fed by a fixed peer list instead of the status binary.
pub fn service_with(peers: Vec<PeerRecord>, cfg: &Config) -> SyncService {
    SyncService::new(
        Box::new(peers),
        BlockFormatter::from_config(cfg),
        cfg.hosts_file.clone(),
        cfg.dry_run,
    )
}

pub fn config_for(hosts_file: &Path) -> Config {
    Config {
        hosts_file: hosts_file.to_path_buf(),
        ..Config::default()
    }
}

/// Status JSON in the layout the overlay client prints.
/// Each peer is `(hostname, owner id, addresses)`.
pub fn status_json(self_uid: i64, peers: &[(&str, i64, &[&str])]) -> String {
    let mut peer_map = Map::new();
    for (idx, (host, uid, addrs)) in peers.iter().enumerate() {
        peer_map.insert(
            format!("nodekey:{idx:04}"),
            json!({
                "ID": format!("n{idx}"),
                "HostName": host,
                "UserID": uid,
                "TailscaleIPs": addrs,
                "Online": true,
            }),
        );
    }

    json!({
        "Version": "1.66.4",
        "BackendState": "Running",
        "Self": { "HostName": "laptop", "UserID": self_uid, "TailscaleIPs": ["100.64.0.100"] },
        "Peer": Value::Object(peer_map),
    })
    .to_string()
}

/// Writes an executable shell script standing in for the status binary.
#[cfg(unix)]
pub fn fake_binary(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("tailscale");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
