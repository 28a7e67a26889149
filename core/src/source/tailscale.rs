use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use hostmap_common::error::{CommandFailure, HostmapError, Result};
use hostmap_common::peer::PeerRecord;

use super::PeerSource;

const STATUS_ARGS: [&str; 2] = ["status", "--json"];

/// Reads peers from `tailscale status --json`.
pub struct TailscaleSource {
    binary: PathBuf,
    include_shared: bool,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(rename = "Self")]
    self_node: Option<SelfNode>,
    #[serde(rename = "Peer", default)]
    peers: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct SelfNode {
    #[serde(rename = "UserID")]
    user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct PeerNode {
    #[serde(rename = "UserID")]
    user_id: i64,
    #[serde(rename = "HostName")]
    host_name: String,
    #[serde(rename = "TailscaleIPs", default)]
    tailscale_ips: Option<Vec<String>>,
    // Single-address field used by older clients.
    #[serde(rename = "TailAddr", default)]
    tail_addr: Option<String>,
}

impl PeerNode {
    fn addresses(self) -> Vec<String> {
        match (self.tailscale_ips, self.tail_addr) {
            (Some(ips), _) if !ips.is_empty() => ips,
            (_, Some(addr)) if !addr.is_empty() => vec![addr],
            _ => Vec::new(),
        }
    }
}

impl TailscaleSource {
    pub fn new(binary: impl Into<PathBuf>, include_shared: bool) -> Self {
        Self {
            binary: binary.into(),
            include_shared,
        }
    }

    fn run_status(&self) -> Result<Vec<u8>> {
        debug!("running {} {}", self.binary.display(), STATUS_ARGS.join(" "));

        let output = Command::new(&self.binary)
            .args(STATUS_ARGS)
            .output()
            .map_err(|e| HostmapError::command(&self.binary, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(HostmapError::command(
                &self.binary,
                CommandFailure::ExitStatus {
                    status: output.status,
                    stderr,
                },
            ));
        }

        Ok(output.stdout)
    }
}

impl PeerSource for TailscaleSource {
    fn fetch_peers(&self) -> Result<Vec<PeerRecord>> {
        let stdout = self.run_status()?;
        let records = parse_status(&stdout, self.include_shared)
            .map_err(|reason| HostmapError::command(&self.binary, reason))?;
        info!("Status reported {} peer addresses", records.len());
        Ok(records)
    }
}

/// Decodes status JSON into peer records.
///
/// Peers owned by another account are skipped unless `include_shared` is set,
/// in which case they are kept and marked shared.
pub fn parse_status(raw: &[u8], include_shared: bool) -> std::result::Result<Vec<PeerRecord>, CommandFailure> {
    let text = std::str::from_utf8(raw).map_err(|_| CommandFailure::Utf8)?;
    let status: Status = serde_json::from_str(text)?;

    let self_uid = status
        .self_node
        .and_then(|node| node.user_id)
        .ok_or_else(|| CommandFailure::Schema("missing Self.UserID".to_string()))?;

    let mut records = Vec::new();
    for (key, value) in status.peers.unwrap_or_default() {
        let peer: PeerNode = serde_json::from_value(value)
            .map_err(|e| CommandFailure::Schema(format!("peer {key}: {e}")))?;

        let is_shared = peer.user_id != self_uid;
        if is_shared && !include_shared {
            debug!("skipping {} owned by user {}", peer.host_name, peer.user_id);
            continue;
        }

        let hostname = peer.host_name.clone();
        let addresses = peer.addresses();
        if addresses.is_empty() {
            warn!("peer {hostname} reported no addresses");
            continue;
        }

        records.extend(
            addresses
                .into_iter()
                .map(|addr| PeerRecord::new(&hostname, addr, is_shared)),
        );
    }

    Ok(records)
}
