use tracing::debug;

use hostmap_common::config::Config;
use hostmap_common::network::family::AddressFamily;
use hostmap_common::peer::PeerRecord;

/// Placeholder node the control plane reports for "shared to user" metadata.
/// It is not a real machine and never gets a hosts entry.
pub const SENTINEL_HOSTNAME: &str = "device-of-shared-to-user";

/// Per-record eligibility policy. Holds no state besides its settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeerFilter {
    family: AddressFamily,
}

impl PeerFilter {
    pub fn new(family: AddressFamily) -> Self {
        Self { family }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.family)
    }

    pub fn is_eligible(&self, record: &PeerRecord) -> bool {
        if record.hostname() == SENTINEL_HOSTNAME {
            debug!("dropping placeholder device {}", record.address());
            return false;
        }
        if !self.family.accepts(record.address()) {
            debug!(
                "dropping {} {} ({} requested)",
                record.hostname(),
                record.address(),
                self.family
            );
            return false;
        }
        true
    }
}
