//! The **abstraction** over where peer records come from.
//!
//! The pipeline only depends on [`PeerSource`]. The production implementation
//! is [`TailscaleSource`], which shells out to the overlay client; tests plug
//! in fixed lists instead.

use hostmap_common::error::Result;
use hostmap_common::peer::PeerRecord;

mod tailscale;

pub use tailscale::{TailscaleSource, parse_status};

/// Produces the peer list for one run.
pub trait PeerSource {
    /// Returns one record per (peer, address) pair, in the order the peers
    /// were reported.
    fn fetch_peers(&self) -> Result<Vec<PeerRecord>>;
}

impl PeerSource for Vec<PeerRecord> {
    fn fetch_peers(&self) -> Result<Vec<PeerRecord>> {
        Ok(self.clone())
    }
}
