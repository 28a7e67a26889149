//! # Peer Model
//!
//! A [`PeerRecord`] is one (peer, address) pair reported by the overlay
//! network. A node with both an IPv4 and an IPv6 address yields two records
//! that share a hostname.

/// Tag attached to peers owned by another account.
pub const SHARED_TAG: &str = "shared";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    hostname: String,
    address: String,
    is_shared: bool,
}

impl PeerRecord {
    /// Creates a record. Hostnames are case-insensitive and stored lowercased.
    pub fn new(hostname: &str, address: impl Into<String>, is_shared: bool) -> Self {
        Self {
            hostname: hostname.to_lowercase(),
            address: address.into(),
            is_shared,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_shared(&self) -> bool {
        self.is_shared
    }

    /// Tags rendered into the trailing comment of a hosts line.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.is_shared {
            tags.push(SHARED_TAG);
        }
        tags
    }
}
