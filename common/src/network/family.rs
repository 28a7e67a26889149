//! Address-family classification for overlay addresses.
//!
//! Status output carries addresses as plain strings. Anything that parses as
//! an [`IpAddr`] is classified exactly; anything else falls back to a shape
//! check where a colon means IPv6.

use std::fmt;
use std::net::IpAddr;

use crate::error::{HostmapError, Result};

/// The family of a single address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

/// Which families are allowed into the hosts block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    Any,
    V4Only,
    V6Only,
}

impl Family {
    pub fn of(addr: &str) -> Family {
        match addr.parse::<IpAddr>() {
            Ok(IpAddr::V4(_)) => Family::V4,
            Ok(IpAddr::V6(_)) => Family::V6,
            Err(_) if addr.contains(':') => Family::V6,
            Err(_) => Family::V4,
        }
    }
}

impl AddressFamily {
    /// Builds the policy from the two command line switches.
    ///
    /// Setting both switches is rejected rather than silently meaning "any".
    pub fn from_flags(ipv4_only: bool, ipv6_only: bool) -> Result<Self> {
        match (ipv4_only, ipv6_only) {
            (false, false) => Ok(Self::Any),
            (true, false) => Ok(Self::V4Only),
            (false, true) => Ok(Self::V6Only),
            (true, true) => Err(HostmapError::Config(
                "--ipv4-only and --ipv6-only cannot be combined".to_string(),
            )),
        }
    }

    pub fn accepts(&self, addr: &str) -> bool {
        match self {
            Self::Any => true,
            Self::V4Only => Family::of(addr) == Family::V4,
            Self::V6Only => Family::of(addr) == Family::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::V4Only => write!(f, "IPv4 only"),
            Self::V6Only => write!(f, "IPv6 only"),
        }
    }
}
