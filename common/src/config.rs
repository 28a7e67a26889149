use std::path::PathBuf;

use crate::network::family::AddressFamily;

pub const DEFAULT_TS_BINARY: &str = "/usr/bin/tailscale";
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

/// Settings for a single run, built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Suffix appended to every hostname with a dot (`pi` becomes `pi.ts`).
    pub domain: Option<String>,
    /// Also map machines shared to us by other accounts.
    pub include_shared: bool,
    /// Location of the status binary.
    pub ts_binary: PathBuf,
    /// Which address families make it into the block.
    pub family: AddressFamily,
    /// File whose delimited block gets replaced.
    pub hosts_file: PathBuf,
    /// Compute and print the block without touching the hosts file.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            include_shared: false,
            ts_binary: PathBuf::from(DEFAULT_TS_BINARY),
            family: AddressFamily::Any,
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
            dry_run: false,
        }
    }
}

impl Config {
    /// Sets the domain suffix. A leading dot is dropped and an empty value
    /// means no suffix.
    pub fn with_domain(mut self, domain: Option<&str>) -> Self {
        self.domain = domain
            .map(|d| d.trim().trim_start_matches('.'))
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        self
    }
}
