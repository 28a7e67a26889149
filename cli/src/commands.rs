use std::path::PathBuf;

use clap::Parser;
use hostmap_common::config::{Config, DEFAULT_HOSTS_FILE, DEFAULT_TS_BINARY};
use hostmap_common::network::family::AddressFamily;

#[derive(Parser, Debug)]
#[command(name = "tailscale-hostmap")]
#[command(about = "Map tailscale peers into the hosts file.")]
#[command(version)]
pub struct CommandLine {
    /// The domain to append to the hostname. For example, `pi` becomes `pi.ts` when domain=`ts`
    #[arg(long)]
    pub domain: Option<String>,

    /// Also include machines shared to you by other users
    #[arg(short = 's', long)]
    pub include_shared: bool,

    /// The location of the tailscale binary to call
    #[arg(long, default_value = DEFAULT_TS_BINARY)]
    pub ts_binary: PathBuf,

    /// Only map IPv4 addresses
    #[arg(short = '4', long, conflicts_with = "ipv6_only")]
    pub ipv4_only: bool,

    /// Only map IPv6 addresses
    #[arg(short = '6', long)]
    pub ipv6_only: bool,

    /// The location of the hosts file to update
    #[arg(long, default_value = DEFAULT_HOSTS_FILE)]
    pub hosts_file: PathBuf,

    /// Print the new block without writing the hosts file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Only print the block itself
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> anyhow::Result<Config> {
        let family = AddressFamily::from_flags(self.ipv4_only, self.ipv6_only)?;

        Ok(Config {
            include_shared: self.include_shared,
            ts_binary: self.ts_binary.clone(),
            family,
            hosts_file: self.hosts_file.clone(),
            dry_run: self.dry_run,
            ..Config::default()
        }
        .with_domain(self.domain.as_deref()))
    }
}
