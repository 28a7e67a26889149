//! # Sync Service
//!
//! Orchestrates one run: fetch peers, render the block, swap it into the
//! hosts file. Nothing touches the disk until the block is fully computed,
//! so a failure anywhere before the final rename leaves the target as it was.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use hostmap_common::config::Config;
use hostmap_common::error::Result;

use crate::block::BlockFormatter;
use crate::hosts;
use crate::source::{PeerSource, TailscaleSource};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The freshly rendered block, markers included.
    pub block: Vec<String>,
    /// Full content of the hosts file after the run (or as it would be, on a dry run).
    pub written: Vec<String>,
    /// Records reported by the source before filtering.
    pub peers_seen: usize,
    /// Whether the hosts file was actually replaced.
    pub applied: bool,
}

impl SyncReport {
    /// Number of per-peer lines in the block.
    pub fn entries(&self) -> usize {
        self.block.len().saturating_sub(3)
    }
}

pub struct SyncService {
    source: Box<dyn PeerSource>,
    formatter: BlockFormatter,
    hosts_file: PathBuf,
    dry_run: bool,
}

impl SyncService {
    pub fn new(
        source: Box<dyn PeerSource>,
        formatter: BlockFormatter,
        hosts_file: PathBuf,
        dry_run: bool,
    ) -> Self {
        Self {
            source,
            formatter,
            hosts_file,
            dry_run,
        }
    }

    /// Wires the production source and formatter from `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Box::new(TailscaleSource::new(&cfg.ts_binary, cfg.include_shared)),
            BlockFormatter::from_config(cfg),
            cfg.hosts_file.clone(),
            cfg.dry_run,
        )
    }

    pub fn run(&self) -> Result<SyncReport> {
        self.run_at(Local::now())
    }

    /// Same as [`SyncService::run`] with an explicit timestamp for the block.
    pub fn run_at(&self, now: DateTime<Local>) -> Result<SyncReport> {
        let records = self.source.fetch_peers()?;
        let block = self.formatter.format(&records, now);

        let written = if self.dry_run {
            info!("Dry run, leaving {} untouched", self.hosts_file.display());
            hosts::preview(&block, &self.hosts_file)?
        } else {
            hosts::apply(&block, &self.hosts_file)?
        };

        Ok(SyncReport {
            block,
            written,
            peers_seen: records.len(),
            applied: !self.dry_run,
        })
    }
}
