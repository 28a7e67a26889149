//! # Hosts Block Rendering
//!
//! Turns peer records into the delimited region this tool owns inside the
//! hosts file:
//!
//! ```text
//! # tailscale-hostmap begin
//! # modified 2024-05-01T09:30:00.000000
//! 100.64.0.1 <TAB> pi.ts          <TAB>
//! 100.64.0.2 <TAB> friends-nas.ts <TAB> # shared
//! # tailscale-hostmap end
//! ```
//!
//! Columns are padded to the widest address and hostname among the eligible
//! records. Records keep the order the source reported them in.

use chrono::{DateTime, Local};

use hostmap_common::config::Config;
use hostmap_common::peer::PeerRecord;

use crate::filter::PeerFilter;

pub const BEGIN_MARKER: &str = "# tailscale-hostmap begin";
pub const END_MARKER: &str = "# tailscale-hostmap end";
pub const TIMESTAMP_LABEL: &str = "# modified ";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, Default)]
pub struct BlockFormatter {
    domain: Option<String>,
    filter: PeerFilter,
}

/// One eligible record with its final hostname and comment resolved.
struct Row<'a> {
    address: &'a str,
    hostname: String,
    comment: String,
}

impl BlockFormatter {
    pub fn new(domain: Option<String>, filter: PeerFilter) -> Self {
        Self { domain, filter }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.domain.clone(), PeerFilter::from_config(cfg))
    }

    /// Renders the block lines, markers included, without line terminators.
    ///
    /// An empty or fully filtered record list still yields a well-formed
    /// block holding only the markers and the timestamp.
    pub fn format(&self, records: &[PeerRecord], now: DateTime<Local>) -> Vec<String> {
        let rows: Vec<Row<'_>> = records
            .iter()
            .filter(|record| self.filter.is_eligible(record))
            .map(|record| self.row(record))
            .collect();

        let addr_width = rows.iter().map(|r| r.address.chars().count()).max().unwrap_or(0);
        let host_width = rows.iter().map(|r| r.hostname.chars().count()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(rows.len() + 3);
        lines.push(BEGIN_MARKER.to_string());
        lines.push(format!("{TIMESTAMP_LABEL}{}", now.format(TIMESTAMP_FORMAT)));
        lines.extend(rows.iter().map(|row| {
            format!(
                "{:<addr_width$}\t{:<host_width$}\t{}",
                row.address, row.hostname, row.comment
            )
        }));
        lines.push(END_MARKER.to_string());
        lines
    }

    fn row<'a>(&self, record: &'a PeerRecord) -> Row<'a> {
        let hostname = match &self.domain {
            Some(domain) => format!("{}.{}", record.hostname(), domain),
            None => record.hostname().to_string(),
        };
        let tags = record.tags();
        let comment = if tags.is_empty() {
            String::new()
        } else {
            format!("# {}", tags.join(", "))
        };

        Row {
            address: record.address(),
            hostname,
            comment,
        }
    }
}
