use std::path::Path;

use colored::*;
use tracing::info;

use hostmap_common::config::{Config, DEFAULT_HOSTS_FILE, DEFAULT_TS_BINARY};
use hostmap_common::network::family::AddressFamily;
use hostmap_core::sync::SyncReport;

pub const TOTAL_WIDTH: usize = 64;

const CRON_SCHEDULE: &str = "*/5 * * * *";

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    eprintln!("{}", line);
}

/// The block goes to stdout uncoloured so it can be piped.
pub fn block(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn summary(report: &SyncReport, cfg: &Config) {
    let entries: ColoredString = report.entries().to_string().green().bold();
    let seen: ColoredString = report.peers_seen.to_string().bold();
    let target = cfg.hosts_file.display();

    if report.applied {
        info!("Mapped {entries} of {seen} peer addresses into {target}");
    } else {
        info!("Would map {entries} of {seen} peer addresses into {target}");
    }
}

pub fn schedule_hint(cfg: &Config) {
    let exe = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| String::from("tailscale-hostmap"));

    println!();
    println!("To keep the hosts file current, add this to root's crontab:");
    println!("{}", cron_entry(&exe, cfg));
}

/// A crontab line re-running this binary with the same options.
pub fn cron_entry(exe: &str, cfg: &Config) -> String {
    let mut parts: Vec<String> = vec![CRON_SCHEDULE.to_string(), shell_quote(exe)];

    if let Some(domain) = &cfg.domain {
        parts.push(format!("--domain {}", shell_quote(domain)));
    }
    if cfg.include_shared {
        parts.push("--include-shared".to_string());
    }
    match cfg.family {
        AddressFamily::Any => {}
        AddressFamily::V4Only => parts.push("--ipv4-only".to_string()),
        AddressFamily::V6Only => parts.push("--ipv6-only".to_string()),
    }
    if cfg.ts_binary != Path::new(DEFAULT_TS_BINARY) {
        parts.push(format!("--ts-binary {}", shell_quote(&cfg.ts_binary.to_string_lossy())));
    }
    if cfg.hosts_file != Path::new(DEFAULT_HOSTS_FILE) {
        parts.push(format!("--hosts-file {}", shell_quote(&cfg.hosts_file.to_string_lossy())));
    }
    // --quiet still prints the block; keep cron from mailing it every run.
    parts.push("--quiet > /dev/null".to_string());

    parts.join(" ")
}

/// Single-quotes `word` for sh unless it is made of harmless characters only.
fn shell_quote(word: &str) -> String {
    let harmless = |c: char| c.is_ascii_alphanumeric() || "/._-+:=@,".contains(c);
    if !word.is_empty() && word.chars().all(harmless) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
