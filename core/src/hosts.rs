//! # Hosts File Updater
//!
//! Replaces the delimited block inside the hosts file and leaves every other
//! byte alone. The new content is staged next to the target and renamed over
//! it, so readers see either the old file or the new one.
//!
//! A writer that edits the file between our read and our rename loses its
//! change. There is no locking.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use hostmap_common::error::{HostmapError, Result};

use crate::block::{BEGIN_MARKER, END_MARKER};

/// Appended to the target path to name the staging file.
pub const STAGING_SUFFIX: &str = ".tailscale-hostmap";

/// Staging path for `target`, always in the same directory.
pub fn staging_path(target: &Path) -> PathBuf {
    let mut staged = target.as_os_str().to_owned();
    staged.push(STAGING_SUFFIX);
    PathBuf::from(staged)
}

/// Removes every region running from a begin marker through the first end
/// marker after it, plus the newline directly following that end marker.
///
/// Returns the remaining text and the number of regions removed. A begin
/// marker with no end marker after it is not a region and is kept.
pub fn strip_blocks(text: &str) -> (String, usize) {
    let mut kept = String::with_capacity(text.len());
    let mut removed = 0;
    let mut rest = text;

    while let Some(begin) = rest.find(BEGIN_MARKER) {
        let after_begin = &rest[begin + BEGIN_MARKER.len()..];
        let Some(end) = after_begin.find(END_MARKER) else {
            break;
        };

        kept.push_str(&rest[..begin]);
        let tail = &after_begin[end + END_MARKER.len()..];
        rest = tail.strip_prefix('\n').unwrap_or(tail);
        removed += 1;
    }

    kept.push_str(rest);
    (kept, removed)
}

/// Builds the new file content: `existing` without stale blocks, then `block`.
pub fn render(existing: &str, block: &[String]) -> String {
    let (mut content, removed) = strip_blocks(existing);
    debug!("removed {removed} stale block(s)");

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for line in block {
        content.push_str(line);
        content.push('\n');
    }
    content
}

/// Computes what [`apply`] would write without touching the disk.
pub fn preview(block: &[String], target: &Path) -> Result<Vec<String>> {
    let existing = read_target(target)?;
    Ok(to_lines(&render(&existing, block)))
}

/// Replaces the block in `target` and returns the lines written.
///
/// On a failed rename the staged file is left on disk for manual recovery.
pub fn apply(block: &[String], target: &Path) -> Result<Vec<String>> {
    let existing = read_target(target)?;
    let content = render(&existing, block);

    let staged = staging_path(target);
    fs::write(&staged, &content).map_err(|e| HostmapError::file_access(&staged, e))?;

    // Keep the target's mode instead of whatever the umask gives the new file.
    let permissions = fs::metadata(target)
        .map_err(|e| HostmapError::file_access(target, e))?
        .permissions();
    fs::set_permissions(&staged, permissions)
        .map_err(|e| HostmapError::file_access(&staged, e))?;

    commit(&staged, target)?;

    info!("Updated {}", target.display());
    Ok(to_lines(&content))
}

/// Renames `staged` over `target`. On failure `staged` stays where it is.
fn commit(staged: &Path, target: &Path) -> Result<()> {
    fs::rename(staged, target).map_err(|source| HostmapError::Rename {
        staged: staged.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })
}

fn read_target(target: &Path) -> Result<String> {
    fs::read_to_string(target).map_err(|e| HostmapError::file_access(target, e))
}

fn to_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
