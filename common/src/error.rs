use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for hostmap operations
pub type Result<T> = std::result::Result<T, HostmapError>;

/// Errors that abort a hostmap run.
#[derive(Error, Debug)]
pub enum HostmapError {
    /// The status binary could not be run or its output could not be used
    #[error("status command `{binary}` failed")]
    ExternalCommand {
        binary: PathBuf,
        #[source]
        reason: CommandFailure,
    },

    /// The hosts file (or its staging copy) could not be read or written
    #[error("cannot access {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The final replace step failed. The staged file stays on disk.
    #[error("cannot move {staged} over {target} (staged copy left in place)")]
    Rename {
        staged: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid combination of options
    #[error("configuration error: {0}")]
    Config(String),
}

/// Why the status command was unusable.
#[derive(Error, Debug)]
pub enum CommandFailure {
    #[error("could not start process")]
    Spawn(#[from] io::Error),

    #[error("exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },

    #[error("output is not valid UTF-8")]
    Utf8,

    #[error("output is not valid JSON")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected status layout: {0}")]
    Schema(String),
}

impl HostmapError {
    pub fn command(binary: impl Into<PathBuf>, reason: impl Into<CommandFailure>) -> Self {
        Self::ExternalCommand {
            binary: binary.into(),
            reason: reason.into(),
        }
    }

    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
