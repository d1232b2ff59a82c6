//! Error types for dotback

use std::path::PathBuf;
use thiserror::Error;

/// Error types for dotback operations
#[derive(Debug, Error)]
pub enum DotbackError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user's home directory could not be determined
    #[error("Cannot determine path to home directory")]
    HomeNotFound,

    /// Copying one dotfile into the backup folder failed
    #[error("Failed to copy {source_path} to {destination}: {source}")]
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version-control program could not be started
    #[error("Failed to run `{program}`. Is it installed? ({source})")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// HEAD is not on a branch, so there is nothing to push
    #[error("Cannot push from {workdir}: HEAD is detached, check out a branch first")]
    DetachedHead { workdir: PathBuf },

    /// A version-control command exited unsuccessfully
    #[error("`{command}` failed (exit code: {code:?}): {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl DotbackError {
    /// Check if this error came from the version-control tool
    pub fn is_vcs_error(&self) -> bool {
        matches!(
            self,
            DotbackError::Spawn { .. }
                | DotbackError::CommandFailed { .. }
                | DotbackError::DetachedHead { .. }
        )
    }

    /// Check if this error happened while copying a dotfile
    pub fn is_copy_error(&self) -> bool {
        matches!(self, DotbackError::Copy { .. })
    }

    /// Check if this error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, DotbackError::Config(_) | DotbackError::HomeNotFound)
    }
}
