//! # dotback - Dotfile Backup Tool
//!
//! Copies a fixed set of dotfiles into a backup folder, commits the folder
//! with git when something changed, and pushes the commit to `origin`.

// Module declarations
pub mod config;
pub mod executor;
pub mod vcs;
pub mod ui;
pub mod commands;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{BackupSummary, CommitOutcome, CopyOutcome, DotbackError, PushOutcome};
pub use config::Config;
pub use vcs::{GitCli, VersionControl};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
