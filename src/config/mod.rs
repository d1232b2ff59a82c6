//! Configuration management

use super::types::DotbackError;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Dotfiles backed up on every run, relative to the home directory.
pub const DEFAULT_SOURCES: &[&str] = &[
    "~/.zshrc",
    "~/.config/nvim/init.vim",
    "~/.tmux.conf",
    "~/.gitconfig",
];

/// Backup working tree.
pub const DEFAULT_DESTINATION: &str = "~/Documents/dot_files";

/// Message used for every backup commit.
pub const COMMIT_MESSAGE: &str = "Update dotfiles";

/// Remote the backup is pushed to.
pub const REMOTE_NAME: &str = "origin";

/// Command-line interface.
///
/// The run takes no arguments; clap only contributes `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "dotback",
    version,
    about = "Copy dotfiles into a git-tracked backup folder, commit and push"
)]
pub struct Cli {}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute source file paths, copied in this order
    pub sources: Vec<PathBuf>,

    /// Backup directory, also the git working tree
    pub destination: PathBuf,

    /// Commit message
    pub commit_message: String,

    /// Remote name to push to
    pub remote: String,
}

impl Config {
    /// Build the default configuration against an explicit home directory.
    pub fn from_home(home: &Path) -> Self {
        Self {
            sources: DEFAULT_SOURCES
                .iter()
                .map(|expr| expand_home(expr, home))
                .collect(),
            destination: expand_home(DEFAULT_DESTINATION, home),
            commit_message: COMMIT_MESSAGE.to_string(),
            remote: REMOTE_NAME.to_string(),
        }
    }

    /// Build the default configuration for the current user.
    ///
    /// # Errors
    /// Returns [`DotbackError::HomeNotFound`] when the home directory cannot
    /// be determined.
    pub fn from_env() -> Result<Self, DotbackError> {
        let home = dirs::home_dir().ok_or(DotbackError::HomeNotFound)?;
        Ok(Self::from_home(&home))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DotbackError> {
        if self.destination.as_os_str().is_empty() {
            return Err(DotbackError::Config(
                "Destination path is empty".to_string(),
            ));
        }

        // A source living at the destination root would be copied onto itself
        if self.sources.iter().any(|src| src == &self.destination) {
            return Err(DotbackError::Config(format!(
                "Destination is also listed as a source: {:?}",
                self.destination
            )));
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = DotbackError;

    fn try_from(_cli: Cli) -> Result<Self, Self::Error> {
        let config = Config::from_env()?;
        config.validate()?;
        Ok(config)
    }
}

/// Resolve a leading `~` against `home`.
///
/// `~` alone maps to `home`, `~/rest` to `home/rest`. Anything else,
/// including `~user` forms, is returned unchanged.
pub fn expand_home(expr: &str, home: &Path) -> PathBuf {
    if expr == "~" {
        return home.to_path_buf();
    }
    match expr.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(expr),
    }
}
