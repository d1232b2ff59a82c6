//! Version-control capability used by the commit and push stages

mod git;

pub use git::{has_remote, porcelain_is_clean, GitCli};

use crate::types::DotbackError;

/// The operations the backup needs from a version-control tool.
///
/// An implementation is bound to one working tree. [`GitCli`] drives the
/// `git` binary; tests substitute an in-memory fake.
pub trait VersionControl {
    /// Whether the working tree already carries repository metadata
    fn is_repository(&self) -> bool;

    /// Create repository metadata in the working tree
    fn init(&self) -> Result<(), DotbackError>;

    /// Stage every addition, modification and deletion
    fn stage_all(&self) -> Result<(), DotbackError>;

    /// Whether there is nothing to commit
    fn is_clean(&self) -> Result<bool, DotbackError>;

    fn commit(&self, message: &str) -> Result<(), DotbackError>;

    /// Names of the configured remotes
    fn remotes(&self) -> Result<Vec<String>, DotbackError>;

    /// Name of the checked-out local branch
    fn current_branch(&self) -> Result<String, DotbackError>;

    /// Push `branch` to `remote` and set it as upstream
    fn push(&self, remote: &str, branch: &str) -> Result<(), DotbackError>;
}
