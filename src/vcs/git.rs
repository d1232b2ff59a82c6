//! `git` command-line backend

use super::VersionControl;
use crate::types::DotbackError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const GIT: &str = "git";

/// Runs `git` subcommands inside one working tree.
///
/// Output of every invocation is captured rather than echoed; stderr is
/// surfaced only in the error when a checked command fails.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    envs: Vec<(String, String)>,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for every `git` invocation.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn output(&self, args: &[&str]) -> Result<Output, DotbackError> {
        tracing::debug!(workdir = %self.workdir.display(), "git {}", args.join(" "));

        Command::new(GIT)
            .args(args)
            .current_dir(&self.workdir)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|source| DotbackError::Spawn {
                program: GIT.to_string(),
                source,
            })
    }

    /// Run a command whose exit status must be zero; returns its stdout.
    fn checked(&self, args: &[&str]) -> Result<String, DotbackError> {
        let output = self.output(args)?;

        if !output.status.success() {
            return Err(DotbackError::CommandFailed {
                command: format!("{} {}", GIT, args.join(" ")),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    fn is_repository(&self) -> bool {
        self.workdir.join(".git").exists()
    }

    fn init(&self) -> Result<(), DotbackError> {
        self.checked(&["init"]).map(drop)
    }

    fn stage_all(&self) -> Result<(), DotbackError> {
        self.checked(&["add", "."]).map(drop)
    }

    fn is_clean(&self) -> Result<bool, DotbackError> {
        let stdout = self.checked(&["status", "--porcelain"])?;
        Ok(porcelain_is_clean(&stdout))
    }

    fn commit(&self, message: &str) -> Result<(), DotbackError> {
        self.checked(&["commit", "-m", message]).map(drop)
    }

    fn remotes(&self) -> Result<Vec<String>, DotbackError> {
        // Read for its text only; a failing `git remote` just lists nothing
        let output = self.output(&["remote"])?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.split_whitespace().map(str::to_string).collect())
    }

    fn current_branch(&self) -> Result<String, DotbackError> {
        // Fails only when HEAD points at a commit rather than a branch
        let output = self.output(&["symbolic-ref", "--short", "HEAD"])?;
        if !output.status.success() {
            return Err(DotbackError::DetachedHead {
                workdir: self.workdir.clone(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), DotbackError> {
        self.checked(&["push", "-u", remote, branch]).map(drop)
    }
}

/// `git status --porcelain` output with nothing but whitespace means clean.
pub fn porcelain_is_clean(stdout: &str) -> bool {
    stdout.trim().is_empty()
}

/// Whether `name` appears as a whole token in a list of remotes.
pub fn has_remote(remotes: &[String], name: &str) -> bool {
    remotes.iter().any(|r| r == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porcelain_is_clean() {
        assert!(porcelain_is_clean(""));
        assert!(porcelain_is_clean("\n"));
        assert!(porcelain_is_clean("  \n\t"));
        assert!(!porcelain_is_clean("A  .zshrc\n"));
        assert!(!porcelain_is_clean(" M .gitconfig\n?? notes.txt\n"));
    }

    #[test]
    fn test_has_remote_matches_whole_token() {
        let remotes = vec!["upstream".to_string(), "origin".to_string()];
        assert!(has_remote(&remotes, "origin"));

        let remotes = vec!["origin-mirror".to_string(), "my-origin".to_string()];
        assert!(!has_remote(&remotes, "origin"));
        assert!(!has_remote(&[], "origin"));
    }

    #[test]
    fn test_env_builder_accumulates() {
        let git = GitCli::new("/tmp/backup")
            .env("GIT_AUTHOR_NAME", "Backup")
            .env("GIT_AUTHOR_EMAIL", "backup@example.com");

        assert_eq!(git.workdir(), Path::new("/tmp/backup"));
        assert_eq!(git.envs.len(), 2);
        assert_eq!(git.envs[0], ("GIT_AUTHOR_NAME".to_string(), "Backup".to_string()));
    }

    #[test]
    fn test_missing_workdir_is_not_a_repository() {
        let git = GitCli::new("/nonexistent/dotback/workdir");
        assert!(!git.is_repository());
    }
}
