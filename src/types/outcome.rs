//! Outcomes reported by each backup stage

use std::path::PathBuf;

/// Result of handling one source file in the copy stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source existed and was copied
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },

    /// Source did not refer to an existing file; skipped
    NotFound { source: PathBuf },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }

    pub fn source(&self) -> &PathBuf {
        match self {
            CopyOutcome::Copied { source, .. } | CopyOutcome::NotFound { source } => source,
        }
    }
}

/// Whether the commit stage recorded a new commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    NothingChanged,
}

/// Commit stage result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReport {
    /// Repository metadata was created during this run
    pub initialized: bool,
    pub outcome: CommitOutcome,
}

impl CommitReport {
    pub fn committed(&self) -> bool {
        self.outcome == CommitOutcome::Committed
    }
}

/// Push stage result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed { remote: String, branch: String },

    /// No remote with the configured name exists; nothing was sent
    NoRemote { remote: String },
}

/// Everything one run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSummary {
    pub copies: Vec<CopyOutcome>,
    pub commit: CommitReport,

    /// `None` when the push stage never ran because nothing changed
    pub push: Option<PushOutcome>,
}

impl BackupSummary {
    /// Number of files copied
    pub fn copied_count(&self) -> usize {
        self.copies.iter().filter(|c| c.is_copied()).count()
    }

    /// Number of sources skipped as missing
    pub fn missing_count(&self) -> usize {
        self.copies.len() - self.copied_count()
    }
}

/// Events emitted while a backup runs, one per printed status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupEvent {
    FileCopied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    FileNotFound {
        source: PathBuf,
    },
    CopyFinished {
        copied: usize,
        missing: usize,
        bytes: u64,
    },
    RepositoryInitialized,
    Committed,
    NothingToCommit,
    Pushed {
        remote: String,
        branch: String,
    },
    RemoteMissing {
        remote: String,
    },
    PushSkipped,
}

/// Optional callback used to receive backup events.
pub type EventCallback<'a> = dyn Fn(&BackupEvent) + 'a;

/// Forward an event to the callback, if any.
pub(crate) fn emit_event(on_event: Option<&EventCallback<'_>>, event: BackupEvent) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}
