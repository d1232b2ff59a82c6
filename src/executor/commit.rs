//! Commit stage

use crate::types::{
    emit_event, BackupEvent, CommitOutcome, CommitReport, DotbackError, EventCallback,
};
use crate::vcs::VersionControl;

/// Record the backup folder's current state as a commit, if it changed.
///
/// Initializes the repository on first use, stages everything, and only
/// commits when the status query reports pending changes. Any failing
/// version-control call aborts the stage.
pub fn commit_stage(
    vcs: &dyn VersionControl,
    message: &str,
    on_event: Option<&EventCallback<'_>>,
) -> Result<CommitReport, DotbackError> {
    let initialized = !vcs.is_repository();
    if initialized {
        vcs.init()?;
        tracing::info!("initialized backup repository");
        emit_event(on_event, BackupEvent::RepositoryInitialized);
    }

    vcs.stage_all()?;

    if vcs.is_clean()? {
        emit_event(on_event, BackupEvent::NothingToCommit);
        return Ok(CommitReport {
            initialized,
            outcome: CommitOutcome::NothingChanged,
        });
    }

    vcs.commit(message)?;
    tracing::info!(commit_message = message, "commit created");
    emit_event(on_event, BackupEvent::Committed);

    Ok(CommitReport {
        initialized,
        outcome: CommitOutcome::Committed,
    })
}
