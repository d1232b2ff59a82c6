//! Push stage

use crate::types::{emit_event, BackupEvent, DotbackError, EventCallback, PushOutcome};
use crate::vcs::{has_remote, VersionControl};

/// Push the current branch to `remote`, if that remote is configured.
///
/// A missing remote is a skip, not an error: nothing is sent and
/// [`PushOutcome::NoRemote`] is returned. A failing push aborts the run.
pub fn push_stage(
    vcs: &dyn VersionControl,
    remote: &str,
    on_event: Option<&EventCallback<'_>>,
) -> Result<PushOutcome, DotbackError> {
    let remotes = vcs.remotes()?;

    if !has_remote(&remotes, remote) {
        tracing::debug!(remote, "remote not configured, skipping push");
        emit_event(
            on_event,
            BackupEvent::RemoteMissing {
                remote: remote.to_string(),
            },
        );
        return Ok(PushOutcome::NoRemote {
            remote: remote.to_string(),
        });
    }

    let branch = vcs.current_branch()?;
    vcs.push(remote, &branch)?;
    tracing::info!(remote, branch = %branch, "pushed");

    emit_event(
        on_event,
        BackupEvent::Pushed {
            remote: remote.to_string(),
            branch: branch.clone(),
        },
    );
    Ok(PushOutcome::Pushed {
        remote: remote.to_string(),
        branch,
    })
}
