//! Main backup command

use crate::executor::{commit_stage, copy_stage, ensure_destination, push_stage};
use crate::types::{emit_event, BackupEvent, BackupSummary, DotbackError, EventCallback};
use crate::ui::print_event;
use crate::vcs::{GitCli, VersionControl};
use crate::Config;

/// Run the backup against the real `git`, printing one line per outcome.
pub fn run(config: Config) -> Result<BackupSummary, DotbackError> {
    let git = GitCli::new(config.destination.clone());
    run_with(&config, &git, Some(&print_event))
}

/// Run copy → commit → push once.
///
/// The push stage only runs when the commit stage created a commit.
pub fn run_with(
    config: &Config,
    vcs: &dyn VersionControl,
    on_event: Option<&EventCallback<'_>>,
) -> Result<BackupSummary, DotbackError> {
    config.validate()?;
    ensure_destination(&config.destination)?;

    let copies = copy_stage(&config.sources, &config.destination, on_event)?;
    let commit = commit_stage(vcs, &config.commit_message, on_event)?;

    let push = if commit.committed() {
        Some(push_stage(vcs, &config.remote, on_event)?)
    } else {
        tracing::info!("nothing changed, not pushing");
        emit_event(on_event, BackupEvent::PushSkipped);
        None
    };

    Ok(BackupSummary {
        copies,
        commit,
        push,
    })
}
