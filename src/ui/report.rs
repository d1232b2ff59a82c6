//! Human-readable status lines

use crate::types::BackupEvent;
use console::{style, StyledObject};
use indicatif::HumanBytes;
use std::path::Path;

/// Width of the source column in copy result lines.
const SOURCE_COLUMN: usize = 40;

/// Plain-text status line for an event.
pub fn format_event(event: &BackupEvent) -> String {
    match event {
        BackupEvent::FileCopied {
            source,
            destination,
            ..
        } => copy_line("SUCCESS", source, &destination.display().to_string()),
        BackupEvent::FileNotFound { source } => copy_line("NOT FOUND", source, "-"),
        BackupEvent::CopyFinished {
            copied,
            missing,
            bytes,
        } => format!(
            "Copy files done ({} copied, {} not found, {})",
            copied,
            missing,
            HumanBytes(*bytes)
        ),
        BackupEvent::RepositoryInitialized => "Git folder added".to_string(),
        BackupEvent::Committed => "Git commit created.".to_string(),
        BackupEvent::NothingToCommit => "No commit".to_string(),
        BackupEvent::Pushed { remote, branch } => format!("Pushed to {}/{}", remote, branch),
        BackupEvent::RemoteMissing { .. } => "Remote repo not added".to_string(),
        BackupEvent::PushSkipped => "No push".to_string(),
    }
}

/// Print an event's status line to stdout, colored by outcome.
pub fn print_event(event: &BackupEvent) {
    println!("{}", paint(event, format_event(event)));
}

fn paint(event: &BackupEvent, line: String) -> StyledObject<String> {
    match event {
        BackupEvent::FileCopied { .. } | BackupEvent::Committed | BackupEvent::Pushed { .. } => {
            style(line).green()
        }
        BackupEvent::FileNotFound { .. } | BackupEvent::RemoteMissing { .. } => {
            style(line).yellow()
        }
        BackupEvent::CopyFinished { .. } | BackupEvent::RepositoryInitialized => {
            style(line).bold()
        }
        BackupEvent::NothingToCommit | BackupEvent::PushSkipped => style(line).dim(),
    }
}

fn copy_line(label: &str, source: &Path, target: &str) -> String {
    format!(
        "{:<9} | {:<width$} | {}",
        label,
        source.display().to_string(),
        target,
        width = SOURCE_COLUMN
    )
}
