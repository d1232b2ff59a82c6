//! Copy stage: dotfiles into the backup folder

use crate::types::{emit_event, BackupEvent, CopyOutcome, DotbackError, EventCallback};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Create the backup folder and any missing parents.
///
/// Succeeds when the folder already exists.
pub fn ensure_destination(dir: &Path) -> Result<(), DotbackError> {
    fs::create_dir_all(dir).map_err(DotbackError::Io)
}

/// Copy every existing source into `destination`, in order.
///
/// Each file lands under its base name only, so two sources sharing a base
/// name overwrite each other and the later one wins. Missing sources are
/// reported as [`CopyOutcome::NotFound`] and skipped. The first I/O error
/// aborts the stage.
pub fn copy_stage(
    sources: &[PathBuf],
    destination: &Path,
    on_event: Option<&EventCallback<'_>>,
) -> Result<Vec<CopyOutcome>, DotbackError> {
    let mut outcomes = Vec::with_capacity(sources.len());
    let mut total_bytes = 0u64;

    for src in sources {
        let Some(name) = src.file_name().filter(|_| src.is_file()) else {
            tracing::debug!(source = %src.display(), "source not found, skipping");
            emit_event(on_event, BackupEvent::FileNotFound { source: src.clone() });
            outcomes.push(CopyOutcome::NotFound { source: src.clone() });
            continue;
        };

        let dest = destination.join(name);
        let bytes = copy_preserving_metadata(src, &dest).map_err(|source| DotbackError::Copy {
            source_path: src.clone(),
            destination: dest.clone(),
            source,
        })?;
        total_bytes += bytes;

        tracing::debug!(source = %src.display(), destination = %dest.display(), bytes, "copied");
        emit_event(
            on_event,
            BackupEvent::FileCopied {
                source: src.clone(),
                destination: dest.clone(),
                bytes,
            },
        );
        outcomes.push(CopyOutcome::Copied {
            source: src.clone(),
            destination: dest,
            bytes,
        });
    }

    let copied = outcomes.iter().filter(|o| o.is_copied()).count();
    emit_event(
        on_event,
        BackupEvent::CopyFinished {
            copied,
            missing: outcomes.len() - copied,
            bytes: total_bytes,
        },
    );

    Ok(outcomes)
}

/// Copy a file with its permissions and mtime, replacing `dest` atomically.
///
/// 1. Write to a hidden `.<name>.part` sibling
/// 2. Flush and sync to disk
/// 3. Apply permissions and mtime from the source
/// 4. Rename over the final destination
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
pub fn copy_preserving_metadata(src: &Path, dest: &Path) -> std::io::Result<u64> {
    let part_path = part_path_for(dest);

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    let mut buffer = vec![0u8; 64 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;

        if bytes_read == 0 {
            break; // EOF
        }

        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(&part_path, src_metadata.permissions())?;

    let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
    filetime::set_file_mtime(&part_path, mtime)?;

    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}

fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = dest.file_name() {
        name.push(file_name);
    }
    name.push(".part");
    dest.with_file_name(name)
}
