use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::{RepairError, Result};

/// Timestamp appended to backup file names
pub(crate) const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// How many `-N` suffixes to try when a backup name is already taken
pub(crate) const MAX_BACKUP_ATTEMPTS: usize = 100;

/// Copy a transcript to a timestamped sibling before it is rewritten
///
/// The backup is named `<file name>.<YYYYMMDD_HHMMSS>.bak`. It is created with
/// create-new semantics, so an existing backup is never overwritten, and it is
/// synced to disk before this returns.
///
/// # Errors
///
/// Returns [`RepairError::BackupFailed`] if the copy cannot be completed. Any
/// partially written backup is removed and the transcript is not touched.
pub fn create_backup(transcript: &Path) -> Result<PathBuf> {
    create_backup_at(transcript, Local::now())
}

pub(crate) fn create_backup_at(transcript: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let stamp = now.format(BACKUP_TIMESTAMP_FORMAT).to_string();

    for attempt in 0..MAX_BACKUP_ATTEMPTS {
        let candidate = backup_path(transcript, &stamp, attempt)?;

        let backup = match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(source) => return Err(RepairError::BackupFailed { path: candidate, source }),
        };

        if let Err(source) = copy_into(transcript, backup) {
            let _ = fs::remove_file(&candidate);
            return Err(RepairError::BackupFailed { path: candidate, source });
        }

        debug!("Backed up {} to {}", transcript.display(), candidate.display());
        return Ok(candidate);
    }

    Err(RepairError::BackupFailed {
        path: backup_path(transcript, &stamp, 0)?,
        source: io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{MAX_BACKUP_ATTEMPTS} backups already exist for this timestamp"),
        ),
    })
}

/// `session.jsonl` -> `session.jsonl.20250101_120000.bak` (or `...120000-2.bak`)
pub(crate) fn backup_path(transcript: &Path, stamp: &str, attempt: usize) -> Result<PathBuf> {
    let file_name = transcript.file_name().ok_or_else(|| RepairError::BackupFailed {
        path: transcript.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "transcript path has no file name"),
    })?;

    let mut name = file_name.to_os_string();
    name.push(".");
    name.push(stamp);
    if attempt > 0 {
        name.push(format!("-{attempt}"));
    }
    name.push(".bak");

    Ok(transcript.with_file_name(name))
}

fn copy_into(source: &Path, mut backup: File) -> io::Result<()> {
    let mut original = File::open(source)?;
    io::copy(&mut original, &mut backup)?;
    backup.flush()?;
    backup.sync_all()
}
