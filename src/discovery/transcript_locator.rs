use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{RepairError, Result};
use crate::models::TranscriptFile;
use crate::utils::{is_transcript_path, modified_at};

/// List the `.jsonl` transcripts directly inside a project directory
///
/// Results are ordered most recently modified first, ties broken by path.
/// Symlinked transcripts and sub-directories are skipped.
///
/// # Errors
///
/// Returns [`RepairError::NoTranscriptFound`] if the directory is missing and
/// [`RepairError::AccessDenied`] if it cannot be listed. An empty `Vec` means
/// the directory was readable but holds no transcript.
pub fn find_transcripts(project_dir: &Path) -> Result<Vec<TranscriptFile>> {
    let mut transcripts = Vec::new();

    for entry in WalkDir::new(project_dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(RepairError::from_read(project_dir.to_path_buf(), io::Error::from(e)));
            }
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry in {}", project_dir.display());
                continue;
            }
        };

        let path = entry.path();
        if !is_transcript_path(path) {
            continue;
        }

        if entry.path_is_symlink() {
            warn!("Skipping transcript (symlink not allowed): {}", path.display());
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        let last_modified = match entry.metadata() {
            Ok(metadata) => modified_at(&metadata),
            Err(e) => {
                warn!(error = %e, "Skipping transcript without metadata: {}", path.display());
                continue;
            }
        };

        transcripts.push(TranscriptFile { path: entry.into_path(), last_modified });
    }

    transcripts
        .sort_by(|a, b| b.last_modified.cmp(&a.last_modified).then_with(|| a.path.cmp(&b.path)));

    Ok(transcripts)
}

/// Pick the transcript to repair: the only one, or the most recently modified
///
/// # Errors
///
/// Returns [`RepairError::NoTranscriptFound`] when the project holds no `.jsonl`
/// file. An existing but empty transcript is returned normally.
pub fn locate_transcript(project_dir: &Path) -> Result<PathBuf> {
    find_transcripts(project_dir)?
        .into_iter()
        .next()
        .map(|transcript| transcript.path)
        .ok_or_else(|| RepairError::NoTranscriptFound(project_dir.to_path_buf()))
}
