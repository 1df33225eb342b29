use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::discovery::{find_transcripts, locate_transcript};
use crate::error::{RepairError, Result};
use crate::models::RepairResult;
use crate::parsers::{TranscriptLine, TranscriptLines, decode_record};
use crate::repair::atomic_writer::AtomicWriter;
use crate::repair::backup::create_backup_at;
use crate::repair::reporter::{LineOutcome, RepairReporter};
use crate::repair::stripper::strip_thinking;

/// Remove thinking blocks from a project's most recently modified transcript
///
/// # Errors
///
/// - [`RepairError::ProjectNotFound`] if `project_dir` is not a directory
/// - [`RepairError::NoTranscriptFound`] if it holds no `.jsonl` file
/// - any error from [`repair_transcript`]
pub fn repair_project(project_dir: &Path) -> Result<RepairResult> {
    ensure_project_dir(project_dir)?;
    let transcript = locate_transcript(project_dir)?;
    repair_transcript(&transcript)
}

/// Repair every transcript in a project, newest first
///
/// Stops at the first fatal error. Transcripts repaired before the failure keep
/// their rewritten content and backups.
pub fn repair_project_all(project_dir: &Path) -> Result<Vec<RepairResult>> {
    ensure_project_dir(project_dir)?;
    let transcripts = find_transcripts(project_dir)?;
    if transcripts.is_empty() {
        return Err(RepairError::NoTranscriptFound(project_dir.to_path_buf()));
    }

    transcripts.iter().map(|transcript| repair_transcript(&transcript.path)).collect()
}

/// Remove thinking blocks from one transcript file
///
/// The file is streamed line by line into a temporary sibling. When at least one
/// line changed, the original is copied to a timestamped backup and the temporary
/// file is renamed over it; otherwise the temporary file is discarded and the
/// original is never written.
///
/// # Errors
///
/// - [`RepairError::NoTranscriptFound`] / [`RepairError::AccessDenied`] if the
///   transcript cannot be opened or read, or is a symlink
/// - [`RepairError::BackupFailed`] if the backup cannot be written; the transcript
///   is left untouched
/// - [`RepairError::WriteFailed`] if the temporary file cannot be written or renamed;
///   the transcript is left untouched
pub fn repair_transcript(transcript: &Path) -> Result<RepairResult> {
    repair_transcript_at(transcript, Local::now())
}

/// [`repair_transcript`] with the backup timestamp supplied by the caller
pub(crate) fn repair_transcript_at(
    transcript: &Path,
    now: DateTime<Local>,
) -> Result<RepairResult> {
    if fs::symlink_metadata(transcript).is_ok_and(|metadata| metadata.file_type().is_symlink()) {
        warn!("Refusing to repair transcript (symlink not allowed): {}", transcript.display());
        return Err(RepairError::AccessDenied {
            path: transcript.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "symlink not allowed"),
        });
    }

    let file = File::open(transcript)
        .map_err(|e| RepairError::from_read(transcript.to_path_buf(), e))?;

    let mut writer = AtomicWriter::new(transcript)?;
    let mut reporter = RepairReporter::default();

    for line in TranscriptLines::new(BufReader::new(file)) {
        let line = line.map_err(|source| RepairError::AccessDenied {
            path: transcript.to_path_buf(),
            source,
        })?;
        reporter.record(repair_line(&line, &mut writer)?);
    }

    if !reporter.has_changes() {
        writer.discard();
        let result = reporter.finish(transcript.to_path_buf(), None);
        info!(
            total_lines = result.total_lines,
            errors = result.errors,
            "No thinking blocks in {}",
            transcript.display()
        );
        return Ok(result);
    }

    let backup = create_backup_at(transcript, now)?;
    writer.commit()?;

    let result = reporter.finish(transcript.to_path_buf(), Some(backup));
    info!(
        total_lines = result.total_lines,
        modified_lines = result.modified_lines,
        thinking_blocks_removed = result.thinking_blocks_removed,
        errors = result.errors,
        "Repaired {}",
        transcript.display()
    );
    Ok(result)
}

fn ensure_project_dir(project_dir: &Path) -> Result<()> {
    if project_dir.is_dir() {
        Ok(())
    } else {
        Err(RepairError::ProjectNotFound(project_dir.to_path_buf()))
    }
}

/// Strip one line and write its replacement (or the original bytes)
fn repair_line(line: &TranscriptLine, writer: &mut AtomicWriter) -> Result<LineOutcome> {
    let record = match decode_record(&line.content) {
        Ok(record) => record,
        Err(e) => {
            debug!(line = line.number, error = %e, "Passing through unparseable line");
            writer.write_line(&line.content, line.ending)?;
            return Ok(LineOutcome::unparseable());
        }
    };

    let (record, removed) = strip_thinking(record);
    if removed == 0 {
        writer.write_line(&line.content, line.ending)?;
        return Ok(LineOutcome::unchanged());
    }

    match record.into_json() {
        Some(rewritten) if rewritten.as_bytes() != line.content.as_slice() => {
            writer.write_line(rewritten.as_bytes(), line.ending)?;
            Ok(LineOutcome { modified: true, blocks_removed: removed, unparseable: false })
        }
        _ => {
            writer.write_line(&line.content, line.ending)?;
            Ok(LineOutcome { modified: false, blocks_removed: removed, unparseable: false })
        }
    }
}
