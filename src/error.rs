//! Fatal error conditions for scanning and repair
//!
//! Per-line problems never surface here: a line that cannot be decoded becomes
//! [`crate::models::Record::Unparseable`] and is only visible through the
//! `errors` counter of [`crate::models::RepairResult`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions that abort a whole operation before the transcript is mutated
#[derive(Debug, Error)]
pub enum RepairError {
    /// The project directory handed to the repair does not exist
    #[error("Project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// The project directory holds no `.jsonl` transcript
    #[error("No .jsonl transcript found in {}", .0.display())]
    NoTranscriptFound(PathBuf),

    /// The transcript (or project directory) cannot be read, or is a symlink
    #[error("Cannot read {}: {source}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying the original transcript to its backup sibling failed
    #[error("Failed to create backup {}: {source}", path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the temporary file or renaming it over the transcript failed
    #[error("Failed to write transcript {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The projects root exists but cannot be listed
    #[error("Failed to read projects directory {}: {source}", path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RepairError {
    /// Map an I/O failure while opening or reading a transcript
    ///
    /// A file that vanished between location and open is reported the same way
    /// as a project without transcripts.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            RepairError::NoTranscriptFound(path)
        } else {
            RepairError::AccessDenied { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, RepairError>;
