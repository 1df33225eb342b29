use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project directory under `<claude-dir>/projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Directory name as written by Claude Code (e.g. `-Users-alice-code-app`)
    pub name: String,
    pub path: PathBuf,
    /// Newest of the directory mtime and its transcripts' mtimes
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
}

/// A `.jsonl` transcript inside a project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFile {
    pub path: PathBuf,
    pub last_modified: DateTime<Utc>,
}
