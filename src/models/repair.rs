use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Summary of one repair, serialized in the camelCase shape callers consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairResult {
    /// Every line of the original file, blank and malformed ones included
    pub total_lines: usize,
    /// Lines whose rewritten bytes differ from the original
    pub modified_lines: usize,
    pub thinking_blocks_removed: usize,
    /// Lines that could not be decoded and were copied through verbatim
    pub errors: usize,
    /// Present if and only if `modified_lines > 0`
    pub backup_path: Option<PathBuf>,
    pub transcript_path: PathBuf,
}

impl RepairResult {
    /// Whether the transcript was rewritten
    pub fn is_modified(&self) -> bool {
        self.modified_lines > 0
    }
}
