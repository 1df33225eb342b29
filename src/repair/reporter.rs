use std::path::PathBuf;

use crate::models::RepairResult;

/// What happened to a single line during the repair pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOutcome {
    pub modified: bool,
    pub blocks_removed: usize,
    pub unparseable: bool,
}

impl LineOutcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn unparseable() -> Self {
        Self { unparseable: true, ..Self::default() }
    }
}

/// Running totals for one transcript
#[derive(Debug, Default)]
pub struct RepairReporter {
    total_lines: usize,
    modified_lines: usize,
    thinking_blocks_removed: usize,
    errors: usize,
}

impl RepairReporter {
    pub fn record(&mut self, outcome: LineOutcome) {
        self.total_lines += 1;
        self.thinking_blocks_removed += outcome.blocks_removed;
        if outcome.modified {
            self.modified_lines += 1;
        }
        if outcome.unparseable {
            self.errors += 1;
        }
    }

    pub fn has_changes(&self) -> bool {
        self.modified_lines > 0
    }

    pub fn finish(self, transcript_path: PathBuf, backup_path: Option<PathBuf>) -> RepairResult {
        RepairResult {
            total_lines: self.total_lines,
            modified_lines: self.modified_lines,
            thinking_blocks_removed: self.thinking_blocks_removed,
            errors: self.errors,
            backup_path,
            transcript_path,
        }
    }
}
