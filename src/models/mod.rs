//! Data models for transcript repair.
//!
//! - [`Project`] / [`TranscriptFile`] - on-disk layout discovered under `~/.claude/projects`
//! - [`Record`] / [`ContentBlock`] - one decoded transcript line and its content blocks
//! - [`RepairResult`] - the summary returned once per repair
//!
//! Records keep the raw JSON object they were decoded from so that a rewritten line
//! differs from the original only by the removed blocks.

pub mod project;
pub mod record;
pub mod repair;

pub use project::{Project, TranscriptFile};
pub use record::{AssistantRecord, ContentBlock, Record};
pub use repair::RepairResult;
