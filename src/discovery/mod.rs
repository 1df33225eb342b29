//! On-disk layout discovery
//!
//! Claude Code keeps one directory per project under `~/.claude/projects`, each
//! holding one `.jsonl` transcript per session. Discovery is read-only and runs
//! fresh on every call; nothing is cached between invocations.

pub mod project_scanner;
pub mod transcript_locator;

pub use project_scanner::{list_projects, scan_projects};
pub use transcript_locator::{find_transcripts, locate_transcript};
