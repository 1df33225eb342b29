//! Thinking Fix - remove orphaned thinking blocks from Claude Code transcripts
//!
//! Claude Code stores each session as a `.jsonl` file under
//! `~/.claude/projects/<project>/`. When a session carries `thinking` or
//! `redacted_thinking` blocks the backend no longer accepts, every later request in
//! that session is rejected. This library rewrites the transcript without those
//! blocks while keeping everything else byte-for-byte:
//!
//! - Discovering projects and their transcripts
//! - Decoding each line on its own, passing malformed lines through untouched
//! - Removing thinking blocks from assistant records
//! - Backing up the original and swapping in the rewrite atomically
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use thinking_fix::{list_projects, repair_project};
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! if let Some(project) = list_projects(&claude_dir)?.first() {
//!     let result = repair_project(&project.path)?;
//!     println!("Removed {} thinking blocks", result.thinking_blocks_removed);
//! }
//! # Ok::<(), thinking_fix::RepairError>(())
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod models;
pub mod parsers;
pub mod repair;
pub mod utils;

// Re-export commonly used types
pub use discovery::{list_projects, locate_transcript, scan_projects};
pub use error::RepairError;
pub use models::{Project, RepairResult};
pub use repair::{repair_project, repair_transcript};
pub use utils::format_path_with_tilde;
