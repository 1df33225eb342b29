//! Thinking-block removal for session transcripts
//!
//! # Repair Protocol
//!
//! A repair moves through distinct phases, each of which can fail without leaving a
//! half-written transcript behind:
//!
//! 1. **Stream**: lines are read one at a time, decoded, stripped, and written to a
//!    temporary file beside the transcript. Undecodable lines are copied verbatim.
//! 2. **No-op**: if no line changed, the temporary file is deleted and the transcript
//!    is never opened for writing. No backup is made.
//! 3. **Backup**: otherwise the original is copied to `<name>.<timestamp>.bak`. If
//!    that fails, the repair stops here.
//! 4. **Swap**: the temporary file is renamed over the transcript.

pub mod atomic_writer;
pub mod backup;
pub mod engine;
pub mod reporter;
pub mod stripper;

pub use atomic_writer::AtomicWriter;
pub use backup::create_backup;
pub use engine::{repair_project, repair_project_all, repair_transcript};
pub use reporter::{LineOutcome, RepairReporter};
pub use stripper::strip_thinking;
