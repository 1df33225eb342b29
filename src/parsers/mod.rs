//! Line-oriented transcript reading
//!
//! # Error Handling Strategy
//!
//! A transcript is decoded one line at a time and a bad line never aborts the pass:
//!
//! - **Malformed lines**: anything that is not a JSON object becomes
//!   [`Record::Unparseable`](crate::models::Record::Unparseable) and is copied through
//!   verbatim by the repair engine.
//!
//! - **I/O failures**: only a failed read of the underlying file is an error, since at
//!   that point the remaining lines are unknown.
//!
//! Line terminators are kept alongside each line so the file can be written back with
//! the same shape it was read with.

pub mod transcript;

pub use transcript::{
    LineEnding, LineError, TranscriptLine, TranscriptLines, decode_record, parse_record,
};
