use std::io::{self, BufRead};

use serde_json::Value;
use thiserror::Error;

use crate::models::Record;

/// Terminator that followed a line in the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Last line of a file without a trailing newline
    None,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
            LineEnding::None => b"",
        }
    }
}

/// One raw line of a transcript, terminator split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// 1-based line number
    pub number: usize,
    pub content: Vec<u8>,
    pub ending: LineEnding,
}

/// Lazily yields the lines of a transcript without buffering the whole file
pub struct TranscriptLines<R> {
    reader: R,
    number: usize,
}

impl<R: BufRead> TranscriptLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, number: 0 }
    }
}

impl<R: BufRead> Iterator for TranscriptLines<R> {
    type Item = io::Result<TranscriptLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut content = Vec::new();
        match self.reader.read_until(b'\n', &mut content) {
            Ok(0) => None,
            Ok(_) => {
                let ending = if content.ends_with(b"\r\n") {
                    content.truncate(content.len() - 2);
                    LineEnding::CrLf
                } else if content.ends_with(b"\n") {
                    content.truncate(content.len() - 1);
                    LineEnding::Lf
                } else {
                    LineEnding::None
                };
                self.number += 1;
                Some(Ok(TranscriptLine { number: self.number, content, ending }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Why a line could not be decoded as a record
#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Decode one line, reporting why it is not a record
///
/// Whitespace-only lines decode to [`Record::Blank`].
pub fn decode_record(content: &[u8]) -> Result<Record, LineError> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Record::Blank);
    }

    match serde_json::from_slice::<Value>(content)? {
        Value::Object(fields) => Ok(Record::from_object(fields)),
        Value::Array(_) => Err(LineError::NotAnObject("array")),
        Value::String(_) => Err(LineError::NotAnObject("string")),
        Value::Number(_) => Err(LineError::NotAnObject("number")),
        Value::Bool(_) => Err(LineError::NotAnObject("boolean")),
        Value::Null => Err(LineError::NotAnObject("null")),
    }
}

/// Decode one line, folding failures into [`Record::Unparseable`]
pub fn parse_record(content: &[u8]) -> Record {
    decode_record(content)
        .unwrap_or_else(|_| Record::Unparseable(String::from_utf8_lossy(content).into_owned()))
}
