//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given name and transcripts
    pub fn with_project(self, name: &str, transcripts: &[TranscriptBuilder]) -> Self {
        let projects_dir = self.temp_dir.path().join("projects");
        fs::create_dir_all(&projects_dir).expect("Failed to create projects dir");

        let project_dir = projects_dir.join(name);
        fs::create_dir(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of a project directory inside a built .claude directory
pub fn project_path(claude_dir: &Path, name: &str) -> PathBuf {
    claude_dir.join("projects").join(name)
}

/// Builder for `.jsonl` session transcripts
pub struct TranscriptBuilder {
    filename: String,
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl TranscriptBuilder {
    /// Create a new transcript with the given filename
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            lines: Vec::new(),
            line_ending: "\n",
            trailing_newline: true,
        }
    }

    /// Add a record line
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a line verbatim (malformed JSON, blank lines, ...)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Terminate lines with CRLF instead of LF
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Leave the last line unterminated
    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// The exact bytes the file will contain
    pub fn to_content(&self) -> String {
        let mut content = self.lines.join(self.line_ending);
        if self.trailing_newline && !self.lines.is_empty() {
            content.push_str(self.line_ending);
        }
        content
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let file_path = dir.join(&self.filename);
        let mut file = fs::File::create(&file_path).expect("Failed to create transcript");
        file.write_all(self.to_content().as_bytes()).expect("Failed to write transcript");
        file_path
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    entry_type: String,
    role: String,
    content: ContentType,
    uuid: String,
    timestamp: String,
}

/// Content type for records
enum ContentType {
    Text(String),
    ContentBlocks(Vec<String>),
}

impl RecordBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self {
            entry_type: "user".to_string(),
            role: "user".to_string(),
            content: ContentType::Text("Test message".to_string()),
            uuid: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            timestamp: "2025-06-01T10:00:00.000Z".to_string(),
        }
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self {
            entry_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content: ContentType::ContentBlocks(vec![Self::text_block("Test response")]),
            uuid: "550e8400-e29b-41d4-a716-446655440002".to_string(),
            timestamp: "2025-06-01T10:00:01.000Z".to_string(),
        }
    }

    /// Set the message text (plain string content)
    pub fn text(mut self, text: &str) -> Self {
        self.content = ContentType::Text(text.to_string());
        self
    }

    /// Set content blocks (thinking, tool_use, etc.)
    pub fn content_blocks(mut self, blocks: Vec<String>) -> Self {
        self.content = ContentType::ContentBlocks(blocks);
        self
    }

    /// Set the UUID
    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> String {
        format!(r#"{{"type":"thinking","thinking":"{}","signature":"EqQBCkYIBBgCKkAx"}}"#, text)
    }

    /// A redacted_thinking block
    pub fn redacted_thinking_block(data: &str) -> String {
        format!(r#"{{"type":"redacted_thinking","data":"{}"}}"#, data)
    }

    /// A text block
    pub fn text_block(text: &str) -> String {
        format!(r#"{{"type":"text","text":"{}"}}"#, text)
    }

    /// A tool_use block
    pub fn tool_use_block(id: &str, name: &str, input_json: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#, id, name, input_json)
    }

    /// A tool_result block
    pub fn tool_result_block(tool_use_id: &str, content_json: &str) -> String {
        format!(
            r#"{{"type":"tool_result","tool_use_id":"{}","content":{}}}"#,
            tool_use_id, content_json
        )
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let content_json = match &self.content {
            ContentType::Text(text) => format!(r#""{}""#, text),
            ContentType::ContentBlocks(blocks) => format!("[{}]", blocks.join(",")),
        };

        format!(
            r#"{{"parentUuid":null,"isSidechain":false,"type":"{}","message":{{"role":"{}","content":{}}},"uuid":"{}","timestamp":"{}"}}"#,
            self.entry_type, self.role, content_json, self.uuid, self.timestamp
        )
    }
}

/// A `system` record as Claude Code writes them
pub fn system_line() -> String {
    r#"{"type":"system","subtype":"local_command","content":"<command-name>/usage</command-name>","level":"info","timestamp":"2025-06-01T10:00:02.000Z","uuid":"c803f9b5-907c-4e90-946e-07e65f6dece3"}"#.to_string()
}

/// A `summary` record (neither user, assistant, nor system)
pub fn summary_line() -> String {
    r#"{"type":"summary","summary":"Fix thinking block errors","leafUuid":"e030aae0-c04a-4bb4-8d8d-49019e5c9c2b"}"#.to_string()
}

/// Count backup files next to a transcript
pub fn backup_files(dir: &Path) -> Vec<PathBuf> {
    let mut backups: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.expect("Failed to read entry").path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "bak"))
        .collect();
    backups.sort();
    backups
}

/// A project with one transcript where the middle assistant record carries thinking
pub fn project_with_thinking() -> TempDir {
    ClaudeDirBuilder::new()
        .with_project(
            "-Users-test-project",
            &[TranscriptBuilder::new("session.jsonl")
                .with_record(RecordBuilder::user().text("Explain the bug"))
                .with_record(RecordBuilder::assistant().content_blocks(vec![
                    RecordBuilder::thinking_block("Let me look at the stack trace"),
                    RecordBuilder::text_block("The bug is in the parser"),
                ]))
                .with_record(RecordBuilder::user().text("Thanks"))],
        )
        .build()
}
