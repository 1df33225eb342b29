pub mod environment;
pub mod paths;

pub use environment::{get_claude_dir, projects_dir};
pub use paths::{format_path_with_tilde, is_transcript_path, modified_at};
