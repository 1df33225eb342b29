use std::env;
use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Utc};

/// Extension of Claude Code session transcripts
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// Whether a path names a session transcript (`*.jsonl`)
///
/// Backups (`session.jsonl.<timestamp>.bak`) and temporary files never match.
pub fn is_transcript_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TRANSCRIPT_EXTENSION)
}

/// Modification time of a file or directory, falling back to the Unix epoch
/// on platforms that do not record it
pub fn modified_at(metadata: &Metadata) -> DateTime<Utc> {
    metadata.modified().map(DateTime::<Utc>::from).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use thinking_fix::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.claude/projects");
/// // Returns "~/.claude/projects" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(
    path: &Path,
    home_override: Option<&str>,
) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    path_str.into_owned()
}
