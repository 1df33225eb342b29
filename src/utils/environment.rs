use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the Claude directory path (~/.claude)
pub fn get_claude_dir() -> Result<PathBuf> {
    resolve_claude_dir(None, dirs::home_dir())
}

/// Pick the Claude directory from an explicit override or the home directory
pub(crate) fn resolve_claude_dir(
    override_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir);
    }
    let home = home.context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}

/// Directory holding one sub-directory per project
pub fn projects_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join("projects")
}
