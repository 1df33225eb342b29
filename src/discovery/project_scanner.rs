use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::discovery::transcript_locator::find_transcripts;
use crate::error::{RepairError, Result};
use crate::models::Project;
use crate::utils::{modified_at, projects_dir};

/// List the projects in `<claude_dir>/projects`
///
/// Convenience wrapper around [`scan_projects`].
pub fn list_projects(claude_dir: &Path) -> Result<Vec<Project>> {
    scan_projects(&projects_dir(claude_dir))
}

/// Scan a projects root for project directories
///
/// Each immediate sub-directory of `projects_root` becomes a [`Project`] named after
/// the directory. Its `last_modified` is the newest of the directory's own mtime and
/// the mtimes of the transcripts inside it, so a project whose session was just
/// appended to sorts first even when no file was added.
///
/// # Returns
///
/// Projects ordered most recently modified first, ties broken by path.
/// Returns an empty Vec if `projects_root` doesn't exist (not an error).
///
/// # Errors
///
/// Returns [`RepairError::ScanFailed`] if `projects_root` exists but cannot be read.
///
/// Symlinked project directories and individual entries that cannot be read are
/// logged as warnings and skipped.
pub fn scan_projects(projects_root: &Path) -> Result<Vec<Project>> {
    if !projects_root.exists() {
        debug!("Projects directory does not exist: {}", projects_root.display());
        return Ok(Vec::new());
    }

    if !projects_root.is_dir() {
        return Err(RepairError::ScanFailed {
            path: projects_root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut projects = Vec::new();

    for entry in WalkDir::new(projects_root).min_depth(1).max_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(RepairError::ScanFailed {
                    path: projects_root.to_path_buf(),
                    source: io::Error::from(e),
                });
            }
            Err(e) => {
                warn!(error = %e, "Skipping unreadable project entry");
                continue;
            }
        };

        if entry.path_is_symlink() {
            warn!(
                "Skipping project directory (symlink not allowed): {}",
                entry.path().display()
            );
            continue;
        }

        if !entry.file_type().is_dir() {
            continue;
        }

        let dir_modified = match entry.metadata() {
            Ok(metadata) => modified_at(&metadata),
            Err(e) => {
                warn!(error = %e, "Failed to read project metadata: {}", entry.path().display());
                continue;
            }
        };

        let newest_transcript = match find_transcripts(entry.path()) {
            Ok(transcripts) => transcripts.first().map(|t| t.last_modified),
            Err(e) => {
                warn!(error = %e, "Failed to list transcripts in {}", entry.path().display());
                None
            }
        };

        let last_modified = newest_transcript.map_or(dir_modified, |t| t.max(dir_modified));
        let name = entry.file_name().to_string_lossy().into_owned();

        projects.push(Project { name, path: entry.into_path(), last_modified });
    }

    projects
        .sort_by(|a, b| b.last_modified.cmp(&a.last_modified).then_with(|| a.path.cmp(&b.path)));

    Ok(projects)
}
