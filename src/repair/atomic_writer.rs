use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{RepairError, Result};
use crate::parsers::LineEnding;

/// Writes a replacement transcript next to the original and swaps it in with a rename
///
/// Output goes to a temporary file in the target's directory. Nothing is visible at
/// the target path until [`AtomicWriter::commit`] renames the finished file over it;
/// dropping the writer (or calling [`AtomicWriter::discard`]) deletes the temporary
/// file and leaves the target untouched.
pub struct AtomicWriter {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl AtomicWriter {
    /// Open a temporary file beside `target`
    pub fn new(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = tempfile::Builder::new()
            .prefix(".thinking-fix-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|source| RepairError::WriteFailed { path: target.to_path_buf(), source })?;

        Ok(Self { target: target.to_path_buf(), writer: BufWriter::new(temp) })
    }

    pub fn write_line(&mut self, content: &[u8], ending: LineEnding) -> Result<()> {
        self.writer
            .write_all(content)
            .and_then(|()| self.writer.write_all(ending.as_bytes()))
            .map_err(|source| self.write_failed(source))
    }

    /// Flush, sync, and rename the temporary file over the target
    ///
    /// The target's permissions are carried over to the replacement. On failure the
    /// temporary file is removed and the target is left as it was.
    pub fn commit(self) -> Result<()> {
        let target = self.target;
        let fail = |source: io::Error| RepairError::WriteFailed { path: target.clone(), source };

        let temp = self.writer.into_inner().map_err(|e| fail(e.into_error()))?;

        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions()).map_err(fail)?;
        }
        temp.as_file().sync_all().map_err(fail)?;

        temp.persist(&target).map_err(|e| fail(e.error))?;
        debug!("Replaced {}", target.display());
        Ok(())
    }

    /// Drop the temporary file without touching the target
    pub fn discard(self) {
        debug!("Discarding rewrite of {}", self.target.display());
    }

    fn write_failed(&self, source: io::Error) -> RepairError {
        RepairError::WriteFailed { path: self.target.clone(), source }
    }
}
