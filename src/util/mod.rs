//! Shared utilities.
//!
//! Currently a single concern: atomic file writes, so the todo file is
//! never left half-written when a save is interrupted.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, TaskpadError};

/// Atomically write content to a file.
///
/// Writes to a temporary file in the same directory, flushes it, then
/// atomically renames it over the target path. If any step fails, the
/// original file (if it exists) remains unchanged.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = path.parent().ok_or_else(|| TaskpadError::IoError {
        context: format!("Cannot determine parent directory for: {}", path.display()),
        source: io::Error::new(io::ErrorKind::InvalidInput, "No parent directory"),
    })?;

    // An empty parent means a bare filename; the temp file goes in cwd.
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| {
            TaskpadError::io(
                format!("Failed to create directory: {}", parent.display()),
                e,
            )
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        TaskpadError::io(
            format!("Failed to create temp file in: {}", parent.display()),
            e,
        )
    })?;

    temp.write_all(content)
        .map_err(|e| TaskpadError::io(format!("Failed to write: {}", path.display()), e))?;
    temp.flush()
        .map_err(|e| TaskpadError::io(format!("Failed to flush: {}", path.display()), e))?;

    temp.persist(path).map_err(|e| {
        TaskpadError::io(format!("Failed to persist: {}", path.display()), e.error)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        atomic_write(&path, b"[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "old").unwrap();

        atomic_write(&path, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        atomic_write(&path, b"[]").unwrap();

        assert!(path.exists());
    }
}
