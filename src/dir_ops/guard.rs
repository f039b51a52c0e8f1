//! Directory existence guard shared by every listing and move operation.

use std::path::Path;

use crate::errors::{DirSweepError, Result};

/// Whether `path` currently exists and is a directory.
/// Follows symlinks, so a link pointing at a directory counts. Never fails.
pub fn is_existing_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Precondition guard: fail with [`DirSweepError::NotADirectory`] unless
/// `path` is an existing directory. Runs eagerly, before any listing or
/// move work touches the filesystem.
pub fn ensure_is_existing_directory(path: &Path) -> Result<()> {
    if is_existing_directory(path) {
        Ok(())
    } else {
        Err(DirSweepError::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}
