//! Shallow listing operations: one level deep, observed fresh on each call.

use std::fs;
use std::path::{Path, PathBuf};

use super::guard::ensure_is_existing_directory;
use crate::errors::Result;

/// Immediate child directories of `directory`. Non-recursive.
pub fn list_only_dirs(directory: &Path) -> Result<Vec<PathBuf>> {
    ensure_is_existing_directory(directory)?;

    let mut dirs = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

/// Immediate children of `directory` that are not directories.
/// The classification is binary: anything that is not a directory
/// lands here, whatever kind of entry it is.
pub fn list_only_files(directory: &Path) -> Result<Vec<PathBuf>> {
    ensure_is_existing_directory(directory)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_dir() {
            files.push(path);
        }
    }
    Ok(files)
}

/// All immediate children of `directory`: directories first, then files.
/// Order within each partition is whatever the filesystem yields.
pub fn list_content(directory: &Path) -> Result<Vec<PathBuf>> {
    ensure_is_existing_directory(directory)?;

    let mut content = list_only_dirs(directory)?;
    content.extend(list_only_files(directory)?);
    Ok(content)
}
