//! Recursive listing operations.
//! Plain depth-first recursion built on the shallow listers; each level
//! returns its own vector and the caller merges. The starting directory is
//! never part of any result.

use std::path::{Path, PathBuf};

use super::guard::ensure_is_existing_directory;
use super::shallow::{list_only_dirs, list_only_files};
use crate::errors::Result;

/// Every descendant directory of `directory`, depth first.
/// A leaf directory yields an empty vector.
pub fn list_dirs_recursively(directory: &Path) -> Result<Vec<PathBuf>> {
    ensure_is_existing_directory(directory)?;

    let mut found_dirs = Vec::new();
    for dir in list_only_dirs(directory)? {
        // The recursive call re-guards each subdirectory, so one deleted
        // under us mid-walk still surfaces as NotADirectory.
        let nested = list_dirs_recursively(&dir)?;
        found_dirs.push(dir);
        found_dirs.extend(nested);
    }
    Ok(found_dirs)
}

/// Every file anywhere in the subtree rooted at `directory`; directories
/// themselves are not included.
pub fn list_files_recursively(directory: &Path) -> Result<Vec<PathBuf>> {
    ensure_is_existing_directory(directory)?;

    let mut found_files = list_only_files(directory)?;
    for dir in list_only_dirs(directory)? {
        found_files.extend(list_files_recursively(&dir)?);
    }
    Ok(found_files)
}

/// Every file and every directory in the subtree rooted at `directory`,
/// excluding `directory` itself: files first, then directories.
pub fn list_all_dir_content_recursively(directory: &Path) -> Result<Vec<PathBuf>> {
    ensure_is_existing_directory(directory)?;

    let mut content = list_files_recursively(directory)?;
    content.extend(list_dirs_recursively(directory)?);
    Ok(content)
}
