//! Bulk move operations.
//! The source listing is snapshotted before the first rename, then each
//! item is renamed to the same relative name under the target. A rename
//! moves a directory subtree as one unit; nothing is copied file-by-file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::guard::{ensure_is_existing_directory, is_existing_directory};
use super::shallow::{list_content, list_only_files};
use crate::errors::Result;

/// Move every immediate file of `source_dir` into `target_dir`, creating
/// the target (and any missing parents) first. Subdirectories of the
/// source and their contents stay put.
///
/// The file list is captured once, up front, so a target nested inside
/// the source cannot cause a file to be processed twice. Calling with
/// `source_dir == target_dir` is a no-op: renaming a path onto itself
/// succeeds without touching the file. Items already moved before a
/// failure remain moved.
pub fn move_all_files(source_dir: &Path, target_dir: &Path) -> Result<()> {
    ensure_is_existing_directory(source_dir)?;

    if !is_existing_directory(target_dir) {
        fs::create_dir_all(target_dir)?;
    }

    let all_files_from_dir = relative_to(list_only_files(source_dir)?, source_dir);
    info!(
        source = %source_dir.display(),
        target = %target_dir.display(),
        count = all_files_from_dir.len(),
        "moving files"
    );
    for file in &all_files_from_dir {
        rename_into(source_dir, target_dir, file)?;
    }
    Ok(())
}

/// Move every immediate child of `source_dir` (files and directories)
/// into `target_dir`, creating the target first. Each directory moves
/// with its whole subtree in a single rename.
///
/// Same snapshot rule as [`move_all_files`]. A name collision at the
/// destination propagates whatever error the platform rename reports;
/// nothing is merged or cleaned up.
pub fn move_all_content(source_dir: &Path, target_dir: &Path) -> Result<()> {
    ensure_is_existing_directory(source_dir)?;

    if !is_existing_directory(target_dir) {
        fs::create_dir_all(target_dir)?;
    }

    let all_content_from_dir = relative_to(list_content(source_dir)?, source_dir);
    info!(
        source = %source_dir.display(),
        target = %target_dir.display(),
        count = all_content_from_dir.len(),
        "moving content"
    );
    for item in &all_content_from_dir {
        rename_into(source_dir, target_dir, item)?;
    }
    Ok(())
}

/// Reduce listed children to their names relative to `base`.
fn relative_to(items: Vec<PathBuf>, base: &Path) -> Vec<PathBuf> {
    items
        .into_iter()
        .filter_map(|item| item.strip_prefix(base).map(Path::to_path_buf).ok())
        .collect()
}

/// Rename `source_dir/rel` to `target_dir/rel`.
fn rename_into(source_dir: &Path, target_dir: &Path, rel: &Path) -> Result<()> {
    let src = source_dir.join(rel);
    let dest = target_dir.join(rel);
    fs::rename(&src, &dest)?;
    debug!(src = %src.display(), dest = %dest.display(), "moved");
    Ok(())
}
