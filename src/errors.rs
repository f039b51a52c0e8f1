//! Typed error definitions for dir_sweep.
//! Two failure modes: a path that fails the directory guard, and raw I/O
//! errors from the underlying filesystem calls, passed through untouched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirSweepError>;

#[derive(Debug, Error)]
pub enum DirSweepError {
    /// A path that must be an existing directory is missing or is a file.
    #[error("{} is not a dir", .path.display())]
    NotADirectory { path: PathBuf },

    /// Underlying rename/create/read-dir failure, surfaced unmodified.
    #[error(transparent)]
    Io(#[from] io::Error),
}
