//! Directory operations: modularized.

mod guard;
mod recursive;
mod relocate;
mod shallow;

pub use guard::{ensure_is_existing_directory, is_existing_directory};
pub use recursive::{
    list_all_dir_content_recursively, list_dirs_recursively, list_files_recursively,
};
pub use relocate::{move_all_content, move_all_files};
pub use shallow::{list_content, list_only_dirs, list_only_files};
