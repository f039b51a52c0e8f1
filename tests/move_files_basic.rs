use assert_fs::TempDir;
use assert_fs::prelude::*;
use dir_sweep::{DirSweepError, list_files_recursively, list_only_files, move_all_files};
use std::path::PathBuf;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// `root/{1,2,a/{3,4,c/{5}},b/{6,d/}}` with `d` empty.
fn sample_tree(temp: &TempDir) -> PathBuf {
    let root = temp.child("root");
    root.child("a/c").create_dir_all().unwrap();
    root.child("b/d").create_dir_all().unwrap();
    for file in ["1", "2", "a/3", "a/4", "a/c/5", "b/6"] {
        root.child(file).touch().unwrap();
    }
    root.path().to_path_buf()
}

#[test]
fn moves_top_level_files_into_existing_subdirectory() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let target = root.join("b/d");

    move_all_files(&root, &target).unwrap();

    assert!(list_only_files(&root).unwrap().is_empty());
    let moved = list_only_files(&target).unwrap();
    assert_eq!(moved.len(), 2);
    assert!(moved.contains(&target.join("1")));
    assert!(moved.contains(&target.join("2")));

    // Subdirectories of the source stay untouched.
    assert!(root.join("a/3").is_file());
    assert!(root.join("a/c/5").is_file());
}

#[test]
fn moves_files_up_into_a_parent_directory() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let source = root.join("a");

    move_all_files(&source, &root).unwrap();

    // Only the nested file survives under the source.
    let left_behind = list_files_recursively(&source).unwrap();
    assert_eq!(left_behind, vec![source.join("c/5")]);

    let root_files = list_only_files(&root).unwrap();
    assert_eq!(root_files.len(), 4);
    for file in ["1", "2", "3", "4"] {
        assert!(root_files.contains(&root.join(file)), "missing {file}");
    }
}

#[test]
fn moving_from_a_directory_without_files_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let empty = root.join("b/d");

    move_all_files(&empty, &root).unwrap();

    let root_files = list_only_files(&root).unwrap();
    assert_eq!(root_files.len(), 2);
    assert!(root_files.contains(&root.join("1")));
    assert!(root_files.contains(&root.join("2")));
    assert!(list_only_files(&empty).unwrap().is_empty());
}

#[test]
fn same_source_and_target_is_a_noop() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);

    move_all_files(&root, &root).unwrap();

    let root_files = list_only_files(&root).unwrap();
    assert_eq!(root_files.len(), 2);
    assert!(root_files.contains(&root.join("1")));
    assert!(root_files.contains(&root.join("2")));
}

#[test]
fn rejects_a_source_that_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let target = temp.child("elsewhere");

    for bad in [root.join("1"), root.join("no-such-entry")] {
        let err = move_all_files(&bad, target.path()).unwrap_err();
        assert!(matches!(err, DirSweepError::NotADirectory { .. }));
    }
    // The guard fires before target creation.
    assert!(!target.path().exists());
}
