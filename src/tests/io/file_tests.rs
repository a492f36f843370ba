//! Tests for the destination file helpers.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::FileOutput;

#[test]
fn bare_filename_has_no_parent_dir() {
    let out = FileOutput::new("data.txt");
    assert_eq!(out.parent_dir(), None);
    out.ensure_parent_dir().unwrap();
}

#[test]
fn parent_dir_is_the_directory_component() {
    let out = FileOutput::new("a/b/file.txt");
    assert_eq!(out.parent_dir(), Some(Path::new("a/b")));
    assert_eq!(out.id(), "a/b/file.txt");
}

#[test]
fn ensure_parent_dir_creates_missing_dirs_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let out = FileOutput::new(dir.path().join("x/y/file.txt"));

    out.ensure_parent_dir().unwrap();
    assert!(dir.path().join("x/y").is_dir());
    out.ensure_parent_dir().unwrap();
    assert!(!dir.path().join("x/y/file.txt").exists());
}

#[test]
fn open_overwrite_truncates_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.txt");
    fs::write(&path, "0123456789").unwrap();

    let out = FileOutput::new(&path);
    {
        let mut f = out.open_overwrite().unwrap();
        f.write_all(b"ab").unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "ab");
}
