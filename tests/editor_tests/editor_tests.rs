//! Tests for InPlaceEditor
//!
//! These tests verify:
//! - Creating the backing file without clobbering existing content
//! - Appends and positioned writes grow the file
//! - Tail rewrites truncate to the requested length
//! - Insert and splice shift the rest of the file

use std::fs;
use std::path::{Path, PathBuf};

use inistore::editor::{create_if_missing, InPlaceEditor};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.ini");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_if_missing_creates_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("new.ini");

    assert!(create_if_missing(&path).unwrap());

    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_create_if_missing_keeps_existing_content() {
    let (_temp, path) = setup_file("[db]\n");

    assert!(!create_if_missing(&path).unwrap());

    assert_eq!(read(&path), "[db]\n");
}

#[test]
fn test_create_if_missing_fails_in_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope").join("new.ini");

    assert!(create_if_missing(&path).is_err());
}

#[test]
fn test_open_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    assert!(InPlaceEditor::open(&temp_dir.path().join("absent.ini")).is_err());
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_append_extends_file() {
    let (_temp, path) = setup_file("[a]\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.append(b"x = 1\n").unwrap();

    assert_eq!(editor.len(), 10);
    assert_eq!(read(&path), "[a]\nx = 1\n");
}

#[test]
fn test_write_at_past_end_extends_file() {
    let (_temp, path) = setup_file("abc");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.write_at(1, b"XYZW").unwrap();

    assert_eq!(editor.len(), 5);
    assert_eq!(read(&path), "aXYZW");
}

#[test]
fn test_ends_with_newline() {
    let (_temp, path) = setup_file("a\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();
    assert!(editor.ends_with_newline().unwrap());

    let (_temp2, path2) = setup_file("a");
    let mut editor2 = InPlaceEditor::open(&path2).unwrap();
    assert!(!editor2.ends_with_newline().unwrap());

    let (_temp3, path3) = setup_file("");
    let mut editor3 = InPlaceEditor::open(&path3).unwrap();
    assert!(!editor3.ends_with_newline().unwrap());
}

#[test]
fn test_read_tail() {
    let (_temp, path) = setup_file("[a]\nx = 1\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    assert_eq!(editor.read_tail(4).unwrap(), b"x = 1\n");
    assert!(editor.read_tail(10).unwrap().is_empty());
}

// =============================================================================
// Rewrite Tests
// =============================================================================

#[test]
fn test_rewrite_tail_truncates() {
    let (_temp, path) = setup_file("[a]\nx = 1\ny = 2\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.rewrite_tail(4, b"y = 2\n", 10).unwrap();

    assert_eq!(editor.len(), 10);
    assert_eq!(read(&path), "[a]\ny = 2\n");
}

#[test]
fn test_rewrite_tail_to_empty() {
    let (_temp, path) = setup_file("[a]\nx = 1\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.rewrite_tail(4, b"", 4).unwrap();

    assert_eq!(read(&path), "[a]\n");
}

#[test]
fn test_insert_at_shifts_tail() {
    let (_temp, path) = setup_file("[a]\nx = 1\n\n[b]\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.insert_at(10, b"y = 2\n").unwrap();

    assert_eq!(read(&path), "[a]\nx = 1\ny = 2\n\n[b]\n");
    assert_eq!(editor.len(), 21);
}

#[test]
fn test_splice_shorter_line_truncates() {
    let (_temp, path) = setup_file("[a]\nkey = longvalue\nz = 9\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.splice(4, 16, b"key = v\n").unwrap();

    assert_eq!(read(&path), "[a]\nkey = v\nz = 9\n");
}

#[test]
fn test_splice_longer_line_grows() {
    let (_temp, path) = setup_file("[a]\nk = 1\nz = 9\n");
    let mut editor = InPlaceEditor::open(&path).unwrap();

    editor.splice(4, 6, b"k = 12345\n").unwrap();

    assert_eq!(read(&path), "[a]\nk = 12345\nz = 9\n");
}
