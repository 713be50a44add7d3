// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for directory snapshot persistence

mod common;

use std::fs;

use addrbook_core::{BookError, Directory, ErrorKind, Snapshot, SNAPSHOT_VERSION};
use common::record;
use tempfile::tempdir;

fn three_records() -> Directory {
    let mut directory = Directory::new();
    directory.add_record(record("John", &["111", "222"], Some("01-01-1990"), Some("john@mail.com")));
    directory.add_record(record("Ann", &[], Some("29-02-2000"), None));
    directory.add_record(record("Bill", &["333"], None, Some("bill@site.org")));
    directory
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    let original = three_records();

    original.save_snapshot(&path).unwrap();

    let mut loaded = Directory::new();
    let count = loaded.load_snapshot(&path).unwrap();

    assert_eq!(count, 3);
    assert_eq!(loaded, original);
    for (a, b) in loaded.records().zip(original.records()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_load_replaces_existing_contents() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    three_records().save_snapshot(&path).unwrap();

    let mut directory = Directory::new();
    directory.add_record(record("Stale", &["000"], None, None));
    directory.load_snapshot(&path).unwrap();

    assert!(!directory.contains("Stale"));
    assert_eq!(directory.len(), 3);
}

#[test]
fn test_open_missing_file_is_empty() {
    let temp_dir = tempdir().unwrap();

    let directory = Directory::open(&temp_dir.path().join("absent.json")).unwrap();

    assert!(directory.is_empty());
}

#[test]
fn test_open_existing_file_loads_it() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    three_records().save_snapshot(&path).unwrap();

    assert_eq!(Directory::open(&path).unwrap(), three_records());
}

#[test]
fn test_boundary_year_birthdays_survive_reload() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    let mut directory = Directory::new();
    directory.add_record(record("Old", &[], Some("01-01-0000"), None));
    directory.add_record(record("Far", &[], Some("31-12-9999"), None));

    directory.save_snapshot(&path).unwrap();
    let loaded = Directory::open(&path).unwrap();

    assert_eq!(loaded, directory);
    assert_eq!(loaded.get("Old").unwrap().birthday().unwrap().to_string(), "01-01-0000");
}

#[test]
fn test_failed_write_leaves_no_temp_file() {
    let temp_dir = tempdir().unwrap();
    // A directory in the way makes the final rename fail
    let path = temp_dir.path().join("book.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupied"), b"x").unwrap();

    let result = three_records().save_snapshot(&path);

    assert!(result.is_err());
    assert!(!temp_dir.path().join(".book.json.tmp").exists());
}

#[test]
fn test_save_creates_parent_directories_and_leaves_no_temp_file() {
    let temp_dir = tempdir().unwrap();
    let parent = temp_dir.path().join("a").join("b");
    let path = parent.join("book.json");

    three_records().save_snapshot(&path).unwrap();

    let entries: Vec<_> = fs::read_dir(&parent)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["book.json".to_string()]);
}

#[test]
fn test_snapshot_file_is_versioned_json() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    three_records().save_snapshot(&path).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();

    assert_eq!(json["version"], SNAPSHOT_VERSION);
    assert_eq!(json["records"][0]["name"], "John");
    assert_eq!(json["records"][0]["phones"][1], "222");
    assert_eq!(json["records"][0]["birthday"], "01-01-1990");
    assert!(json["records"][1].get("email").is_none());
}

#[test]
fn test_corrupt_file_is_storage_error_and_keeps_directory() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    fs::write(&path, b"{ not json").unwrap();

    let mut directory = three_records();
    let err = directory.load_snapshot(&path).unwrap_err();

    assert!(matches!(err, BookError::Serialization(_)));
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(directory, three_records());
}

#[test]
fn test_invalid_field_in_file_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    fs::write(
        &path,
        r#"{"version":1,"records":[{"name":"John","phones":[],"email":"broken"}]}"#,
    )
    .unwrap();

    assert!(Directory::open(&path).is_err());
}

#[test]
fn test_unknown_version_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    fs::write(&path, r#"{"version":99,"records":[]}"#).unwrap();

    let err = Directory::open(&path).unwrap_err();

    assert!(matches!(err, BookError::UnsupportedVersion(99)));
}

#[test]
fn test_missing_file_on_explicit_load_is_io_error() {
    let temp_dir = tempdir().unwrap();

    let err = Directory::new()
        .load_snapshot(&temp_dir.path().join("absent.json"))
        .unwrap_err();

    assert!(matches!(err, BookError::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Storage);
}

#[test]
fn test_duplicate_names_in_snapshot_keep_last() {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        records: vec![
            record("John", &["111"], None, None),
            record("John", &["222"], None, None),
        ],
    };

    let directory = snapshot.into_directory().unwrap();

    assert_eq!(directory.len(), 1);
    assert_eq!(directory.get("John").unwrap().phones()[0].as_str(), "222");
}
