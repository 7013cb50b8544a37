//! Tests for loading snapshot files.

use std::path::PathBuf;

use evebuddy::app::{
    service::{
        memory::{MemoryStore, Snapshot},
        CharacterService,
    },
    Error,
};

use super::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("evebuddy-{}-{}.json", name, std::process::id()))
}

/// Tests that a snapshot written as JSON loads into an equal store.
///
/// Expected: characters sorted by name
#[tokio::test]
async fn loads_snapshot_file() {
    let test = TestBuilder::new()
        .with_character(factory::mock_character(1002, "clark Kent"))
        .with_character(factory::mock_character(1001, "Bruce Wayne"))
        .build()
        .await
        .expect("Failed to create test setup");
    let path = temp_path("load");
    std::fs::write(&path, test.snapshot_json().unwrap()).unwrap();

    let snapshot = Snapshot::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(snapshot, test.snapshot);
    let store = MemoryStore::new(snapshot);
    let names: Vec<_> = store
        .list_characters()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Bruce Wayne", "clark Kent"]);
}

/// Tests that missing fields fall back to defaults.
///
/// Expected: empty snapshot from an empty object
#[test]
fn accepts_partial_snapshot() {
    let path = temp_path("partial");
    std::fs::write(&path, "{}").unwrap();

    let snapshot = Snapshot::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(snapshot, Snapshot::default());
}

/// Tests the errors for unreadable and invalid files.
///
/// Expected: I/O and JSON errors with user facing messages
#[test]
fn reports_invalid_files() {
    let err = Snapshot::from_path(temp_path("missing")).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
    assert!(err.humanize().starts_with("File error"));

    let path = temp_path("invalid");
    std::fs::write(&path, "not json").unwrap();
    let err = Snapshot::from_path(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, Error::JsonError(_)));
    assert_eq!(err.humanize(), "Invalid data format");
}
