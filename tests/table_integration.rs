//! Integration tests for the table store against a real file.
//!
//! Each test works in its own temporary directory, so the table file is
//! never shared between tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use envc::core::paths::TABLE_FILE_NAME;
use envc::core::table::{Entry, RemoveMode, TableError, TableStore};

fn setup() -> (TempDir, TableStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = TableStore::open(dir.path());
    (dir, store)
}

fn table_text(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join(TABLE_FILE_NAME)).expect("read table")
}

fn seed(dir: &TempDir, text: &str) {
    fs::write(dir.path().join(TABLE_FILE_NAME), text).expect("seed table");
}

#[test]
fn table_lives_at_fixed_name() {
    let (dir, store) = setup();
    store.create().unwrap();

    let expected: PathBuf = dir.path().join("000_envc_table");
    assert!(expected.is_file());
    assert_eq!(store.location(), expected.as_path());
    assert_eq!(table_text(&dir), "");
}

#[test]
fn create_makes_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a/b/c");
    let store = TableStore::open(&nested);

    store.create().unwrap();
    assert!(nested.join(TABLE_FILE_NAME).is_file());
}

#[test]
fn create_truncates_existing_table() {
    let (dir, store) = setup();
    seed(&dir, "A=true\n# B=false\n");

    store.create().unwrap();
    assert_eq!(table_text(&dir), "");
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn operations_require_created_table() {
    let (dir, store) = setup();

    assert!(matches!(store.list(), Err(TableError::NotFound(_))));
    assert!(matches!(
        store.append("A", "true"),
        Err(TableError::NotFound(_))
    ));
    assert!(matches!(
        store.update("A", "true"),
        Err(TableError::NotFound(_))
    ));
    assert!(matches!(
        store.remove("A", RemoveMode::Soft),
        Err(TableError::NotFound(_))
    ));
    assert!(matches!(store.restore("A"), Err(TableError::NotFound(_))));

    // Nothing was created as a side effect.
    assert!(!dir.path().join(TABLE_FILE_NAME).exists());
}

#[test]
fn full_lifecycle_matches_file_contents() {
    let (dir, store) = setup();
    store.create().unwrap();

    store.append("VIRTUALENV", "true").unwrap();
    store.append("DEBUG", "false").unwrap();
    assert_eq!(table_text(&dir), "VIRTUALENV=true\nDEBUG=false\n");

    store.update("DEBUG", "true").unwrap();
    assert_eq!(table_text(&dir), "VIRTUALENV=true\nDEBUG=true\n");

    store.remove("VIRTUALENV", RemoveMode::Soft).unwrap();
    assert_eq!(table_text(&dir), "# VIRTUALENV=true\nDEBUG=true\n");

    store.restore("VIRTUALENV").unwrap();
    assert_eq!(table_text(&dir), "VIRTUALENV=true\nDEBUG=true\n");

    store.remove("DEBUG", RemoveMode::Force).unwrap();
    assert_eq!(table_text(&dir), "VIRTUALENV=true\n");
}

#[test]
fn duplicates_are_appended_and_first_wins() {
    let (dir, store) = setup();
    store.create().unwrap();

    store.append("X", "true").unwrap();
    store.append("X", "true").unwrap();
    assert_eq!(table_text(&dir), "X=true\nX=true\n");

    store.update("X", "false").unwrap();
    assert_eq!(table_text(&dir), "X=false\nX=true\n");

    store.remove("X", RemoveMode::Force).unwrap();
    assert_eq!(table_text(&dir), "X=true\n");
}

#[test]
fn hard_removed_variable_cannot_be_restored() {
    let (dir, store) = setup();
    store.create().unwrap();
    store.append("X", "true").unwrap();

    store.remove("X", RemoveMode::Force).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(matches!(
        store.restore("X"),
        Err(TableError::VariableNotFound { .. })
    ));
    assert_eq!(table_text(&dir), "");
}

#[test]
fn update_skips_inactive_entries() {
    let (dir, store) = setup();
    seed(&dir, "# X=false\nX=true\n");

    let entry = store.update("X", "false").unwrap();
    assert_eq!(entry, Entry::active("X", "false"));
    assert_eq!(table_text(&dir), "# X=false\nX=false\n");
}

#[test]
fn soft_remove_matches_inactive_first() {
    let (dir, store) = setup();
    seed(&dir, "# X=false\nX=true\n");

    // The first entry is already inactive and stays that way; the active
    // one behind it is untouched.
    let entry = store.remove("X", RemoveMode::Soft).unwrap();
    assert_eq!(entry, Entry::inactive("X", "false"));
    assert_eq!(table_text(&dir), "# X=false\nX=true\n");
}

#[test]
fn hard_remove_deletes_inactive_entry() {
    let (dir, store) = setup();
    seed(&dir, "A=true\n# X=false\nB=true\n");

    store.remove("X", RemoveMode::Force).unwrap();
    assert_eq!(table_text(&dir), "A=true\nB=true\n");
}

#[test]
fn restore_twice_fails_the_second_time() {
    let (dir, store) = setup();
    seed(&dir, "# X=true\n");

    store.restore("X").unwrap();
    let err = store.restore("X").unwrap_err();
    assert!(matches!(
        err,
        TableError::VariableNotFound {
            inactive_only: true,
            ..
        }
    ));
    assert_eq!(err.to_string(), "could not find inactive control variable X");
    assert_eq!(table_text(&dir), "X=true\n");
}

#[test]
fn failed_mutations_leave_file_byte_identical() {
    let (dir, store) = setup();
    let original = "A=true\n\n# B=false\nC=false\n";
    seed(&dir, original);

    assert!(store.update("B", "true").is_err());
    assert_eq!(table_text(&dir), original);

    assert!(store.remove("Z", RemoveMode::Soft).is_err());
    assert_eq!(table_text(&dir), original);

    assert!(store.remove("Z", RemoveMode::Force).is_err());
    assert_eq!(table_text(&dir), original);

    assert!(store.restore("A").is_err());
    assert_eq!(table_text(&dir), original);

    assert!(store.append("bad=name", "true").is_err());
    assert_eq!(table_text(&dir), original);
}

#[test]
fn successful_write_normalizes_blank_lines() {
    let (dir, store) = setup();
    seed(&dir, "A=true\n\n\n# B=false\n");

    store.append("C", "true").unwrap();
    assert_eq!(table_text(&dir), "A=true\n# B=false\nC=true\n");
}

#[test]
fn malformed_table_is_reported_with_line_number() {
    let (dir, store) = setup();
    let original = "A=true\nnot a pair\n";
    seed(&dir, original);

    let err = store.append("B", "true").unwrap_err();
    match &err {
        TableError::Parse { source, .. } => {
            assert!(source.to_string().contains("line 2"), "{}", source);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    assert_eq!(table_text(&dir), original);
}

#[test]
fn listing_splits_by_state_in_file_order() {
    let (dir, store) = setup();
    seed(&dir, "A=true\n# B=false\nC=false\n# D=true\n");

    let listing = store.list().unwrap();
    assert_eq!(
        listing.active,
        vec![Entry::active("A", "true"), Entry::active("C", "false")]
    );
    assert_eq!(
        listing.inactive,
        vec![Entry::inactive("B", "false"), Entry::inactive("D", "true")]
    );
}

#[test]
fn no_temp_file_left_behind() {
    let (dir, store) = setup();
    store.create().unwrap();
    store.append("A", "true").unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from(TABLE_FILE_NAME)]);
}
