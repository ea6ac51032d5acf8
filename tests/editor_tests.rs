//! Integration tests for the assignment settings editor
//!
//! These tests verify:
//! - Submission filtering (truthy filter + catalog intersection)
//! - Idempotence and load/submit round-trips
//! - Unknown-category and persistence-failure handling
//! - End-to-end persistence through the JSON file store

use std::collections::{BTreeSet, HashMap};
use std::fs;

use assigntui::{
    AssignError, AssignmentEditor, Catalog, CategoryCatalog, JsonFileStore, MemoryStore,
    RecordingPresenter, SettingsStore, TypeOption, SAVED_NOTICE,
};

// =============================================================================
// Helpers
// =============================================================================

/// Minimal catalog with a single "core" category of three types
fn small_catalog() -> Catalog {
    Catalog {
        categories: vec![CategoryCatalog {
            name: "core".to_string(),
            options: vec![
                TypeOption::new("node", "Content types"),
                TypeOption::new("block", "Blocks"),
                TypeOption::new("views", "Views"),
            ],
        }],
    }
}

fn submission(entries: &[(&str, bool)]) -> HashMap<String, bool> {
    entries
        .iter()
        .map(|(id, checked)| (id.to_string(), *checked))
        .collect()
}

fn ids(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Submission Filtering
// =============================================================================

#[test]
fn test_spec_scenario_narrows_stored_set() {
    // Stored {node}; submit {node: false, block: true} -> persisted {block},
    // views untouched (absent before and after).
    let mut store = MemoryStore::new();
    store.set("core", ids(&["node"])).unwrap();
    let mut editor =
        AssignmentEditor::new(store, RecordingPresenter::cancelling(), small_catalog()).unwrap();

    editor
        .submit_selection("core", &submission(&[("node", false), ("block", true)]))
        .unwrap();

    assert_eq!(editor.store().get("core").unwrap(), ids(&["block"]));
}

#[test]
fn test_submission_cannot_invent_ids() {
    let mut editor = AssignmentEditor::new(
        MemoryStore::new(),
        RecordingPresenter::cancelling(),
        small_catalog(),
    )
    .unwrap();

    editor
        .submit_selection(
            "core",
            &submission(&[("node", true), ("injected", true), ("views", true)]),
        )
        .unwrap();

    assert_eq!(editor.store().get("core").unwrap(), ids(&["node", "views"]));
}

#[test]
fn test_all_false_submission_persists_empty_set() {
    let mut store = MemoryStore::new();
    store.set("core", ids(&["node", "views"])).unwrap();
    let mut editor =
        AssignmentEditor::new(store, RecordingPresenter::cancelling(), small_catalog()).unwrap();

    editor
        .submit_selection(
            "core",
            &submission(&[("node", false), ("block", false), ("views", false)]),
        )
        .unwrap();

    // The set becomes empty, not left unchanged
    assert_eq!(editor.store().get("core"), Some(BTreeSet::new()));
}

// =============================================================================
// Idempotence and Round-Trips
// =============================================================================

#[test]
fn test_submit_twice_is_idempotent() {
    let mut editor = AssignmentEditor::new(
        MemoryStore::new(),
        RecordingPresenter::cancelling(),
        small_catalog(),
    )
    .unwrap();
    let submitted = submission(&[("block", true), ("views", true)]);

    editor.submit_selection("core", &submitted).unwrap();
    let after_first = editor.store().get("core").unwrap();
    editor.submit_selection("core", &submitted).unwrap();
    let after_second = editor.store().get("core").unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(editor.store().commit_count(), 2);
}

#[test]
fn test_load_after_submit_round_trip() {
    let mut editor = AssignmentEditor::new(
        MemoryStore::new(),
        RecordingPresenter::cancelling(),
        small_catalog(),
    )
    .unwrap();

    editor
        .submit_selection("core", &submission(&[("views", true), ("node", false)]))
        .unwrap();

    let selection = editor.load_selection("core").unwrap();
    assert_eq!(selection.enabled_ids(), vec!["views"]);
    assert_eq!(selection.options.len(), 3);
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_load_unknown_category_fails() {
    let editor = AssignmentEditor::new(
        MemoryStore::new(),
        RecordingPresenter::cancelling(),
        small_catalog(),
    )
    .unwrap();

    let result = editor.load_selection("nonexistent");
    assert!(matches!(result, Err(AssignError::UnknownCategory(_))));
}

#[test]
fn test_failed_save_suppresses_notice_and_redirect() {
    let mut store = MemoryStore::new();
    store.fail_next_commit = true;
    let mut editor =
        AssignmentEditor::new(store, RecordingPresenter::cancelling(), small_catalog()).unwrap();

    let result = editor.submit_selection("core", &submission(&[("node", true)]));
    assert!(matches!(result, Err(AssignError::Persistence(_))));

    let presenter = editor.presenter();
    assert!(presenter.notices.is_empty());
    assert!(presenter.redirects.is_empty());
}

#[test]
fn test_successful_save_notifies_once() {
    let mut editor = AssignmentEditor::new(
        MemoryStore::new(),
        RecordingPresenter::cancelling(),
        small_catalog(),
    )
    .unwrap();

    editor
        .submit_selection("core", &submission(&[("node", true)]))
        .unwrap();

    let presenter = editor.presenter();
    assert_eq!(presenter.notices, vec![SAVED_NOTICE]);
    assert_eq!(presenter.redirects.len(), 1);
}

// =============================================================================
// File-Backed Persistence
// =============================================================================

#[test]
fn test_file_store_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assignment.json");

    let store = JsonFileStore::open(&path).unwrap();
    let mut editor =
        AssignmentEditor::new(store, RecordingPresenter::cancelling(), small_catalog()).unwrap();
    editor
        .submit_selection("core", &submission(&[("block", true), ("node", true)]))
        .unwrap();

    // A fresh store sees exactly the committed set
    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("core"), Some(ids(&["block", "node"])));
}

#[test]
fn test_file_store_commit_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assignment.json");
    // A directory squatting on the temp path makes the commit write fail
    fs::create_dir(path.with_extension("json.tmp")).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    let mut editor =
        AssignmentEditor::new(store, RecordingPresenter::cancelling(), small_catalog()).unwrap();

    let result = editor.submit_selection("core", &submission(&[("node", true)]));
    assert!(matches!(result, Err(AssignError::Persistence(_))));
    assert!(!path.exists());

    let presenter = editor.presenter();
    assert!(presenter.notices.is_empty());
    assert!(presenter.redirects.is_empty());
}

#[test]
fn test_categories_are_persisted_independently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assignment.json");

    let store = JsonFileStore::open(&path).unwrap();
    let mut editor = AssignmentEditor::new(
        store,
        RecordingPresenter::cancelling(),
        Catalog::default(),
    )
    .unwrap();

    editor
        .submit_selection("core", &submission(&[("node", true)]))
        .unwrap();
    editor
        .submit_selection("exclude", &submission(&[("views", true)]))
        .unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("core"), Some(ids(&["node"])));
    assert_eq!(reopened.get("exclude"), Some(ids(&["views"])));
    assert_eq!(reopened.get("optional"), None);
}
