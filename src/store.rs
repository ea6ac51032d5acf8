//! Settings persistence module
//!
//! The editor talks to storage through the [`SettingsStore`] trait so the
//! backend is pluggable. Two backends are provided: a JSON file store used by
//! the binary, and an in-memory store used by tests and dry runs.
//!
//! The persisted record maps each category name to the sorted set of enabled
//! type ids. A category's set is always replaced wholesale; no backend ever
//! exposes a partially written set.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{AssignError, Result};

/// Persisted settings record: category name -> enabled type ids.
///
/// `BTreeMap`/`BTreeSet` keep serialization deterministic (keys and ids in
/// ascending order).
pub type SettingsRecord = BTreeMap<String, BTreeSet<String>>;

/// Storage backend for assignment settings.
///
/// `set` replaces a category's whole set in memory; `commit` is the
/// durability boundary. Backends must make the committed record appear
/// atomically to readers.
pub trait SettingsStore {
    /// Current enabled ids for a category, or `None` if never written
    fn get(&self, category: &str) -> Option<BTreeSet<String>>;

    /// Replace the enabled ids for a category
    fn set(&mut self, category: &str, types: BTreeSet<String>) -> Result<()>;

    /// Flush the record to durable storage
    fn commit(&mut self) -> Result<()>;
}

/// JSON file-backed settings store.
///
/// The record is loaded once at open time and held in memory; `commit`
/// writes the full record to a temporary file next to the target and renames
/// it into place, so a concurrent reader sees either the old record or the
/// new one, never a partial write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    record: SettingsRecord,
}

impl JsonFileStore {
    /// Open a settings file, creating an empty record if the file does not
    /// exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let record = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "settings file absent, starting empty");
                SettingsRecord::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, record })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full in-memory record (as of the last open/set)
    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, category: &str) -> Option<BTreeSet<String>> {
        self.record.get(category).cloned()
    }

    fn set(&mut self, category: &str, types: BTreeSet<String>) -> Result<()> {
        debug!(category, count = types.len(), "replacing category set");
        self.record.insert(category.to_string(), types);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.record)?;

        // Write-then-rename keeps the on-disk record atomic.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|err| {
            AssignError::persistence(format!(
                "failed to write {}: {}",
                tmp_path.display(),
                err
            ))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|err| {
            AssignError::persistence(format!(
                "failed to replace {}: {}",
                self.path.display(),
                err
            ))
        })?;

        debug!(path = %self.path.display(), "settings committed");
        Ok(())
    }
}

/// In-memory settings store for tests and dry runs.
///
/// Failure injection flags let tests exercise the editor's persistence error
/// paths; the commit counter lets them assert on write counts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: SettingsRecord,
    /// When set, the next `set` call fails and clears the flag
    pub fail_next_set: bool,
    /// When set, the next `commit` call fails and clears the flag
    pub fail_next_commit: bool,
    commits: usize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing record
    pub fn with_record(record: SettingsRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// Number of successful commits so far
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, category: &str) -> Option<BTreeSet<String>> {
        self.record.get(category).cloned()
    }

    fn set(&mut self, category: &str, types: BTreeSet<String>) -> Result<()> {
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(AssignError::persistence("injected set failure"));
        }
        self.record.insert(category.to_string(), types);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if self.fail_next_commit {
            self.fail_next_commit = false;
            return Err(AssignError::persistence("injected commit failure"));
        }
        self.commits += 1;
        Ok(())
    }
}

/// Validate a settings record against a catalog: every category and every id
/// must be known. Returns the list of problems found (empty = valid).
pub fn validate_record(record: &SettingsRecord, catalog: &Catalog) -> Vec<String> {
    let mut problems = Vec::new();
    for (category, types) in record {
        match catalog.category(category) {
            None => problems.push(format!("unknown category '{}'", category)),
            Some(cat) => {
                for id in types {
                    if !cat.options.iter().any(|opt| &opt.id == id) {
                        problems.push(format!(
                            "category '{}' contains unknown type id '{}'",
                            category, id
                        ));
                    }
                }
            }
        }
    }
    problems
}
