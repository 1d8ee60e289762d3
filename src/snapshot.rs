//! The persisted deprecation snapshot and its version filter.
//!
//! An external collect step scans release history and records, per alias,
//! the first version in which the namespaced replacement exists (`min`)
//! and that replacement's name (`new`). This module loads that JSON file
//! and answers "which renames already apply at version X".

use crate::error::{StubGenError, StubGenResult};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One snapshot entry for an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// First version in which the canonical class is available.
    pub min: String,
    /// The canonical namespaced class name.
    pub new: String,
}

/// Alias-keyed deprecation snapshot, read-only input to the rule writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionedSnapshot {
    entries: BTreeMap<String, SnapshotEntry>,
}

impl VersionedSnapshot {
    /// Load a snapshot from a JSON file.
    ///
    /// An absent file and a snapshot with no entries are the same
    /// condition for callers: the collect step has not produced anything
    /// to work with yet.
    pub fn load(path: &Path) -> StubGenResult<Self> {
        if !path.exists() {
            return Err(StubGenError::SnapshotMissing {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|source| StubGenError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Self =
            serde_json::from_str(&raw).map_err(|source| StubGenError::SnapshotFormat {
                path: path.to_path_buf(),
                source,
            })?;
        if snapshot.entries.is_empty() {
            return Err(StubGenError::SnapshotMissing {
                path: path.to_path_buf(),
            });
        }
        Ok(snapshot)
    }

    /// Build a snapshot from in-memory entries.
    pub fn from_entries(entries: BTreeMap<String, SnapshotEntry>) -> Self {
        Self { entries }
    }

    /// Aliases whose rename already applies at `target`: every entry with
    /// `min <= target`. The result maps alias to canonical class.
    ///
    /// The included set only grows as the target version increases.
    pub fn filter_for_version(&self, target: &Version) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter(|(_, entry)| &Version::parse(&entry.min) <= target)
            .map(|(alias, entry)| (alias.clone(), entry.new.clone()))
            .collect()
    }

    /// Number of aliases in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
