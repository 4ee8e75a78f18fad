use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One record of the catalogue: a label paired with the path it stands for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// Short human-facing label
    pub display_name: String,
    /// Fully resolved absolute path
    pub canonical_path: PathBuf,
}

impl IndexEntry {
    /// Create a new IndexEntry instance
    pub fn new<S: Into<String>, P: Into<PathBuf>>(display_name: S, canonical_path: P) -> Self {
        Self {
            display_name: display_name.into(),
            canonical_path: canonical_path.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn canonical_path(&self) -> &Path {
        &self.canonical_path
    }
}

/// Ordered sequence of entries produced by a single index build.
///
/// Built once and only read afterwards; a rebuild produces a new value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    /// An index with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_sorted(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<IndexEntry> {
        self.entries
    }
}

impl IntoIterator for Index {
    type Item = IndexEntry;
    type IntoIter = std::vec::IntoIter<IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
