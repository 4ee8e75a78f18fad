use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparison applied to display names when the index is sorted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Byte order of the UTF-8 names, uppercase before lowercase
    #[default]
    Lexicographic,
    /// Unicode lowercase comparison; names equal under folding fall back to
    /// byte order
    CaseInsensitive,
}

impl SortOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SortOrder::Lexicographic => a.cmp(b),
            SortOrder::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
                .then_with(|| a.cmp(b)),
        }
    }
}

/// How many entries a non-root directory contributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryEntries {
    /// Once when entered and once when listed by its parent
    #[default]
    Twice,
    /// Only when entered
    Once,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    pub sort: SortOrder,
    pub directory_entries: DirectoryEntries,
}
