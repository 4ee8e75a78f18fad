use crate::models::Index;
use std::path::PathBuf;

/// Trait for indexers that turn a list of root directories into an Index
pub trait Indexer: Send + Sync {
    /// Walk every root in order and return the finished, sorted index.
    ///
    /// Roots that are missing or unreadable contribute nothing; this never fails.
    fn build_index(&self, roots: &[PathBuf]) -> Index;
}
