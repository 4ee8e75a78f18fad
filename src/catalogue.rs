use crate::indexer::{DirectoryIndexer, Indexer};
use crate::models::Index;
use crate::source::PathSource;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Holds the index currently served to the query side.
///
/// A rebuild walks into a fresh [`Index`] and only then replaces the
/// published one, so readers see either the old index or the new one.
/// Rebuilds are serialized.
pub struct Catalogue<I: Indexer = DirectoryIndexer> {
    indexer: I,
    current: RwLock<Arc<Index>>,
    rebuild_lock: Mutex<()>,
}

impl<I: Indexer> Catalogue<I> {
    /// Create a catalogue that starts out empty
    pub fn new(indexer: I) -> Self {
        Self {
            indexer,
            current: RwLock::new(Arc::new(Index::empty())),
            rebuild_lock: Mutex::new(()),
        }
    }

    pub fn indexer(&self) -> &I {
        &self.indexer
    }

    /// Snapshot of the published index
    pub fn current(&self) -> Arc<Index> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve roots from `source` and rebuild.
    ///
    /// If the source fails, the previously published index is kept.
    pub fn rebuild<S: PathSource + ?Sized>(&self, source: &S) -> Result<Arc<Index>> {
        let roots = source.roots().context("Failed to resolve index roots")?;
        Ok(self.rebuild_from(&roots))
    }

    /// Rebuild from an explicit root list and publish the result
    pub fn rebuild_from(&self, roots: &[PathBuf]) -> Arc<Index> {
        let _guard = self
            .rebuild_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let index = Arc::new(self.indexer.build_index(roots));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&index);
        tracing::debug!("Published index with {} entries", index.len());

        index
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new(DirectoryIndexer::default())
    }
}
