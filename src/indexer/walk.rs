use super::options::{DirectoryEntries, IndexOptions};
use super::r#trait::Indexer;
use crate::models::{Index, IndexEntry};
use crate::utils;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

/// Depth-first indexer over local directories.
///
/// Every directory is recorded when it is entered. Every child, file or
/// directory, is recorded again when its parent lists it, after the child's
/// own subtree. Symbolic links below a root are neither followed nor
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndexer {
    options: IndexOptions,
}

impl DirectoryIndexer {
    pub fn new(options: IndexOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> IndexOptions {
        self.options
    }

    /// Walk `roots` in order and sort with the configured [`SortOrder`](super::SortOrder)
    pub fn build<P: AsRef<Path>>(&self, roots: &[P]) -> Index {
        let sort = self.options.sort;
        self.build_by(roots, |a, b| sort.compare(a, b))
    }

    /// Walk `roots` in order and stable-sort display names with `compare`.
    /// Entries comparing equal keep the order in which they were found.
    pub fn build_by<P, F>(&self, roots: &[P], mut compare: F) -> Index
    where
        P: AsRef<Path>,
        F: FnMut(&str, &str) -> Ordering,
    {
        let mut entries = Vec::new();
        for root in roots {
            self.walk_root(root.as_ref(), &mut entries);
        }

        entries.sort_by(|a, b| compare(&a.display_name, &b.display_name));
        info!("Found {} items in {} roots", entries.len(), roots.len());
        Index::from_sorted(entries)
    }

    fn walk_root(&self, root: &Path, entries: &mut Vec<IndexEntry>) {
        let root = match root.canonicalize() {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping root {}: {}", root.display(), e);
                return;
            }
        };
        if !root.is_dir() {
            warn!("Skipping root {}: not a directory", root.display());
            return;
        }

        let before = entries.len();
        let mut walk = Walk::new(self.options.directory_entries, entries);
        for item in WalkDir::new(&root).follow_links(false) {
            match item {
                Ok(entry) => walk.visit(&entry),
                Err(err) => walk.fail(&err),
            }
        }
        walk.finish();

        debug!("Indexed {} entries under {}", entries.len() - before, root.display());
    }
}

impl Indexer for DirectoryIndexer {
    fn build_index(&self, roots: &[PathBuf]) -> Index {
        self.build(roots)
    }
}

/// Build an index with default options: byte-order sort, directories twice
pub fn build_index<P: AsRef<Path>>(roots: &[P]) -> Index {
    DirectoryIndexer::default().build(roots)
}

/// Directory whose subtree is still being walked
struct OpenDir {
    depth: usize,
    /// Entry recorded once the subtree is done; `None` for roots
    listed: Option<IndexEntry>,
}

/// State of one root's walk.
///
/// walkdir yields a directory before reading it and reports a read failure
/// as the very next item, so the entered-entry is held in `pending` until
/// the next item shows whether the directory could be listed.
struct Walk<'a> {
    policy: DirectoryEntries,
    out: &'a mut Vec<IndexEntry>,
    open: Vec<OpenDir>,
    pending: Option<IndexEntry>,
}

impl<'a> Walk<'a> {
    fn new(policy: DirectoryEntries, out: &'a mut Vec<IndexEntry>) -> Self {
        Self {
            policy,
            out,
            open: Vec::new(),
            pending: None,
        }
    }

    fn visit(&mut self, entry: &walkdir::DirEntry) {
        self.flush_pending();
        self.close_until(entry.depth());

        let path = entry.path();
        if entry.depth() > 0 && entry.path_is_symlink() {
            trace!("Skipping symlink {}", path.display());
            return;
        }

        if entry.file_type().is_dir() {
            self.pending = Some(IndexEntry::new(utils::directory_label(path), path));
            let listed = (entry.depth() > 0 && self.policy == DirectoryEntries::Twice)
                .then(|| IndexEntry::new(utils::child_label(path), path));
            self.open.push(OpenDir {
                depth: entry.depth(),
                listed,
            });
        } else {
            self.out.push(IndexEntry::new(utils::child_label(path), path));
        }
    }

    fn fail(&mut self, err: &walkdir::Error) {
        let unreadable = match (&self.pending, err.path()) {
            (Some(pending), Some(path)) => pending.canonical_path.as_path() == path,
            _ => false,
        };

        if unreadable {
            self.pending = None;
            if err.depth() == 0 {
                warn!("Skipping unreadable root: {}", err);
            } else {
                debug!("Skipping unreadable directory: {}", err);
            }
        } else {
            self.flush_pending();
            debug!("Skipping entry: {}", err);
        }
    }

    fn finish(mut self) {
        self.flush_pending();
        self.close_until(0);
    }

    fn flush_pending(&mut self) {
        if let Some(entry) = self.pending.take() {
            self.out.push(entry);
        }
    }

    /// Close every open directory at `depth` or deeper, innermost first
    fn close_until(&mut self, depth: usize) {
        while self.open.last().is_some_and(|dir| dir.depth >= depth) {
            if let Some(listed) = self.open.pop().and_then(|dir| dir.listed) {
                self.out.push(listed);
            }
        }
    }
}
