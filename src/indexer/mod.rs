pub mod options;
pub mod r#trait;
pub mod walk;

pub use options::{DirectoryEntries, IndexOptions, SortOrder};
pub use r#trait::Indexer;
pub use walk::{build_index, DirectoryIndexer};
