pub mod catalogue;
pub mod config;
pub mod constants;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod source;
pub mod utils;

pub use catalogue::Catalogue;
pub use config::Config;
pub use indexer::{build_index, DirectoryIndexer, Indexer, IndexOptions};
pub use models::{Index, IndexEntry};
pub use source::PathSource;
