//! Content loaders for reading outfitter data from files.
//!
//! Every loader parses straight into outfitter-core types through their serde
//! derives.

pub mod apparel;
pub mod config;
pub mod factory;

pub use apparel::{ApparelCatalog, ApparelLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
