//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use outfitter_core::{ApparelDefinition, OutfitConfig};

use crate::loaders::{ApparelLoader, ConfigLoader, LoadResult};

/// Content factory that loads outfitter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── outfitter.toml
/// └── apparel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load refresh configuration from `outfitter.toml`.
    pub fn load_config(&self) -> LoadResult<OutfitConfig> {
        ConfigLoader::load(&self.data_dir.join("outfitter.toml"))
    }

    /// Load apparel definitions from `apparel.ron`.
    pub fn load_apparel(&self) -> LoadResult<Vec<ApparelDefinition>> {
        ApparelLoader::load(&self.data_dir.join("apparel.ron"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
