//! Outfitter configuration loader.

use std::path::Path;

use outfitter_core::OutfitConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`OutfitConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<OutfitConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<OutfitConfig> {
        let config: OutfitConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}
