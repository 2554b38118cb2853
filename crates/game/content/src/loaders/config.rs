//! Host configuration loader.

use std::path::Path;

use factory_core::HostConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for host configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing HostConfig
    ///
    /// # Returns
    ///
    /// Returns a HostConfig. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<HostConfig> {
        let content = read_file(path)?;
        let config: HostConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
