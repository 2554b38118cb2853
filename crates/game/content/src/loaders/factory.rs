//! Content factory for loading catalogs and configuration from a data directory.

use std::path::{Path, PathBuf};

use factory_core::{Catalog, HostConfig};

use crate::loaders::{ConfigLoader, DataMod, ItemLoader, LoadResult};

/// Content factory that loads item content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── mods/
///     ├── glassworks/
///     │   └── items.ron
///     └── chemistry/
///         └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load host configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<HostConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load host configuration from `config.toml`, or defaults if the file is absent.
    pub fn load_config_or_default(&self) -> LoadResult<HostConfig> {
        let path = self.config_path();
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(HostConfig::default())
        }
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load a data mod from `mods/{name}/items.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Mod directory name, also used as the mod name
    pub fn load_mod(&self, name: &str) -> LoadResult<DataMod> {
        let path = self.data_dir.join("mods").join(name).join("items.ron");
        let catalog = ItemLoader::load(&path)?;
        Ok(DataMod::new(name, catalog))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }
}
