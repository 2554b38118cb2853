//! Item catalog loader.

use std::path::Path;

use factory_core::{Catalog, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns the items in file order.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog {}: {}", path.display(), e))
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: ItemCatalog = ron::from_str(content)?;
        Ok(catalog.items.into())
    }

    /// Render a catalog as RON text that [`ItemLoader::parse`] accepts.
    pub fn to_ron(catalog: &Catalog) -> LoadResult<String> {
        let file = ItemCatalog {
            items: catalog.iter().cloned().collect(),
        };
        Ok(ron::ser::to_string_pretty(
            &file,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}
