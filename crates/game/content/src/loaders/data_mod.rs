//! Mods whose items come from a RON catalog instead of code.

use factory_core::{Catalog, ItemRegistry, Mod, RegistryError, Tick};
use tracing::info;

/// A mod that registers a catalog loaded from disk.
///
/// Every load submits the whole catalog, so loading twice against one
/// registry fails on the first repeated name, like any other mod.
#[derive(Clone, Debug)]
pub struct DataMod {
    name: String,
    catalog: Catalog,
    validate_locally: bool,
}

impl DataMod {
    pub fn new(name: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            name: name.into(),
            catalog,
            validate_locally: true,
        }
    }

    #[must_use]
    pub fn with_validation(mut self, validate_locally: bool) -> Self {
        self.validate_locally = validate_locally;
        self
    }

    /// Items submitted on each load.
    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }
}

impl Mod for DataMod {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_load(&mut self, registry: &mut dyn ItemRegistry) -> Result<(), RegistryError> {
        if self.validate_locally {
            self.catalog.validate()?;
        }

        let ids = self.catalog.clone().register_all(registry)?;
        info!(mod_name = %self.name, items = ids.len(), "data items registered");
        Ok(())
    }

    fn on_tick(&mut self, _tick: Tick) {}
}
