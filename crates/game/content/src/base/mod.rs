//! Built-in `base` mod: the reference item catalog.
//!
//! Registers raw resources (log, ores, coal, stone), refined metals (ingots,
//! sheets), masonry, and components (wire, circuit board, pipe) in a fixed
//! order on load. The tick hook does nothing.

mod items;

use factory_core::{ItemRegistry, Mod, RegistryError, Tick};
use tracing::{debug, info};

pub use items::catalog;

/// Named paint colors shared by several items.
pub mod colors {
    use factory_core::Rgba;

    pub const WHITE: Rgba = Rgba(0xffffffff);
    pub const PERU: Rgba = Rgba(0xCD853Fff);
    pub const COPPER: Rgba = Rgba(0xda8a67ff);
    pub const STEEL: Rgba = Rgba(0xB0C4DEff);
}

/// Named mesh paths.
pub mod models {
    pub const DROPLET: &str = "models/fluid.stl";
}

/// Gloss applied to metal surfaces.
pub const METALLIC: f32 = 16.0;

/// The `base` mod.
#[derive(Clone, Debug)]
pub struct BaseMod {
    validate_locally: bool,
}

impl BaseMod {
    pub const NAME: &'static str = "base";

    pub fn new() -> Self {
        Self {
            validate_locally: true,
        }
    }

    /// Skips the local catalog check and leaves every check to the registry.
    pub fn without_validation() -> Self {
        Self {
            validate_locally: false,
        }
    }

    pub fn with_validation(validate_locally: bool) -> Self {
        Self { validate_locally }
    }
}

impl Default for BaseMod {
    fn default() -> Self {
        Self::new()
    }
}

impl Mod for BaseMod {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_load(&mut self, registry: &mut dyn ItemRegistry) -> Result<(), RegistryError> {
        let catalog = catalog();
        if self.validate_locally {
            catalog.validate()?;
        }

        let count = catalog.len();
        for item in catalog {
            let name = item.name.clone();
            let id = registry.register(item)?;
            debug!(item = %name, %id, "registered");
        }

        info!(mod_name = Self::NAME, items = count, "base items registered");
        Ok(())
    }

    fn on_tick(&mut self, _tick: Tick) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_core::{ItemDefinition, ItemId};

    #[derive(Default)]
    struct Recorder {
        items: Vec<ItemDefinition>,
    }

    impl ItemRegistry for Recorder {
        fn register(&mut self, definition: ItemDefinition) -> Result<ItemId, RegistryError> {
            if self.items.iter().any(|item| item.name == definition.name) {
                return Err(RegistryError::DuplicateName(definition.name));
            }
            self.items.push(definition);
            Ok(ItemId(self.items.len() as u32))
        }
    }

    #[test]
    fn load_registers_whole_catalog() {
        let mut registry = Recorder::default();
        BaseMod::new().on_load(&mut registry).unwrap();

        assert_eq!(registry.items.len(), 13);
        assert_eq!(registry.items, catalog().into_inner());
    }

    #[test]
    fn second_load_fails_on_first_item() {
        let mut registry = Recorder::default();
        let mut base = BaseMod::new();
        base.on_load(&mut registry).unwrap();

        let err = base.on_load(&mut registry).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("log".into()));
        assert_eq!(registry.items.len(), 13);
    }

    #[test]
    fn tick_leaves_registry_untouched() {
        let mut registry = Recorder::default();
        let mut base = BaseMod::without_validation();
        base.on_load(&mut registry).unwrap();
        for tick in 0..100 {
            base.on_tick(tick);
        }
        assert_eq!(registry.items.len(), 13);
    }

    #[test]
    fn named_colors() {
        assert_eq!(colors::WHITE.packed(), 0xffffffff);
        assert_eq!(colors::PERU.r(), 0xcd);
        assert_eq!(colors::STEEL.b(), 0xde);
        assert_eq!(models::DROPLET, "models/fluid.stl");
    }
}
