//! In-memory host item registry.
use std::collections::{BTreeSet, HashMap};

use factory_core::{ItemDefinition, ItemId, ItemRegistry, RegistryError};
use tracing::{debug, warn};

use crate::assets::{AnyAssets, AssetStore};

/// [`ItemRegistry`] implementation holding definitions in memory.
///
/// Ids are assigned sequentially from 1 in registration order. The registry
/// never updates an existing entry; a repeated name is refused.
pub struct ItemRegistryImpl {
    definitions: Vec<ItemDefinition>,
    names: HashMap<String, ItemId>,
    mining: BTreeSet<ItemId>,
    assets: Box<dyn AssetStore>,
}

impl ItemRegistryImpl {
    pub fn new() -> Self {
        Self::with_assets(AnyAssets)
    }

    /// Creates a registry that refuses parts whose meshes `assets` cannot resolve.
    pub fn with_assets(assets: impl AssetStore + 'static) -> Self {
        Self {
            definitions: Vec::new(),
            names: HashMap::new(),
            mining: BTreeSet::new(),
            assets: Box::new(assets),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.definitions.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn id_of(&self, name: &str) -> Option<ItemId> {
        self.names.get(name).copied()
    }

    /// Registered items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ItemDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(index, def)| (ItemId(index as u32 + 1), def))
    }

    /// Ids of items extracted by mining, ascending.
    pub fn minables(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.mining.iter().copied()
    }

    /// Items that carry fuel.
    pub fn fuels(&self) -> impl Iterator<Item = (ItemId, &ItemDefinition)> {
        self.iter().filter(|(_, def)| def.is_fuel())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Drops every item and restarts the id sequence.
    pub fn reset(&mut self) {
        debug!(items = self.definitions.len(), "item registry reset");
        self.definitions.clear();
        self.names.clear();
        self.mining.clear();
    }

    fn next_id(&self) -> ItemId {
        ItemId(self.definitions.len() as u32 + 1)
    }

    fn check(&self, definition: &ItemDefinition) -> Result<(), RegistryError> {
        if self.names.contains_key(&definition.name) {
            return Err(RegistryError::DuplicateName(definition.name.clone()));
        }
        if definition.parts.is_empty() {
            return Err(RegistryError::EmptyParts(definition.name.clone()));
        }

        let unresolved = definition
            .parts
            .iter()
            .flat_map(|part| part.mesh_paths())
            .find(|path| !self.assets.contains(path));
        if let Some(path) = unresolved {
            return Err(RegistryError::UnresolvedAsset {
                item: definition.name.clone(),
                path: path.to_owned(),
            });
        }

        definition.validate().map_err(RegistryError::from)
    }
}

impl Default for ItemRegistryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry for ItemRegistryImpl {
    fn register(&mut self, definition: ItemDefinition) -> Result<ItemId, RegistryError> {
        if let Err(e) = self.check(&definition) {
            warn!(item = %definition.name, error = %e, "item refused");
            return Err(e);
        }

        let id = self.next_id();
        if definition.minable {
            self.mining.insert(id);
        }
        self.names.insert(definition.name.clone(), id);
        debug!(item = %definition.name, %id, parts = definition.parts.len(), "item registered");
        self.definitions.push(definition);

        Ok(id)
    }
}

impl std::fmt::Debug for ItemRegistryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemRegistryImpl")
            .field("items", &self.definitions.len())
            .field("mining", &self.mining)
            .finish_non_exhaustive()
    }
}
