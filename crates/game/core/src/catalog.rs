//! Ordered item catalogs.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::item::ItemDefinition;
use crate::registry::{ItemId, ItemRegistry, RegistryError};

/// Ordered list of item definitions.
///
/// Order is registration order, which the host may surface to players.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ItemDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ItemDefinition) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    /// Validates every item and checks that names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first problem in catalog order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.name.as_str()) {
                return Err(ValidationError::DuplicateName(item.name.clone()));
            }
        }
        Ok(())
    }

    /// Moves every item into `registry` in catalog order.
    ///
    /// Stops at the first refusal; items after it are not submitted.
    pub fn register_all(
        self,
        registry: &mut dyn ItemRegistry,
    ) -> Result<Vec<ItemId>, RegistryError> {
        self.items
            .into_iter()
            .map(|item| registry.register(item))
            .collect()
    }

    pub fn into_inner(self) -> Vec<ItemDefinition> {
        self.items
    }
}

impl From<Vec<ItemDefinition>> for Catalog {
    fn from(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }
}

impl FromIterator<ItemDefinition> for Catalog {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = ItemDefinition;
    type IntoIter = std::vec::IntoIter<ItemDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
