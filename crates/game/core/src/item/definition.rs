use super::{Fuel, PartDefinition};
use crate::error::ValidationError;

/// Item type definition handed to the host registry.
///
/// # Design: Gameplay fields + visual parts
///
/// - `arm_v`, `minable`, `fuel` describe how the simulation treats the item
/// - `parts` describe how the host assembles the item's model, in order
///
/// The host owns the definition once registered; nothing here is shared.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    /// Registry key; unique across the registry.
    pub name: String,

    /// Armor offset. Positive for raw/solid items, negative for thin
    /// processed goods. The host interprets the value.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub arm_v: Option<f32>,

    /// Extracted by mining.
    #[cfg_attr(feature = "serde", serde(default))]
    pub minable: bool,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fuel: Option<Fuel>,

    pub parts: Vec<PartDefinition>,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arm_v: None,
            minable: false,
            fuel: None,
            parts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arm_v(mut self, arm_v: f32) -> Self {
        self.arm_v = Some(arm_v);
        self
    }

    #[must_use]
    pub fn minable(mut self) -> Self {
        self.minable = true;
        self
    }

    #[must_use]
    pub fn with_fuel(mut self, fuel: Fuel) -> Self {
        self.fuel = Some(fuel);
        self
    }

    /// Appends a part; parts render in the order they are added.
    #[must_use]
    pub fn with_part(mut self, part: PartDefinition) -> Self {
        self.parts.push(part);
        self
    }

    pub fn is_fuel(&self) -> bool {
        self.fuel.is_some()
    }

    /// Checks the item and every part.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, item-level checks first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.parts.is_empty() {
            return Err(ValidationError::EmptyParts(self.name.clone()));
        }
        if self.arm_v.is_some_and(|v| !v.is_finite()) {
            return Err(ValidationError::NonFiniteArmor(self.name.clone()));
        }
        if self.fuel.is_some_and(|f| f.energy.is_zero()) {
            return Err(ValidationError::ZeroFuelEnergy(self.name.clone()));
        }

        self.parts
            .iter()
            .enumerate()
            .try_for_each(|(index, part)| part.validate(&self.name, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Energy, Rgba, Vec3};

    fn coal() -> ItemDefinition {
        ItemDefinition::new("coal")
            .with_arm_v(0.2)
            .minable()
            .with_fuel(Fuel::chemical(Energy::mega(20)))
            .with_part(
                PartDefinition::new("models/coal.stl", Rgba(0x444444ff))
                    .with_gloss(16.0)
                    .with_scale(Vec3::splat(0.6))
                    .with_translate(Vec3::new(0.05, 0.0, 0.0)),
            )
    }

    #[test]
    fn builder_sets_fields() {
        let item = coal();
        assert_eq!(item.name, "coal");
        assert_eq!(item.arm_v, Some(0.2));
        assert!(item.minable);
        assert!(item.is_fuel());
        assert_eq!(item.parts.len(), 1);
        assert_eq!(item.validate(), Ok(()));
    }

    #[test]
    fn new_item_defaults() {
        let item = ItemDefinition::new("brick");
        assert!(!item.minable);
        assert_eq!(item.fuel, None);
        assert_eq!(item.arm_v, None);
    }

    #[test]
    fn empty_parts_rejected() {
        let item = ItemDefinition::new("ghost");
        assert_eq!(
            item.validate(),
            Err(ValidationError::EmptyParts("ghost".into()))
        );
    }

    #[test]
    fn empty_name_rejected() {
        let mut item = coal();
        item.name.clear();
        assert_eq!(item.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn zero_energy_fuel_rejected() {
        let item = coal().with_fuel(Fuel::chemical(Energy::ZERO));
        assert_eq!(
            item.validate(),
            Err(ValidationError::ZeroFuelEnergy("coal".into()))
        );
    }

    #[test]
    fn part_errors_carry_index() {
        let item = coal().with_part(
            PartDefinition::new("models/coal.stl", Rgba(0x444444ff)).with_gloss(f32::INFINITY),
        );
        assert!(matches!(
            item.validate(),
            Err(ValidationError::InvalidGloss { part: 1, .. })
        ));
    }
}
