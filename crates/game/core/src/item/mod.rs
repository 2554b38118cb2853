//! Item type definitions.
//!
//! An [`ItemDefinition`] owns an ordered list of [`PartDefinition`]s that the
//! host assembles into the item's model. Definitions are pure values: they are
//! built once, handed to a registry by value, and never shared.
mod color;
mod definition;
mod fuel;
mod part;

pub use color::Rgba;
pub use definition::ItemDefinition;
pub use fuel::{Energy, Fuel, FuelKind};
pub use part::{PartDefinition, Vec3};
