//! Item schema and registration contract shared across the workspace.
//!
//! `factory-core` defines the declarative data model for item types (parts,
//! paint, gloss, fuel) and the two seams a host exposes to content:
//! [`ItemRegistry`], the capability used to register definitions, and
//! [`Mod`], the load-once / tick-many lifecycle the host drives.
//!
//! Nothing in this crate performs I/O. Registries are always passed in
//! explicitly, so content can be exercised against any implementation.
pub mod catalog;
pub mod config;
pub mod error;
pub mod item;
pub mod mods;
pub mod registry;

pub use catalog::Catalog;
pub use config::HostConfig;
pub use error::{CatalogError, ErrorSeverity, ValidationError};
pub use item::{Energy, Fuel, FuelKind, ItemDefinition, PartDefinition, Rgba, Vec3};
pub use mods::{Mod, Tick};
pub use registry::{ItemId, ItemRegistry, RegistryError};
