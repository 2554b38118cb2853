//! Item content and loaders.
//!
//! This crate houses the built-in item catalog and loaders for data files:
//! - The `base` mod (raw resources, refined materials, components)
//! - Item catalogs (data-driven via RON)
//! - Host configuration (data-driven via TOML)
//!
//! Content never touches a registry directly; everything is submitted
//! through the [`factory_core::ItemRegistry`] the host passes in.

pub mod base;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use base::BaseMod;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, DataMod, ItemLoader};
