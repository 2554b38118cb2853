//! Host side of the item registration contract.
//!
//! This crate provides the pieces a simulation host needs to accept content:
//! - [`registry`] holds the in-memory item registry that assigns ids
//! - [`assets`] resolves mesh paths referenced by item parts
//! - [`host`] drives mods through load-once / tick-many
pub mod assets;
pub mod error;
pub mod host;
pub mod registry;

pub use assets::{AnyAssets, AssetStore, DirectoryAssets};
pub use error::{HostError, Result};
pub use host::{LoadState, ModHost};
pub use registry::ItemRegistryImpl;
