//! Mod host: runs every mod's load hook once, then ticks them.

use factory_core::{HostConfig, Mod, Tick};
use tracing::{info, trace, warn};

use crate::assets::DirectoryAssets;
use crate::error::{HostError, Result};
use crate::registry::ItemRegistryImpl;

/// Lifecycle of the host's content.
///
/// `Unregistered -> Registered` on a successful load, `Unregistered -> Failed`
/// when any mod's load fails. Neither transition can be undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Unregistered,
    Registered,
    Failed,
}

/// Owns the item registry and the mods that fill it.
///
/// Design: mods receive the registry as an explicit `&mut` capability during
/// load; they never hold on to it.
pub struct ModHost {
    registry: ItemRegistryImpl,
    mods: Vec<Box<dyn Mod>>,
    state: LoadState,
    tick: Tick,
}

impl ModHost {
    pub fn new(registry: ItemRegistryImpl) -> Self {
        Self {
            registry,
            mods: Vec::new(),
            state: LoadState::Unregistered,
            tick: 0,
        }
    }

    /// Creates a host whose registry resolves meshes under `config.asset_root`.
    ///
    /// Only asset resolution is taken from `config`. `validate_locally` is a
    /// per-mod switch (`BaseMod::with_validation`, `DataMod::with_validation`)
    /// and must be applied when the mods are built. The registry runs its own
    /// checks either way.
    pub fn from_config(config: &HostConfig) -> Self {
        let registry = match &config.asset_root {
            Some(root) => ItemRegistryImpl::with_assets(DirectoryAssets::new(root)),
            None => ItemRegistryImpl::new(),
        };
        Self::new(registry)
    }

    /// Appends a mod; mods load in the order they are added.
    pub fn add_mod(&mut self, m: impl Mod + 'static) {
        self.mods.push(Box::new(m));
    }

    #[must_use]
    pub fn with_mod(mut self, m: impl Mod + 'static) -> Self {
        self.add_mod(m);
        self
    }

    /// Runs `on_load` for every mod, in order.
    ///
    /// # Errors
    ///
    /// - [`HostError::AlreadyLoaded`] if load has already run, successfully or not
    /// - [`HostError::Registration`] with the first registry refusal; later
    ///   mods are not loaded
    pub fn load(&mut self) -> Result<()> {
        if self.state != LoadState::Unregistered {
            return Err(HostError::AlreadyLoaded);
        }

        for m in self.mods.iter_mut() {
            let before = self.registry.len();
            if let Err(source) = m.on_load(&mut self.registry) {
                warn!(mod_name = m.name(), error = %source, "mod load failed");
                self.state = LoadState::Failed;
                return Err(HostError::Registration {
                    mod_name: m.name().to_owned(),
                    source,
                });
            }
            info!(
                mod_name = m.name(),
                items = self.registry.len() - before,
                "mod loaded"
            );
        }

        self.state = LoadState::Registered;
        Ok(())
    }

    /// Advances one simulation step and runs every mod's `on_tick`.
    ///
    /// Returns the tick that was just run.
    pub fn tick(&mut self) -> Result<Tick> {
        if self.state != LoadState::Registered {
            return Err(HostError::NotLoaded);
        }

        let tick = self.tick;
        for m in self.mods.iter_mut() {
            m.on_tick(tick);
        }
        trace!(tick, "tick");

        self.tick += 1;
        Ok(tick)
    }

    pub fn registry(&self) -> &ItemRegistryImpl {
        &self.registry
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> Tick {
        self.tick
    }

    pub fn mod_names(&self) -> impl Iterator<Item = &str> {
        self.mods.iter().map(|m| m.name())
    }
}
