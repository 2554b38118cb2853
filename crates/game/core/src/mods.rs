//! Lifecycle contract for content mods.

use crate::registry::{ItemRegistry, RegistryError};

/// Simulation step counter passed to [`Mod::on_tick`].
pub type Tick = u64;

/// A unit of content the host loads once and ticks repeatedly.
///
/// The host calls [`Mod::on_load`] exactly once per process lifetime, before
/// the first simulation step, then [`Mod::on_tick`] every step.
pub trait Mod {
    /// Name used in host logs and error reports.
    fn name(&self) -> &str;

    /// Registers this mod's content.
    ///
    /// # Errors
    ///
    /// Returns the first registry error; remaining registrations are skipped.
    fn on_load(&mut self, registry: &mut dyn ItemRegistry) -> Result<(), RegistryError>;

    /// Per-step update.
    fn on_tick(&mut self, tick: Tick);
}
