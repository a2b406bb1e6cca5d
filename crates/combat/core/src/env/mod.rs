//! Traits describing the engine's read-only collaborators.
//!
//! Oracles expose tile walkability, the monotonic clock, and spell
//! castability. The [`CombatEnv`] aggregate bundles them so analyzers can
//! reach everything they need without hard coupling to a live game runtime;
//! tests substitute deterministic implementations.
mod clock;
mod spatial;
mod spells;

pub use clock::{ClockOracle, ManualClock, SystemClock};
pub use spatial::{OpenField, SpatialOracle, TileSet};
pub use spells::{AlwaysCastable, SpellOracle};

/// Aggregates the read-only oracles required by the analyzers.
///
/// All three collaborators are mandatory: a missing one is a type error at
/// the construction site rather than a per-call check, which keeps every
/// per-tick computation total.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    spatial: &'a dyn SpatialOracle,
    clock: &'a dyn ClockOracle,
    spells: &'a dyn SpellOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        spatial: &'a dyn SpatialOracle,
        clock: &'a dyn ClockOracle,
        spells: &'a dyn SpellOracle,
    ) -> Self {
        Self {
            spatial,
            clock,
            spells,
        }
    }

    pub fn spatial(&self) -> &'a dyn SpatialOracle {
        self.spatial
    }

    pub fn clock(&self) -> &'a dyn ClockOracle {
        self.clock
    }

    pub fn spells(&self) -> &'a dyn SpellOracle {
        self.spells
    }

    /// Shorthand for the injected monotonic time.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

impl std::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatEnv").finish_non_exhaustive()
    }
}
