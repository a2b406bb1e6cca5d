//! Canonical data model and collaborator boundary for the combat decision
//! engine.
//!
//! `combat-core` defines the grid types, per-tick snapshots, engine
//! configuration, and the read-only oracle traits through which the engine
//! observes the world. Everything here is plain data: the crate performs no
//! IO, keeps no hidden globals, and never mutates game state.
pub mod config;
pub mod env;
pub mod state;

pub use config::{ConfigError, EngineConfig};
pub use env::{
    AlwaysCastable, ClockOracle, CombatEnv, ManualClock, OpenField, SpatialOracle, SpellOracle,
    SystemClock, TileSet,
};
pub use state::{
    Direction, EntityId, HostileSnapshot, Percent, PlayerSnapshot, Position, TargetSnapshot,
    TickSnapshot, Vocation,
};
