//! Grid primitives and per-tick world snapshots.
//!
//! The engine observes the world exclusively through the types in this
//! module: a [`TickSnapshot`] captured fresh by the caller each scheduling
//! tick, built from [`HostileSnapshot`] entries and a [`PlayerSnapshot`].
//! Nothing here references live game state.
mod common;
mod snapshot;

pub use common::{Direction, EntityId, Percent, Position};
pub use snapshot::{HostileSnapshot, PlayerSnapshot, TargetSnapshot, TickSnapshot, Vocation};
