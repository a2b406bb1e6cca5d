use super::{Direction, EntityId, Percent, Position};

/// Caster class identifier.
///
/// Determines which combo sequences the spellbook offers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Vocation {
    Knight,
    Paladin,
    Sorcerer,
    Druid,
}

/// One visible hostile, captured at snapshot time.
///
/// Names are carried lowercase by convention; content-table lookups
/// normalize again, so mixed-case input still resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileSnapshot {
    pub id: EntityId,
    pub position: Position,
    pub name: String,
    pub health: Percent,
    pub alive: bool,
}

impl HostileSnapshot {
    pub fn new(
        id: EntityId,
        position: Position,
        name: impl Into<String>,
        health: Percent,
    ) -> Self {
        Self {
            id,
            position,
            name: name.into(),
            health,
            alive: true,
        }
    }

    /// Marks the snapshot as a corpse (builder pattern).
    #[must_use]
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }
}

/// The player's own state at snapshot time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub position: Position,
    pub facing: Direction,
    pub mana: Percent,
    pub vocation: Vocation,
}

/// The current combat target, if one is locked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSnapshot {
    pub id: EntityId,
    pub name: String,
    pub health: Percent,
}

/// Complete per-tick input to the engine.
///
/// The caller captures one of these fresh on every scheduling tick; the
/// engine never retains it beyond the decision it returns, except for the
/// small per-analyzer memories documented on the analyzers themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSnapshot {
    pub player: PlayerSnapshot,
    pub target: Option<TargetSnapshot>,
    pub hostiles: Vec<HostileSnapshot>,
}

impl TickSnapshot {
    pub fn new(player: PlayerSnapshot) -> Self {
        Self {
            player,
            target: None,
            hostiles: Vec::new(),
        }
    }

    /// Sets the locked target (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: TargetSnapshot) -> Self {
        self.target = Some(target);
        self
    }

    /// Appends hostiles (builder pattern).
    #[must_use]
    pub fn with_hostiles(mut self, hostiles: impl IntoIterator<Item = HostileSnapshot>) -> Self {
        self.hostiles.extend(hostiles);
        self
    }

    /// Live hostiles sharing the player's floor.
    ///
    /// Every analyzer filters on exactly this predicate, so it lives here.
    pub fn live_hostiles(&self) -> impl Iterator<Item = &HostileSnapshot> {
        self.hostiles
            .iter()
            .filter(|h| h.alive && h.position.same_floor(&self.player.position))
    }
}
