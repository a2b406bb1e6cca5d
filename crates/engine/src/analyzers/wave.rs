//! Area-effect placement optimization.
//!
//! Finds the caster position, facing direction, and footprint shape that
//! would hit the most hostiles at once, with a cooldown-gated scan of the
//! surrounding neighborhood for better caster tiles.

use arrayvec::ArrayVec;
use combat_core::{CombatEnv, Direction, EngineConfig, Position, TickSnapshot};

/// Upper bound on footprint size; the `Large` shape covers 29 tiles.
const MAX_FOOTPRINT_TILES: usize = 32;

/// Half-width of the reposition scan window (5x5 neighborhood).
const REPOSITION_SCAN_RADIUS: i32 = 2;

/// Named area-effect footprint.
///
/// A footprint is a wedge: at each distance step `d` along the facing axis
/// the covered row spreads `min(d, cap)` tiles to either side, so rows widen
/// with distance up to the shape's cap.
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
pub enum WaveShape {
    Small,
    Large,
}

impl WaveShape {
    /// Both shapes in evaluation order (part of the documented tie-break).
    pub const ALL: [WaveShape; 2] = [WaveShape::Small, WaveShape::Large];

    /// How far the wedge extends along the facing axis.
    pub const fn extent(self) -> i32 {
        match self {
            WaveShape::Small => 3,
            WaveShape::Large => 5,
        }
    }

    /// Cap on the perpendicular spread at any distance step.
    pub const fn spread_cap(self) -> i32 {
        match self {
            WaveShape::Small => 2,
            WaveShape::Large => 3,
        }
    }

    /// Tiles covered when cast from `origin` facing `direction`.
    pub fn footprint(
        self,
        origin: Position,
        direction: Direction,
    ) -> ArrayVec<Position, MAX_FOOTPRINT_TILES> {
        let mut tiles = ArrayVec::new();
        let perpendicular = direction.perpendicular();
        for step in 1..=self.extent() {
            let center = origin.translated(direction, step);
            let spread = step.min(self.spread_cap());
            for offset in -spread..=spread {
                tiles.push(center.translated(perpendicular, offset));
            }
        }
        tiles
    }
}

/// Best area-spell cast found for the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveCast {
    /// Tile to cast from; the player's own tile unless a reposition won.
    pub position: Position,
    pub direction: Direction,
    pub shape: WaveShape,
    /// Live hostiles inside the footprint.
    pub monster_count: u32,
    /// True when the winning candidate came from the neighborhood scan and
    /// the player would have to move first.
    pub needs_reposition: bool,
}

/// Finds the best simultaneous-hit area cast, if any qualifies.
///
/// Holds one piece of memory between ticks: the timestamp of the last
/// suggested reposition, which gates the neighborhood scan.
#[derive(Debug, Default)]
pub struct WaveOptimizer {
    last_reposition_ms: Option<u64>,
}

impl WaveOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches for the best cast.
    ///
    /// In-place evaluation tries all 4 directions x 2 shapes from the
    /// player's tile; ties resolve to the first combination found, in
    /// [`Direction::ALL`] x [`WaveShape::ALL`] order. When the reposition
    /// cooldown has elapsed, the surrounding 5x5 neighborhood (walkable
    /// tiles only, `Large` shape) is scanned as well; a scanned candidate
    /// only wins if it beats the running best by more than one hit, a
    /// deliberate bias against moving for marginal gains.
    ///
    /// Returns `None` when the best count is below
    /// `config.wave_min_targets`; zero hostiles can never produce a cast.
    pub fn find_optimal_cast(
        &mut self,
        config: &EngineConfig,
        snapshot: &TickSnapshot,
        env: &CombatEnv<'_>,
    ) -> Option<WaveCast> {
        let origin = snapshot.player.position;

        let mut best: Option<WaveCast> = None;
        for direction in Direction::ALL {
            for shape in WaveShape::ALL {
                let count = count_hits(snapshot, origin, direction, shape);
                if count > best.map_or(0, |b| b.monster_count) {
                    best = Some(WaveCast {
                        position: origin,
                        direction,
                        shape,
                        monster_count: count,
                        needs_reposition: false,
                    });
                }
            }
        }

        let now = env.now_ms();
        let cooldown_elapsed = self
            .last_reposition_ms
            .is_none_or(|last| now.saturating_sub(last) >= config.reposition_cooldown_ms);
        if cooldown_elapsed {
            for dy in -REPOSITION_SCAN_RADIUS..=REPOSITION_SCAN_RADIUS {
                for dx in -REPOSITION_SCAN_RADIUS..=REPOSITION_SCAN_RADIUS {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let candidate = Position::new(origin.x + dx, origin.y + dy, origin.z);
                    if !env.spatial().is_walkable(candidate) {
                        continue;
                    }
                    for direction in Direction::ALL {
                        let count = count_hits(snapshot, candidate, direction, WaveShape::Large);
                        // Moving has a cost, so a marginal +1 never wins.
                        if count > best.map_or(0, |b| b.monster_count) + 1 {
                            best = Some(WaveCast {
                                position: candidate,
                                direction,
                                shape: WaveShape::Large,
                                monster_count: count,
                                needs_reposition: true,
                            });
                        }
                    }
                }
            }
        }

        let cast = best.filter(|cast| cast.monster_count >= config.wave_min_targets)?;
        if cast.needs_reposition {
            self.last_reposition_ms = Some(now);
        }
        tracing::debug!(
            "WaveOptimizer: {} hits, {} {} from {}{}",
            cast.monster_count,
            cast.shape,
            cast.direction,
            cast.position,
            if cast.needs_reposition {
                " (reposition)"
            } else {
                ""
            }
        );
        Some(cast)
    }
}

fn count_hits(
    snapshot: &TickSnapshot,
    origin: Position,
    direction: Direction,
    shape: WaveShape,
) -> u32 {
    let tiles = shape.footprint(origin, direction);
    snapshot
        .live_hostiles()
        .filter(|h| tiles.contains(&h.position))
        .count() as u32
}
