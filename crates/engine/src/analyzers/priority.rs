//! Kill-priority ranking.
//!
//! Scores every live hostile by how urgently it should die: almost-dead
//! targets first, dangerous and valuable ones next, distant ones later, with
//! a bonus for wounded hostiles in the band where they tend to flee.

use combat_core::{CombatEnv, EngineConfig, EntityId, Percent, Position, TickSnapshot};
use combat_content::bestiary::{self, DangerTier};

/// One ranked hostile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityEntry {
    pub id: EntityId,
    pub name: String,
    pub health: Percent,
    /// Kill-urgency score, clamped to >= 0.
    pub score: f64,
    pub position: Position,
}

/// Rate-limited kill-urgency ranking over the visible hostiles.
///
/// Recomputes at most once per `priority_refresh_ms`; calls inside the
/// window return the cached list unchanged, so the ranking stays stable
/// across the handful of ticks an attack takes to land.
#[derive(Debug, Default)]
pub struct KillPriorityRanker {
    entries: Vec<PriorityEntry>,
    last_update_ms: Option<u64>,
}

impl KillPriorityRanker {
    /// Base value of the low-health tier bonus; the tiers award 2x, 1.5x,
    /// and 1x this value.
    pub const LOW_HP_BASE: f64 = 50.0;
    /// Weight on the normalized danger rating.
    pub const DANGER_BONUS_WEIGHT: f64 = 10.0;
    /// Weight on the loot-value table entry.
    pub const LOOT_VALUE_WEIGHT: f64 = 0.2;
    /// Score lost per tile of Chebyshev distance.
    pub const DISTANCE_PENALTY: f64 = 2.0;
    /// Bonus for wounded hostiles in the escape band.
    pub const ESCAPE_BONUS: f64 = 30.0;
    /// Inner edge of the escape band; melee-range hostiles cannot slip away.
    const ESCAPE_BAND_INNER: u32 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the ranking if the refresh interval has elapsed, then
    /// returns the (possibly cached) sorted list.
    pub fn update(
        &mut self,
        config: &EngineConfig,
        snapshot: &TickSnapshot,
        env: &CombatEnv<'_>,
    ) -> &[PriorityEntry] {
        let now = env.now_ms();
        if let Some(last) = self.last_update_ms
            && now.saturating_sub(last) < config.priority_refresh_ms
        {
            return &self.entries;
        }
        self.last_update_ms = Some(now);

        let player_position = snapshot.player.position;
        self.entries = snapshot
            .live_hostiles()
            .map(|hostile| {
                let distance = player_position.chebyshev(&hostile.position);
                let score = Self::score(config, &hostile.name, hostile.health, distance);
                PriorityEntry {
                    id: hostile.id,
                    name: hostile.name.clone(),
                    health: hostile.health,
                    score,
                    position: hostile.position,
                }
            })
            .collect();
        // Stable sort: equal scores keep scan order.
        self.entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "KillPriorityRanker: {} entries, top={}",
            self.entries.len(),
            self.entries
                .first()
                .map_or("none", |entry| entry.name.as_str())
        );
        &self.entries
    }

    /// The cached ranking without recomputation.
    pub fn entries(&self) -> &[PriorityEntry] {
        &self.entries
    }

    fn score(config: &EngineConfig, name: &str, health: Percent, distance: u32) -> f64 {
        let hp = health.value();
        let low_hp_bonus = match hp {
            0..=15 => 2.0 * Self::LOW_HP_BASE,
            16..=25 => 1.5 * Self::LOW_HP_BASE,
            26..=40 => Self::LOW_HP_BASE,
            _ => 0.0,
        };
        let danger_bonus = f64::from(bestiary::danger_rating(name))
            / f64::from(DangerTier::Default.rating())
            * Self::DANGER_BONUS_WEIGHT;
        let loot_bonus = f64::from(bestiary::loot_value(name)) * Self::LOOT_VALUE_WEIGHT;
        let escape_bonus = if hp <= 30
            && distance > Self::ESCAPE_BAND_INNER
            && distance <= config.escape_radius
        {
            Self::ESCAPE_BONUS
        } else {
            0.0
        };

        let score = low_hp_bonus + danger_bonus + loot_bonus
            - f64::from(distance) * Self::DISTANCE_PENALTY
            + escape_bonus;
        score.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{
        AlwaysCastable, Direction, HostileSnapshot, ManualClock, OpenField, PlayerSnapshot,
        Vocation,
    };

    fn snapshot(hostiles: Vec<HostileSnapshot>) -> TickSnapshot {
        TickSnapshot::new(PlayerSnapshot {
            position: Position::ORIGIN,
            facing: Direction::North,
            mana: Percent::FULL,
            vocation: Vocation::Paladin,
        })
        .with_hostiles(hostiles)
    }

    fn hostile(id: u32, name: &str, hp: u8, x: i32, y: i32) -> HostileSnapshot {
        HostileSnapshot::new(
            EntityId(id),
            Position::new(x, y, 0),
            name,
            Percent::new(hp),
        )
    }

    #[test]
    fn test_scores_are_never_negative() {
        // A healthy default creature 50 tiles out: 0 + 10 + 2 - 100 clamps
        // to zero instead of going negative.
        let snapshot = snapshot(vec![hostile(1, "rat", 100, 50, 50)]);
        let clock = ManualClock::new(0);
        let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);
        let mut ranker = KillPriorityRanker::new();

        let entries = ranker.update(&EngineConfig::default(), &snapshot, &env);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].score, 0.0);
    }

    #[test]
    fn test_low_health_tiers() {
        let config = EngineConfig::default();
        let at = |hp: u8| KillPriorityRanker::score(&config, "rat", Percent::new(hp), 0);
        // Adjacent default creature: bonus + 10 + 2 with no distance loss.
        let floor = 10.0 + 2.0;
        assert!((at(10) - (100.0 + floor)).abs() < 1e-9);
        assert!((at(20) - (75.0 + floor)).abs() < 1e-9);
        assert!((at(35) - (50.0 + floor)).abs() < 1e-9);
        assert!((at(80) - floor).abs() < 1e-9);
    }

    #[test]
    fn test_escape_band_applies_to_wounded_runners_only() {
        let config = EngineConfig::default();
        let score = |hp: u8, distance: u32| {
            KillPriorityRanker::score(&config, "rat", Percent::new(hp), distance)
        };
        // Wounded and in the band.
        assert!(
            score(25, 4) - score(25, 3)
                > KillPriorityRanker::ESCAPE_BONUS - KillPriorityRanker::DISTANCE_PENALTY - 1e-9
        );
        // Healthy in the band: no bonus.
        assert!(score(80, 4) < score(80, 3));
        // Wounded beyond the band: no bonus.
        assert!(score(25, 7) < score(25, 4));
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let snapshot = snapshot(vec![
            hostile(1, "rat", 100, 1, 0),
            hostile(2, "dragon", 10, 2, 0),
            hostile(3, "rat", 100, 1, 1),
            hostile(4, "wolf", 100, 3, 0),
        ]);
        let clock = ManualClock::new(0);
        let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);
        let mut ranker = KillPriorityRanker::new();

        let entries = ranker.update(&EngineConfig::default(), &snapshot, &env);
        for pair in entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // The dying dragon dominates everything.
        assert_eq!(entries[0].id, EntityId(2));
        // The two identical rats keep their scan order.
        let rat_ids: Vec<_> = entries
            .iter()
            .filter(|e| e.name == "rat")
            .map(|e| e.id)
            .collect();
        assert_eq!(rat_ids, vec![EntityId(1), EntityId(3)]);
    }

    #[test]
    fn test_refresh_interval_returns_cached_list() {
        let config = EngineConfig::default();
        let clock = ManualClock::new(1000);
        let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);
        let mut ranker = KillPriorityRanker::new();

        let first = snapshot(vec![hostile(1, "rat", 100, 1, 0)]);
        assert_eq!(ranker.update(&config, &first, &env).len(), 1);

        // New hostile arrives inside the refresh window: invisible until
        // the interval elapses.
        let second = snapshot(vec![
            hostile(1, "rat", 100, 1, 0),
            hostile(2, "wolf", 100, 2, 0),
        ]);
        clock.advance(config.priority_refresh_ms - 1);
        assert_eq!(ranker.update(&config, &second, &env).len(), 1);

        clock.advance(1);
        assert_eq!(ranker.update(&config, &second, &env).len(), 2);
    }

    #[test]
    fn test_dead_hostiles_are_skipped() {
        let snapshot = snapshot(vec![
            hostile(1, "rat", 100, 1, 0),
            hostile(2, "wolf", 100, 2, 0).dead(),
        ]);
        let clock = ManualClock::new(0);
        let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);
        let mut ranker = KillPriorityRanker::new();

        let entries = ranker.update(&EngineConfig::default(), &snapshot, &env);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, EntityId(1));
    }
}
