//! Temporal clustering ("stack") analysis.
//!
//! Tracks per-hostile movement between ticks to decide whether delaying an
//! area attack would let the pack bunch up for more simultaneous hits.

use std::collections::HashMap;

use combat_core::{CombatEnv, EngineConfig, EntityId, Position, TickSnapshot};

/// Census of the cluster around the player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackAnalysis {
    /// Live hostiles within the stack radius.
    pub total: u32,
    /// Of those, how many did not move since the previous tick.
    pub stationary: u32,
    /// True when enough hostiles are already standing still.
    pub is_optimal: bool,
    /// `stationary / total`, or 0 when the stack is empty.
    pub stack_ratio: f64,
}

/// Decides whether an area attack should wait for better clustering.
///
/// Keeps two pieces of memory: last-known positions per hostile id (for
/// movement detection) and the timestamp at which the current wait window
/// opened. Hostiles seen for the first time count as stationary.
#[derive(Debug, Default)]
pub struct AreaTimingAnalyzer {
    last_positions: HashMap<EntityId, Position>,
    wait_started_ms: Option<u64>,
    last: Option<StackAnalysis>,
}

impl AreaTimingAnalyzer {
    /// Stationary share below which waiting is still worthwhile.
    pub const WAIT_RATIO_THRESHOLD: f64 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Counts hostiles in the stack radius and flags the stationary ones,
    /// refreshing the movement memory as a side effect.
    pub fn analyze_stack(
        &mut self,
        config: &EngineConfig,
        snapshot: &TickSnapshot,
    ) -> StackAnalysis {
        let player_position = snapshot.player.position;

        let mut fresh = HashMap::with_capacity(snapshot.hostiles.len());
        let mut total = 0u32;
        let mut stationary = 0u32;
        for hostile in snapshot.live_hostiles() {
            let unmoved = self
                .last_positions
                .get(&hostile.id)
                .is_none_or(|previous| *previous == hostile.position);
            fresh.insert(hostile.id, hostile.position);

            if player_position.chebyshev(&hostile.position) <= config.stack_radius {
                total += 1;
                if unmoved {
                    stationary += 1;
                }
            }
        }
        // Entities that vanished drop out of the memory with the swap.
        self.last_positions = fresh;

        let stack_ratio = if total == 0 {
            0.0
        } else {
            f64::from(stationary) / f64::from(total)
        };
        let analysis = StackAnalysis {
            total,
            stationary,
            is_optimal: stationary >= config.min_stack_size,
            stack_ratio,
        };
        self.last = Some(analysis);
        analysis
    }

    /// Whether to hold the area attack and let the pack settle.
    ///
    /// Returns false as soon as the stack is optimal, too small to ever
    /// qualify, or the wait window has run out; returns true only while a
    /// worthwhile stack is still visibly in motion.
    pub fn should_wait_for_stack(
        &mut self,
        config: &EngineConfig,
        snapshot: &TickSnapshot,
        env: &CombatEnv<'_>,
    ) -> bool {
        let analysis = self.analyze_stack(config, snapshot);

        if analysis.is_optimal {
            self.wait_started_ms = None;
            return false;
        }
        if analysis.total < config.min_stack_size {
            // Nothing to wait for.
            self.wait_started_ms = None;
            return false;
        }

        let now = env.now_ms();
        let started = *self.wait_started_ms.get_or_insert(now);
        if now.saturating_sub(started) > config.max_stack_wait_ms {
            tracing::debug!("AreaTimingAnalyzer: wait window expired, forcing the attack");
            self.wait_started_ms = None;
            return false;
        }

        if analysis.stack_ratio < Self::WAIT_RATIO_THRESHOLD {
            tracing::debug!(
                "AreaTimingAnalyzer: waiting, {}/{} stationary",
                analysis.stationary,
                analysis.total
            );
            return true;
        }

        self.wait_started_ms = None;
        false
    }

    /// The most recent census, if one was computed.
    pub fn last_analysis(&self) -> Option<StackAnalysis> {
        self.last
    }
}
