//! Multi-factor threat scoring and danger-tier classification.
//!
//! Every hostile inside the danger radius is scored by base danger,
//! proximity, flanking, and remaining health; the aggregate decides the
//! danger tier the arbiter reacts to.

use combat_core::{EngineConfig, EntityId, PlayerSnapshot, Position, TickSnapshot};
use combat_content::bestiary::{self, DangerTier};

/// One scored hostile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatEntry {
    pub id: EntityId,
    pub name: String,
    /// Computed threat score, always finite and >= 0.
    pub score: f64,
    pub position: Position,
}

/// Aggregate danger classification.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ThreatTier {
    Safe,
    Moderate,
    High,
    Critical,
}

impl ThreatTier {
    /// Classifies an aggregate threat total.
    pub fn classify(total_threat: f64) -> Self {
        if total_threat >= 200.0 {
            ThreatTier::Critical
        } else if total_threat >= 100.0 {
            ThreatTier::High
        } else if total_threat > 0.0 {
            ThreatTier::Moderate
        } else {
            ThreatTier::Safe
        }
    }
}

/// Result of one threat analysis pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatAnalysis {
    pub tier: ThreatTier,
    /// Sum of all entry scores plus the group bonus.
    pub total_threat: f64,
    /// Scored hostiles, sorted descending by score.
    pub entries: Vec<ThreatEntry>,
    /// Number of hostiles that qualified (inside the danger radius).
    pub group_count: u32,
}

impl ThreatAnalysis {
    fn empty() -> Self {
        Self {
            tier: ThreatTier::Safe,
            total_threat: 0.0,
            entries: Vec::new(),
            group_count: 0,
        }
    }
}

/// Scores nearby hostiles and classifies the aggregate danger.
///
/// Stateless between ticks except for a cache of the last analysis, which
/// backs [`ThreatPredictor::flankers`] and the engine's introspection
/// accessor.
#[derive(Debug, Default)]
pub struct ThreatPredictor {
    last: Option<ThreatAnalysis>,
}

impl ThreatPredictor {
    /// Multiplier applied when a hostile sits directly behind the player.
    pub const FLANK_MULTIPLIER: f64 = 1.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Scores every live hostile within the danger radius.
    ///
    /// Per-hostile score:
    ///
    /// ```text
    /// danger_rating(name) * distance_factor * flank_multiplier * health_factor
    /// ```
    ///
    /// where `distance_factor = (radius - distance + 1) / radius` over
    /// Chebyshev distance. Hostiles beyond the radius are excluded entirely.
    /// The aggregate additionally carries a clustering bonus of
    /// `group_weight * default_danger * n*(n+1)/2` for `n` qualifying
    /// hostiles; the bonus is part of `total_threat` only, never of a
    /// per-entry score.
    pub fn analyze(&mut self, config: &EngineConfig, snapshot: &TickSnapshot) -> ThreatAnalysis {
        let player = &snapshot.player;
        let radius = config.danger_radius;

        let mut entries: Vec<ThreatEntry> = Vec::new();
        for hostile in snapshot.live_hostiles() {
            let distance = player.position.chebyshev(&hostile.position);
            if distance > radius {
                continue;
            }
            let base = f64::from(bestiary::danger_rating(&hostile.name));
            let distance_factor = f64::from(radius - distance + 1) / f64::from(radius);
            let flank = if is_behind(player, &hostile.position) {
                Self::FLANK_MULTIPLIER
            } else {
                1.0
            };
            let health_factor = hostile.health.ratio();
            entries.push(ThreatEntry {
                id: hostile.id,
                name: hostile.name.clone(),
                score: base * distance_factor * flank * health_factor,
                position: hostile.position,
            });
        }

        if entries.is_empty() {
            let analysis = ThreatAnalysis::empty();
            self.last = Some(analysis.clone());
            return analysis;
        }

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        let group_count = entries.len() as u32;
        let group_bonus = config.group_weight
            * f64::from(DangerTier::Default.rating())
            * triangular(group_count);
        let total_threat = entries.iter().map(|e| e.score).sum::<f64>() + group_bonus;
        let tier = ThreatTier::classify(total_threat);

        tracing::debug!(
            "ThreatPredictor: {} hostiles, total={:.1} (group bonus {:.1}), tier={}",
            group_count,
            total_threat,
            group_bonus,
            tier
        );

        let analysis = ThreatAnalysis {
            tier,
            total_threat,
            entries,
            group_count,
        };
        self.last = Some(analysis.clone());
        analysis
    }

    /// Hostiles from the last analysis that sit directly behind the player.
    ///
    /// Re-filters the cached entry list; call [`Self::analyze`] first on the
    /// current snapshot.
    pub fn flankers(&self, player: &PlayerSnapshot) -> Vec<ThreatEntry> {
        self.last
            .as_ref()
            .map(|analysis| {
                analysis
                    .entries
                    .iter()
                    .filter(|entry| is_behind(player, &entry.position))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The most recent analysis, if one was computed.
    pub fn last_analysis(&self) -> Option<&ThreatAnalysis> {
        self.last.as_ref()
    }
}

/// Exact axis-aligned "behind the player" test.
///
/// True only when the direction from the player to the position is the
/// precise opposite of the facing direction; diagonal placements never
/// qualify.
fn is_behind(player: &PlayerSnapshot, position: &Position) -> bool {
    player.position.direction_to(position) == Some(player.facing.opposite())
}

/// Sum `1 + 2 + ... + n`, the closed form of the per-hostile group bonus.
fn triangular(n: u32) -> f64 {
    f64::from(n) * f64::from(n + 1) / 2.0
}
