//! The engine facade and the fixed-priority arbiter.

use combat_core::{CombatEnv, ConfigError, EngineConfig, PlayerSnapshot, TickSnapshot};

use crate::action::RecommendedAction;
use crate::analyzers::{
    AreaTimingAnalyzer, ComboSelection, ComboSequencer, KillPriorityRanker, PriorityEntry,
    StackAnalysis, ThreatAnalysis, ThreatEntry, ThreatPredictor, ThreatTier, WaveOptimizer,
};

/// Owns the five analyzers and arbitrates their outputs.
///
/// One instance per controlled character. All analyzer-local memory
/// (cooldown stamps, movement history, the combo cursor) lives inside this
/// value; the engine exposes nothing mutable to callers beyond the returned
/// decision.
///
/// # Arbitration
///
/// [`CombatEngine::recommend`] is a fixed-priority cascade: defensive beats
/// wave beats finisher beats attack, first match wins, with no score
/// blending across categories. A borderline wave opportunity never competes
/// with a critical threat; whichever category is checked first and matches
/// wins outright. The ordering is a behavioral contract, not an
/// implementation convenience.
#[derive(Debug)]
pub struct CombatEngine {
    config: EngineConfig,
    wave: WaveOptimizer,
    threat: ThreatPredictor,
    priority: KillPriorityRanker,
    timing: AreaTimingAnalyzer,
    combo: ComboSequencer,
}

impl CombatEngine {
    /// Builds an engine after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`EngineConfig`] constraint; a running
    /// engine never re-validates.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            wave: WaveOptimizer::new(),
            threat: ThreatPredictor::new(),
            priority: KillPriorityRanker::new(),
            timing: AreaTimingAnalyzer::new(),
            combo: ComboSequencer::new(),
        })
    }

    /// Builds an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default()).expect("default config is valid")
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Converts the snapshot into exactly one recommendation.
    ///
    /// Analyzers run lazily in cascade order: the stack analyzer is only
    /// consulted when a committable wave exists, and the priority list is
    /// only refreshed when no higher category matched.
    pub fn recommend(
        &mut self,
        snapshot: &TickSnapshot,
        env: &CombatEnv<'_>,
    ) -> RecommendedAction {
        let threat = self.threat.analyze(&self.config, snapshot);
        if threat.tier == ThreatTier::Critical {
            let reason = format!(
                "critical threat: {:.0} total from {} hostiles",
                threat.total_threat, threat.group_count
            );
            tracing::debug!("Arbiter: defensive ({reason})");
            return RecommendedAction::Defensive { reason, threat };
        }

        if let Some(cast) = self.wave.find_optimal_cast(&self.config, snapshot, env)
            && cast.monster_count >= self.config.wave_commit_targets
            && !self.timing.should_wait_for_stack(&self.config, snapshot, env)
        {
            let reason = format!(
                "{} wave {} hits {} hostiles",
                cast.shape, cast.direction, cast.monster_count
            );
            tracing::debug!("Arbiter: wave_spell ({reason})");
            return RecommendedAction::WaveSpell { reason, cast };
        }

        let entries = self.priority.update(&self.config, snapshot, env);

        let finisher = entries
            .iter()
            .filter(|entry| entry.health.value() <= self.config.finisher_threshold)
            .min_by_key(|entry| entry.health.value());
        if let Some(target) = finisher {
            let reason = format!("{} at {} is nearly dead", target.name, target.health);
            tracing::debug!("Arbiter: finisher ({reason})");
            return RecommendedAction::Finisher {
                reason,
                target: target.clone(),
            };
        }

        if let Some(target) = entries.first() {
            let reason = format!(
                "top kill priority: {} (score {:.1})",
                target.name, target.score
            );
            tracing::debug!("Arbiter: attack ({reason})");
            return RecommendedAction::Attack {
                reason,
                target: target.clone(),
            };
        }

        tracing::debug!("Arbiter: none (no qualifying hostiles)");
        RecommendedAction::None {
            reason: "no qualifying hostiles".into(),
        }
    }

    // ========================================================================
    // Combo surface
    // ========================================================================

    /// The combo the current posture calls for, if gates allow one.
    pub fn optimal_sequence(
        &self,
        snapshot: &TickSnapshot,
        env: &CombatEnv<'_>,
    ) -> Option<ComboSelection> {
        self.combo.optimal_sequence(&self.config, snapshot, env)
    }

    /// Next castable spell of the active combo; see
    /// [`ComboSequencer::next_spell`].
    pub fn next_spell(
        &mut self,
        selection: &ComboSelection,
        env: &CombatEnv<'_>,
    ) -> Option<&'static str> {
        self.combo.next_spell(selection, env)
    }

    // ========================================================================
    // Introspection (cache reads, no recomputation)
    // ========================================================================

    /// Last computed threat analysis.
    pub fn last_threat(&self) -> Option<&ThreatAnalysis> {
        self.threat.last_analysis()
    }

    /// Last computed kill-priority ranking.
    pub fn last_priorities(&self) -> &[PriorityEntry] {
        self.priority.entries()
    }

    /// Last computed stack census.
    pub fn last_stack(&self) -> Option<StackAnalysis> {
        self.timing.last_analysis()
    }

    /// Hostiles from the last threat analysis positioned behind the player.
    pub fn flankers(&self, player: &PlayerSnapshot) -> Vec<ThreatEntry> {
        self.threat.flankers(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let config = EngineConfig {
            danger_radius: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            CombatEngine::new(config).err(),
            Some(ConfigError::ZeroRadius { field: "danger_radius" })
        );
    }
}
