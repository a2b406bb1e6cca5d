//! The arbitrated decision returned to the caller.

use crate::analyzers::{PriorityEntry, ThreatAnalysis, WaveCast};

/// Exactly one recommendation per engine invocation.
///
/// Variants are ordered by arbiter priority; every variant carries a
/// human-readable reason for logs and debugging overlays. Execution is the
/// caller's job, and callers are expected to match exhaustively.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RecommendedAction {
    /// Danger is critical: disengage, shield, or heal before anything else.
    Defensive {
        reason: String,
        threat: ThreatAnalysis,
    },
    /// A qualifying area cast is available and worth taking now.
    WaveSpell { reason: String, cast: WaveCast },
    /// A hostile is close enough to death to be worth bursting down.
    Finisher {
        reason: String,
        target: PriorityEntry,
    },
    /// Default engagement: hit the highest-priority hostile.
    Attack {
        reason: String,
        target: PriorityEntry,
    },
    /// Nothing worth doing this tick.
    None { reason: String },
}

impl RecommendedAction {
    /// Stable tag for logs and metrics.
    pub const fn kind(&self) -> &'static str {
        match self {
            RecommendedAction::Defensive { .. } => "defensive",
            RecommendedAction::WaveSpell { .. } => "wave_spell",
            RecommendedAction::Finisher { .. } => "finisher",
            RecommendedAction::Attack { .. } => "attack",
            RecommendedAction::None { .. } => "none",
        }
    }

    /// The human-readable reason attached to the decision.
    pub fn reason(&self) -> &str {
        match self {
            RecommendedAction::Defensive { reason, .. }
            | RecommendedAction::WaveSpell { reason, .. }
            | RecommendedAction::Finisher { reason, .. }
            | RecommendedAction::Attack { reason, .. }
            | RecommendedAction::None { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let action = RecommendedAction::None {
            reason: "no hostiles".into(),
        };
        assert_eq!(action.kind(), "none");
        assert_eq!(action.reason(), "no hostiles");
    }
}
