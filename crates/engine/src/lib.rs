//! Per-tick combat decision engine.
//!
//! Five analyzers consume a read-only [`combat_core::TickSnapshot`] and a
//! sixth component arbitrates their outputs into exactly one
//! [`RecommendedAction`] per invocation:
//!
//! - [`analyzers::WaveOptimizer`]: best caster tile, direction, and
//!   footprint shape for an area spell
//! - [`analyzers::ThreatPredictor`]: multi-factor danger scoring and tier
//!   classification
//! - [`analyzers::KillPriorityRanker`]: kill-urgency ranking
//! - [`analyzers::AreaTimingAnalyzer`]: temporal clustering ("stack")
//!   analysis
//! - [`analyzers::ComboSequencer`]: stateful spell-sequence progression
//!
//! The engine never mutates game state. It reads the snapshot handed to it,
//! consults the injected oracles, and returns a decision; executing that
//! decision is entirely the caller's responsibility.
pub mod action;
pub mod analyzers;
pub mod engine;

pub use action::RecommendedAction;
pub use analyzers::{
    AreaTimingAnalyzer, ComboSelection, ComboSequencer, KillPriorityRanker, PriorityEntry,
    StackAnalysis, ThreatAnalysis, ThreatEntry, ThreatPredictor, ThreatTier, WaveCast,
    WaveOptimizer, WaveShape,
};
pub use engine::CombatEngine;
