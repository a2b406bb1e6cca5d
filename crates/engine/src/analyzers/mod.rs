//! The five analyzers behind the arbitrated decision.
//!
//! Each analyzer is an explicit struct owning exactly the small memory it
//! needs between ticks (cooldown stamps, last-known positions, the combo
//! cursor). Everything else is recomputed from scratch from the snapshot on
//! every call, so analyzers stay deterministic under an injected clock.
mod combo;
mod priority;
mod stack;
mod threat;
mod wave;

pub use combo::{ComboSelection, ComboSequencer};
pub use priority::{KillPriorityRanker, PriorityEntry};
pub use stack::{AreaTimingAnalyzer, StackAnalysis};
pub use threat::{ThreatAnalysis, ThreatEntry, ThreatPredictor, ThreatTier};
pub use wave::{WaveCast, WaveOptimizer, WaveShape};
