//! Static combat data consumed by the decision engine.
//!
//! Two tables live here: the bestiary (per-creature danger ratings and loot
//! values) and the spellbook (per-vocation combo sequences). Both are total
//! functions: unknown creature names fall back to defaults, and every
//! (vocation, combo type) pair resolves to a non-empty sequence.
pub mod bestiary;
pub mod spellbook;

pub use bestiary::{DangerTier, danger_rating, loot_value};
pub use spellbook::{ComboType, combo_sequence};
