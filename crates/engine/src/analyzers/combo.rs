//! Stateful spell-sequence progression.
//!
//! Picks the combo appropriate to the current posture (finisher, area
//! burst, or single target) and walks a cursor through its spells as they
//! come off cooldown.

use combat_core::{CombatEnv, EngineConfig, TickSnapshot, Vocation};
use combat_content::spellbook::{self, ComboType};

/// Manhattan radius of the burst-detection diamond (the 5x5 diamond).
const BURST_DIAMOND_RADIUS: u32 = 2;

/// A combo chosen for the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboSelection {
    pub combo_type: ComboType,
    pub vocation: Vocation,
    /// Ordered spell identifiers from the spellbook.
    pub spells: &'static [&'static str],
}

/// Cursor over the active sequence.
///
/// Identity is the `(vocation, combo_type)` pair; the index is 1-based and
/// always within `[1, spells.len()]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ComboCursor {
    vocation: Vocation,
    combo_type: ComboType,
    index: usize,
}

impl ComboCursor {
    fn start(selection: &ComboSelection) -> Self {
        Self {
            vocation: selection.vocation,
            combo_type: selection.combo_type,
            index: 1,
        }
    }

    fn tracks(&self, selection: &ComboSelection) -> bool {
        self.vocation == selection.vocation && self.combo_type == selection.combo_type
    }
}

/// Selects and advances combo sequences.
#[derive(Debug, Default)]
pub struct ComboSequencer {
    cursor: Option<ComboCursor>,
    last_completed_ms: Option<u64>,
}

impl ComboSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The combo the current posture calls for, if the gates allow one.
    ///
    /// Gated by the mana floor and by the combo cooldown measured from the
    /// last full-sequence completion. Posture: a target at or under the
    /// finisher threshold selects `Finisher`; otherwise enough hostiles in
    /// the burst diamond select `AoeBurst`; otherwise `SingleTarget`.
    pub fn optimal_sequence(
        &self,
        config: &EngineConfig,
        snapshot: &TickSnapshot,
        env: &CombatEnv<'_>,
    ) -> Option<ComboSelection> {
        if snapshot.player.mana.value() < config.min_mana_percent {
            return None;
        }
        if let Some(completed) = self.last_completed_ms
            && env.now_ms().saturating_sub(completed) < config.combo_cooldown_ms
        {
            return None;
        }

        let combo_type = if snapshot
            .target
            .as_ref()
            .is_some_and(|target| target.health.value() <= config.finisher_threshold)
        {
            ComboType::Finisher
        } else if burst_count(snapshot) >= config.burst_threshold {
            ComboType::AoeBurst
        } else {
            ComboType::SingleTarget
        };

        let vocation = snapshot.player.vocation;
        Some(ComboSelection {
            combo_type,
            vocation,
            spells: spellbook::combo_sequence(vocation, combo_type),
        })
    }

    /// Next castable spell of the selection, advancing the cursor when the
    /// current spell is unavailable.
    ///
    /// The cursor resets to the first spell whenever the selection identity
    /// changes. A call either returns the spell at the cursor (when it is
    /// castable right now) or advances past an uncastable spell and returns
    /// `None`; advancing past the end wraps to the start and stamps the
    /// completion time, which re-arms the combo cooldown.
    pub fn next_spell(
        &mut self,
        selection: &ComboSelection,
        env: &CombatEnv<'_>,
    ) -> Option<&'static str> {
        let cursor = match &mut self.cursor {
            Some(cursor) if cursor.tracks(selection) => cursor,
            slot => slot.insert(ComboCursor::start(selection)),
        };

        let spell = selection.spells[cursor.index - 1];
        if env.spells().can_cast(spell) {
            tracing::debug!(
                "ComboSequencer: {} step {}/{} -> {}",
                selection.combo_type,
                cursor.index,
                selection.spells.len(),
                spell
            );
            return Some(spell);
        }

        cursor.index += 1;
        if cursor.index > selection.spells.len() {
            cursor.index = 1;
            self.last_completed_ms = Some(env.now_ms());
            tracing::debug!("ComboSequencer: {} sequence completed", selection.combo_type);
        }
        None
    }
}

/// Live hostiles inside the burst diamond around the player.
fn burst_count(snapshot: &TickSnapshot) -> u32 {
    let player_position = snapshot.player.position;
    snapshot
        .live_hostiles()
        .filter(|h| player_position.manhattan(&h.position) <= BURST_DIAMOND_RADIUS)
        .count() as u32
}
