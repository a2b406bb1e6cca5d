/// Read-only castability check.
///
/// Cooldown and resource bookkeeping live outside the engine; the combo
/// sequencer only ever asks whether a spell could be cast right now.
pub trait SpellOracle {
    fn can_cast(&self, spell: &str) -> bool;
}

/// Spell oracle that reports every spell as ready.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCastable;

impl SpellOracle for AlwaysCastable {
    fn can_cast(&self, _spell: &str) -> bool {
        true
    }
}
