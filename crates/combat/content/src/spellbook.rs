//! Per-vocation combo sequences.
//!
//! A combo is an ordered list of spell identifiers meant to be cast
//! consecutively. The table is total: every (vocation, combo type) pair has
//! a non-empty sequence, so the sequencer never has to handle a missing
//! entry.

use combat_core::Vocation;

/// Combat posture a combo sequence is built for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ComboType {
    SingleTarget,
    AoeBurst,
    Finisher,
}

impl ComboType {
    pub const ALL: [ComboType; 3] = [
        ComboType::SingleTarget,
        ComboType::AoeBurst,
        ComboType::Finisher,
    ];
}

/// Ordered spell sequence for the given vocation and posture.
pub const fn combo_sequence(vocation: Vocation, combo: ComboType) -> &'static [&'static str] {
    match (vocation, combo) {
        (Vocation::Knight, ComboType::SingleTarget) => {
            &["brutal strike", "cleave", "crushing blow"]
        }
        (Vocation::Knight, ComboType::AoeBurst) => &["war cry", "whirlwind", "groundshaker"],
        (Vocation::Knight, ComboType::Finisher) => &["executioner strike"],

        (Vocation::Paladin, ComboType::SingleTarget) => {
            &["piercing shot", "twin shot", "power shot"]
        }
        (Vocation::Paladin, ComboType::AoeBurst) => &["arrow storm", "explosive volley"],
        (Vocation::Paladin, ComboType::Finisher) => &["marked shot", "killshot"],

        (Vocation::Sorcerer, ComboType::SingleTarget) => {
            &["flame lash", "arcane bolt", "ember burst"]
        }
        (Vocation::Sorcerer, ComboType::AoeBurst) => {
            &["firestorm", "chain lightning", "meteor"]
        }
        (Vocation::Sorcerer, ComboType::Finisher) => &["arcane execution"],

        (Vocation::Druid, ComboType::SingleTarget) => &["ice shard", "thorn whip", "frost bite"],
        (Vocation::Druid, ComboType::AoeBurst) => &["blizzard", "earthquake", "poison cloud"],
        (Vocation::Druid, ComboType::Finisher) => &["winter's end"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCATIONS: [Vocation; 4] = [
        Vocation::Knight,
        Vocation::Paladin,
        Vocation::Sorcerer,
        Vocation::Druid,
    ];

    #[test]
    fn test_every_pair_has_a_non_empty_sequence() {
        for vocation in VOCATIONS {
            for combo in ComboType::ALL {
                assert!(
                    !combo_sequence(vocation, combo).is_empty(),
                    "empty sequence for {vocation} / {combo}"
                );
            }
        }
    }

    #[test]
    fn test_sequences_have_no_duplicate_spells() {
        for vocation in VOCATIONS {
            for combo in ComboType::ALL {
                let spells = combo_sequence(vocation, combo);
                for (i, spell) in spells.iter().enumerate() {
                    assert!(
                        !spells[i + 1..].contains(spell),
                        "duplicate spell {spell} in {vocation} / {combo}"
                    );
                }
            }
        }
    }
}
