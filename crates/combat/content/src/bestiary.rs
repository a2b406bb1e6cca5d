//! Per-creature danger ratings and loot values.
//!
//! Lookups are by lowercase display name. Input is trimmed and lowercased
//! before lookup, so callers may pass names as the client reported them.

/// Danger classification with its numeric rating.
///
/// Unlisted creatures rate [`DangerTier::Default`].
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
pub enum DangerTier {
    Default,
    High,
    VeryHigh,
    Extreme,
}

impl DangerTier {
    /// Numeric danger rating used by the threat and priority scores.
    pub const fn rating(self) -> u32 {
        match self {
            DangerTier::Default => 10,
            DangerTier::High => 30,
            DangerTier::VeryHigh => 50,
            DangerTier::Extreme => 100,
        }
    }
}

/// Danger tier for a creature name, falling back to the default tier.
pub fn danger_tier(name: &str) -> DangerTier {
    match normalize(name).as_str() {
        "orc berserker" | "cyclops" | "minotaur guard" | "fire elemental" => DangerTier::High,
        "dragon" | "giant spider" | "hero" | "necromancer" => DangerTier::VeryHigh,
        "demon" | "dragon lord" | "behemoth" | "grim reaper" => DangerTier::Extreme,
        _ => DangerTier::Default,
    }
}

/// Numeric danger rating for a creature name.
pub fn danger_rating(name: &str) -> u32 {
    danger_tier(name).rating()
}

/// Expected loot value of a creature, used as a kill-priority sweetener.
///
/// Values are rough averages in gold; unlisted creatures fall back to
/// [`DEFAULT_LOOT_VALUE`].
pub fn loot_value(name: &str) -> u32 {
    match normalize(name).as_str() {
        "wolf" => 15,
        "orc berserker" => 45,
        "cyclops" => 90,
        "giant spider" => 140,
        "dragon" => 180,
        "hero" => 250,
        "necromancer" => 160,
        "behemoth" => 300,
        "dragon lord" => 320,
        _ => DEFAULT_LOOT_VALUE,
    }
}

/// Fallback loot value for creatures without a table entry.
pub const DEFAULT_LOOT_VALUE: u32 = 10;

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names_fall_back_to_default() {
        assert_eq!(danger_tier("field mouse"), DangerTier::Default);
        assert_eq!(danger_rating("field mouse"), 10);
        assert_eq!(loot_value("field mouse"), DEFAULT_LOOT_VALUE);
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        assert_eq!(danger_tier("  Demon "), DangerTier::Extreme);
        assert_eq!(loot_value("Dragon Lord"), 320);
    }

    #[test]
    fn test_tier_ratings() {
        assert_eq!(DangerTier::Default.rating(), 10);
        assert_eq!(DangerTier::High.rating(), 30);
        assert_eq!(DangerTier::VeryHigh.rating(), 50);
        assert_eq!(DangerTier::Extreme.rating(), 100);
    }

    #[test]
    fn test_demon_has_no_loot_entry() {
        // Extreme danger does not imply a loot entry; the demon relies on
        // the fallback, which the scoring tests depend on.
        assert_eq!(loot_value("demon"), DEFAULT_LOOT_VALUE);
    }
}
