//! The 25 natures and their stat modifiers.
//!
//! Natures are arranged on a 5x5 grid: `nature_id = plus_stat * 5 +
//! minus_stat`, with neutral natures on the diagonal. Stat modifiers are
//! computed in integers: 9 (-10%), 10 (neutral), 11 (+10%), applied as
//! `stat * m / 10`.

use serde::{Deserialize, Serialize};

/// Stat index for nature-affected stats (HP is never affected).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BattleStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
}

impl BattleStat {
    pub const fn name(self) -> &'static str {
        match self {
            BattleStat::Atk => "Atk",
            BattleStat::Def => "Def",
            BattleStat::SpA => "SpA",
            BattleStat::SpD => "SpD",
            BattleStat::Spe => "Spe",
        }
    }
}

/// A nature. Grid-encoded: `id = plus * 5 + minus`, diagonal entries
/// (plus == minus) are the five neutral natures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy = 0, // neutral
    Lonely = 1,  // +Atk -Def
    Adamant = 2, // +Atk -SpA
    Naughty = 3, // +Atk -SpD
    Brave = 4,   // +Atk -Spe
    Bold = 5,    // +Def -Atk
    Docile = 6,  // neutral
    Impish = 7,  // +Def -SpA
    Lax = 8,     // +Def -SpD
    Relaxed = 9, // +Def -Spe
    Modest = 10, // +SpA -Atk
    Mild = 11,   // +SpA -Def
    Bashful = 12, // neutral
    Rash = 13,    // +SpA -SpD
    Quiet = 14,   // +SpA -Spe
    Calm = 15,    // +SpD -Atk
    Gentle = 16,  // +SpD -Def
    Careful = 17, // +SpD -SpA
    Quirky = 18,  // neutral
    Sassy = 19,   // +SpD -Spe
    Timid = 20,   // +Spe -Atk
    Hasty = 21,   // +Spe -Def
    Jolly = 22,   // +Spe -SpA
    Naive = 23,   // +Spe -SpD
    Serious = 24, // neutral
}

static NATURE_NAMES: phf::Map<&'static str, NatureId> = phf::phf_map! {
    "hardy" => NatureId::Hardy,
    "lonely" => NatureId::Lonely,
    "adamant" => NatureId::Adamant,
    "naughty" => NatureId::Naughty,
    "brave" => NatureId::Brave,
    "bold" => NatureId::Bold,
    "docile" => NatureId::Docile,
    "impish" => NatureId::Impish,
    "lax" => NatureId::Lax,
    "relaxed" => NatureId::Relaxed,
    "modest" => NatureId::Modest,
    "mild" => NatureId::Mild,
    "bashful" => NatureId::Bashful,
    "rash" => NatureId::Rash,
    "quiet" => NatureId::Quiet,
    "calm" => NatureId::Calm,
    "gentle" => NatureId::Gentle,
    "careful" => NatureId::Careful,
    "quirky" => NatureId::Quirky,
    "sassy" => NatureId::Sassy,
    "timid" => NatureId::Timid,
    "hasty" => NatureId::Hasty,
    "jolly" => NatureId::Jolly,
    "naive" => NatureId::Naive,
    "serious" => NatureId::Serious,
};

/// Grid order: `GRID[plus * 5 + minus]`.
const GRID: [NatureId; 25] = [
    NatureId::Hardy,
    NatureId::Lonely,
    NatureId::Adamant,
    NatureId::Naughty,
    NatureId::Brave,
    NatureId::Bold,
    NatureId::Docile,
    NatureId::Impish,
    NatureId::Lax,
    NatureId::Relaxed,
    NatureId::Modest,
    NatureId::Mild,
    NatureId::Bashful,
    NatureId::Rash,
    NatureId::Quiet,
    NatureId::Calm,
    NatureId::Gentle,
    NatureId::Careful,
    NatureId::Quirky,
    NatureId::Sassy,
    NatureId::Timid,
    NatureId::Hasty,
    NatureId::Jolly,
    NatureId::Naive,
    NatureId::Serious,
];

impl NatureId {
    /// The nature boosting `plus` and hindering `minus`. Equal inputs
    /// land on the neutral diagonal.
    pub const fn from_grid(plus: BattleStat, minus: BattleStat) -> Self {
        GRID[plus as usize * 5 + minus as usize]
    }

    /// Parse a nature from its English name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        NATURE_NAMES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Get the stat modifier for a given stat.
    /// Returns 9 (-10%), 10 (neutral), or 11 (+10%); apply as `stat * m / 10`.
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;
        let stat_idx = stat as u8;

        if plus == minus {
            10 // neutral nature
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    /// Check if this is a neutral nature (no stat changes).
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }

    /// The boosted stat, if any.
    pub const fn plus(self) -> Option<BattleStat> {
        if self.is_neutral() {
            return None;
        }
        Some(match self as u8 / 5 {
            0 => BattleStat::Atk,
            1 => BattleStat::Def,
            2 => BattleStat::SpA,
            3 => BattleStat::SpD,
            _ => BattleStat::Spe,
        })
    }

    /// The hindered stat, if any.
    pub const fn minus(self) -> Option<BattleStat> {
        if self.is_neutral() {
            return None;
        }
        Some(match self as u8 % 5 {
            0 => BattleStat::Atk,
            1 => BattleStat::Def,
            2 => BattleStat::SpA,
            3 => BattleStat::SpD,
            _ => BattleStat::Spe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_encoding() {
        assert_eq!(NatureId::Adamant.stat_modifier(BattleStat::Atk), 11);
        assert_eq!(NatureId::Adamant.stat_modifier(BattleStat::SpA), 9);
        assert_eq!(NatureId::Adamant.stat_modifier(BattleStat::Spe), 10);

        assert_eq!(NatureId::Jolly.stat_modifier(BattleStat::Spe), 11);
        assert_eq!(NatureId::Jolly.stat_modifier(BattleStat::SpA), 9);

        assert_eq!(NatureId::Timid.plus(), Some(BattleStat::Spe));
        assert_eq!(NatureId::Timid.minus(), Some(BattleStat::Atk));
    }

    #[test]
    fn test_neutral_natures() {
        for nature in [
            NatureId::Hardy,
            NatureId::Docile,
            NatureId::Bashful,
            NatureId::Quirky,
            NatureId::Serious,
        ] {
            assert!(nature.is_neutral());
            assert_eq!(nature.plus(), None);
            for stat in [
                BattleStat::Atk,
                BattleStat::Def,
                BattleStat::SpA,
                BattleStat::SpD,
                BattleStat::Spe,
            ] {
                assert_eq!(nature.stat_modifier(stat), 10);
            }
        }
    }

    #[test]
    fn test_from_grid() {
        assert_eq!(
            NatureId::from_grid(BattleStat::Atk, BattleStat::SpA),
            NatureId::Adamant
        );
        assert_eq!(
            NatureId::from_grid(BattleStat::Spe, BattleStat::Atk),
            NatureId::Timid
        );
        assert_eq!(
            NatureId::from_grid(BattleStat::Def, BattleStat::Def),
            NatureId::Docile
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(NatureId::from_name("adamant"), Some(NatureId::Adamant));
        assert_eq!(NatureId::from_name("Timid"), Some(NatureId::Timid));
        assert_eq!(NatureId::from_name("bogus"), None);
    }
}
