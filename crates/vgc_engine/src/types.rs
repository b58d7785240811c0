//! The 18 elemental types and the Gen 9 effectiveness chart.
//!
//! Effectiveness is encoded on a 4-scale so that every value stays an
//! integer: 0 = immune, 1 = 0.25x, 2 = 0.5x, 4 = 1x, 8 = 2x, 16 = 4x.
//! Dual-type effectiveness combines as `e1 * e2 / 4`.

use serde::{Deserialize, Serialize};

/// Neutral effectiveness on the 4-scale.
pub const EFF_NEUTRAL: u8 = 4;
/// Super effective (2x) on the 4-scale.
pub const EFF_SUPER: u8 = 8;
/// Resisted (0.5x) on the 4-scale.
pub const EFF_RESIST: u8 = 2;
/// Immune (0x).
pub const EFF_IMMUNE: u8 = 0;

/// An elemental type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

pub const TYPE_COUNT: usize = 18;

/// Effectiveness chart, row = attacking type, column = defending type.
/// Values are on the 4-scale (4 = neutral).
#[rustfmt::skip]
const TYPE_CHART: [[u8; TYPE_COUNT]; TYPE_COUNT] = [
    //        Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    /* Nor */ [ 4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  2,  0,  4,  4,  2,  4],
    /* Fir */ [ 4,  2,  2,  4,  8,  8,  4,  4,  4,  4,  4,  8,  2,  4,  2,  4,  8,  4],
    /* Wat */ [ 4,  8,  2,  4,  2,  4,  4,  4,  8,  4,  4,  4,  8,  4,  2,  4,  4,  4],
    /* Ele */ [ 4,  4,  8,  2,  2,  4,  4,  4,  0,  8,  4,  4,  4,  4,  2,  4,  4,  4],
    /* Gra */ [ 4,  2,  8,  4,  2,  4,  4,  2,  8,  2,  4,  2,  8,  4,  2,  4,  2,  4],
    /* Ice */ [ 4,  2,  2,  4,  8,  2,  4,  4,  8,  8,  4,  4,  4,  4,  8,  4,  2,  4],
    /* Fig */ [ 8,  4,  4,  4,  4,  8,  4,  2,  4,  2,  2,  2,  8,  0,  4,  8,  8,  2],
    /* Poi */ [ 4,  4,  4,  4,  8,  4,  4,  2,  2,  4,  4,  4,  2,  2,  4,  4,  0,  8],
    /* Gro */ [ 4,  8,  4,  8,  2,  4,  4,  8,  4,  0,  4,  2,  8,  4,  4,  4,  8,  4],
    /* Fly */ [ 4,  4,  4,  2,  8,  4,  8,  4,  4,  4,  4,  8,  2,  4,  4,  4,  2,  4],
    /* Psy */ [ 4,  4,  4,  4,  4,  4,  8,  8,  4,  4,  2,  4,  4,  4,  4,  0,  2,  4],
    /* Bug */ [ 4,  2,  4,  4,  8,  4,  2,  2,  4,  2,  8,  4,  4,  2,  4,  8,  2,  2],
    /* Roc */ [ 4,  8,  4,  4,  4,  8,  2,  4,  2,  8,  4,  8,  4,  4,  4,  4,  2,  4],
    /* Gho */ [ 0,  4,  4,  4,  4,  4,  4,  4,  4,  4,  8,  4,  4,  8,  4,  2,  4,  4],
    /* Dra */ [ 4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  8,  4,  2,  0],
    /* Dar */ [ 4,  4,  4,  4,  4,  4,  2,  4,  4,  4,  8,  4,  4,  8,  4,  2,  4,  2],
    /* Ste */ [ 4,  2,  2,  2,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  2,  8],
    /* Fai */ [ 4,  2,  4,  4,  4,  4,  8,  2,  4,  4,  4,  4,  4,  4,  8,  8,  2,  4],
];

static TYPE_NAMES: phf::Map<&'static str, Type> = phf::phf_map! {
    "normal" => Type::Normal,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "electric" => Type::Electric,
    "grass" => Type::Grass,
    "ice" => Type::Ice,
    "fighting" => Type::Fighting,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "flying" => Type::Flying,
    "psychic" => Type::Psychic,
    "bug" => Type::Bug,
    "rock" => Type::Rock,
    "ghost" => Type::Ghost,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "steel" => Type::Steel,
    "fairy" => Type::Fairy,
};

impl Type {
    /// Parse a type from its English name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        TYPE_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// Effectiveness of this type against a single defending type
    /// (4-scale).
    #[inline]
    pub const fn against(self, defending: Type) -> u8 {
        TYPE_CHART[self as usize][defending as usize]
    }
}

/// A defender's typing (one or two types).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePair {
    pub primary: Type,
    pub secondary: Option<Type>,
}

impl TypePair {
    pub const fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub const fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Whether the pair contains the given type.
    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Combined 4-scale effectiveness of an attacking type against this
    /// pair. Immunity on either type zeroes the result.
    pub fn effectiveness_against(&self, attacking: Type) -> u8 {
        let e1 = attacking.against(self.primary) as u16;
        let e2 = match self.secondary {
            Some(t) => attacking.against(t) as u16,
            None => EFF_NEUTRAL as u16,
        };
        (e1 * e2 / 4) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_type_effectiveness() {
        assert_eq!(Type::Fire.against(Type::Grass), EFF_SUPER);
        assert_eq!(Type::Fire.against(Type::Water), EFF_RESIST);
        assert_eq!(Type::Normal.against(Type::Ghost), EFF_IMMUNE);
        assert_eq!(Type::Electric.against(Type::Ground), EFF_IMMUNE);
        assert_eq!(Type::Dragon.against(Type::Fairy), EFF_IMMUNE);
        assert_eq!(Type::Water.against(Type::Water), EFF_RESIST);
        assert_eq!(Type::Ghost.against(Type::Normal), EFF_IMMUNE);
    }

    #[test]
    fn test_dual_type_combination() {
        // Electric vs Water/Flying = 4x
        let gyarados = TypePair::dual(Type::Water, Type::Flying);
        assert_eq!(gyarados.effectiveness_against(Type::Electric), 16);

        // Ground vs Water/Flying = immune
        assert_eq!(gyarados.effectiveness_against(Type::Ground), 0);

        // Rock vs Fire/Flying = 4x
        let charizard = TypePair::dual(Type::Fire, Type::Flying);
        assert_eq!(charizard.effectiveness_against(Type::Rock), 16);

        // Grass vs Fire/Flying = 0.25x
        assert_eq!(charizard.effectiveness_against(Type::Grass), 1);

        // Neutral single type
        assert_eq!(
            TypePair::single(Type::Normal).effectiveness_against(Type::Water),
            EFF_NEUTRAL
        );
    }

    #[test]
    fn test_name_roundtrip() {
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("Fairy"), Some(Type::Fairy));
        assert_eq!(Type::from_name("FLYING"), Some(Type::Flying));
        assert_eq!(Type::from_name("shadow"), None);
    }

    #[test]
    fn test_chart_is_symmetric_in_shape() {
        // Every row covers all 18 defending types; spot-check a few
        // well-known interactions on both axes.
        assert_eq!(Type::Steel.against(Type::Fairy), EFF_SUPER);
        assert_eq!(Type::Fairy.against(Type::Steel), EFF_RESIST);
        assert_eq!(Type::Psychic.against(Type::Dark), EFF_IMMUNE);
        assert_eq!(Type::Dark.against(Type::Psychic), EFF_SUPER);
    }
}
