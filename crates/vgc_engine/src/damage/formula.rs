//! Core damage formula and math utilities.
//!
//! This module contains the fundamental damage calculation math,
//! including Game Freak's specific rounding and overflow behaviors.

use super::modifier::Modifier;

/// 16-bit overflow wrapping (simulates hardware behavior).
#[inline]
pub const fn of16(value: u32) -> u16 {
    (value & 0xFFFF) as u16
}

/// 32-bit overflow wrapping (simulates hardware behavior).
#[inline]
pub const fn of32(value: u64) -> u32 {
    (value & 0xFFFF_FFFF) as u32
}

/// Game Freak's rounding function ("pokeRound").
///
/// Rounds 0.5 down instead of up. The fractional part must be strictly
/// greater than 0.5 to round up; exactly 0.5 rounds DOWN.
#[inline]
pub fn pokeround(value: u32, divisor: u32) -> u32 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    let half = divisor / 2;

    if remainder > half {
        quotient + 1
    } else {
        quotient
    }
}

/// Apply a 4096-scale modifier with proper pokeRound.
///
/// This performs: `pokeround(value * modifier / 4096)`.
#[inline]
pub fn apply_modifier(value: u32, modifier: Modifier) -> u32 {
    if modifier.is_neutral() {
        return value;
    }
    let product = of32(value as u64 * modifier.val() as u64);
    pokeround(product, 4096)
}

/// Apply a pre-chained 4096-scale modifier (see [`chain_mods`]).
///
/// Chained values can exceed the u16 range of a single [`Modifier`].
#[inline]
pub fn apply_chained(value: u32, chained: u32) -> u32 {
    if chained == 4096 {
        return value;
    }
    let product = of32(value as u64 * chained as u64);
    pokeround(product, 4096)
}

/// Apply a modifier and floor the result (no rounding).
///
/// Used for stat-side multipliers (Choice items, ruin auras, stage
/// boosts) where the game uses simple floor division.
#[inline]
pub fn apply_modifier_floor(value: u32, modifier_num: u32, modifier_den: u32) -> u32 {
    of32(value as u64 * modifier_num as u64) / modifier_den
}

/// Chain multiple 4096-scale modifiers into one combined modifier.
///
/// Starts at 4096 (1.0x) and multiplies each modifier in sequence.
/// Each link uses standard rounding: `(acc * m + 2048) >> 12`.
/// The combined value is applied once with [`apply_chained`].
///
/// Clamps the final result to valid bounds (about 0.0002x to 32x).
pub fn chain_mods(modifiers: &[Modifier]) -> u32 {
    let mut result: u32 = 4096;

    for &modifier in modifiers {
        if !modifier.is_neutral() {
            let product = of32(result as u64 * modifier.val() as u64);
            result = (product + 2048) >> 12;
        }
    }

    result.clamp(1, 131072)
}

/// Calculate base damage before modifiers.
///
/// Formula: `floor(floor(floor(2 * Level / 5 + 2) * BasePower * Attack / Defense) / 50) + 2`
///
/// Each intermediate step is truncated to match cartridge behavior.
/// At level 50 the level factor is 22.
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    // Avoid division by zero
    if defense == 0 {
        return 0;
    }

    let level_factor = 2 * level / 5 + 2;

    let numerator = of32(level_factor as u64 * base_power as u64);
    let numerator = of32(numerator as u64 * attack as u64);
    let after_defense = numerator / defense;
    let after_50 = after_defense / 50;

    after_50 + 2
}

/// Apply the random damage roll.
///
/// The game picks a value 85-100 and floors `damage * roll / 100`.
/// Index 0 is the 85% roll, index 15 the 100% roll.
#[inline]
pub fn apply_random_roll(base_damage: u32, roll_index: u8) -> u32 {
    let roll = 85 + (roll_index.min(15) as u32);
    of32(base_damage as u64 * roll as u64) / 100
}

/// Boost multiplier table.
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6.
/// Each entry is (numerator, denominator).
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6: 0.25x
    (2, 7), // -5
    (2, 6), // -4
    (2, 5), // -3: 0.4x
    (2, 4), // -2: 0.5x
    (2, 3), // -1
    (2, 2), //  0: 1.0x
    (3, 2), // +1: 1.5x
    (4, 2), // +2: 2.0x
    (5, 2), // +3: 2.5x
    (6, 2), // +4: 3.0x
    (7, 2), // +5: 3.5x
    (8, 2), // +6: 4.0x
];

/// Apply a stat stage (-6 to +6) to a stat value with floor division.
pub fn apply_boost(base_stat: u16, stage: i8) -> u16 {
    let stage = stage.clamp(-6, 6);
    let index = (stage + 6) as usize;
    let (num, den) = BOOST_TABLE[index];

    of16((base_stat as u32 * num) / den)
}
