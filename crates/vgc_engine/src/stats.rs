//! Stat formulas and EV breakpoints.
//!
//! All formulas are pure integer arithmetic. The standard competitive
//! level is 50; the formulas still take the level as a parameter.

/// Standard VGC level.
pub const DEFAULT_LEVEL: u8 = 50;
/// Per-stat EV cap.
pub const MAX_EV_PER_STAT: u16 = 252;
/// Total EV cap across all six stats.
pub const MAX_EV_TOTAL: u16 = 508;
/// Maximum IV per stat.
pub const MAX_IV: u8 = 31;
/// Number of equally likely damage rolls.
pub const ROLL_COUNT: usize = 16;

/// EV values that change a stat at level 50: 0, 4, then every 8.
/// Any other investment wastes EVs.
pub const EV_BREAKPOINTS_LV50: [u16; 33] = [
    0, 4, 12, 20, 28, 36, 44, 52, 60, 68, 76, 84, 92, 100, 108, 116, 124, 132, 140, 148, 156, 164,
    172, 180, 188, 196, 204, 212, 220, 228, 236, 244, 252,
];

/// Calculate the HP stat.
///
/// `floor((2*base + iv + floor(ev/4)) * level / 100) + level + 10`.
/// A base HP of 1 always yields 1 (the Shedinja rule).
pub fn calculate_hp(base: u16, iv: u8, ev: u16, level: u8) -> u16 {
    if base == 1 {
        return 1;
    }
    let core = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    (core * level as u32 / 100 + level as u32 + 10) as u16
}

/// Calculate a non-HP stat.
///
/// `floor((floor((2*base + iv + floor(ev/4)) * level / 100) + 5) * nature)`
/// where `nature_mod` is 9, 10, or 11 (see [`crate::natures::NatureId`]).
pub fn calculate_stat(base: u16, iv: u8, ev: u16, level: u8, nature_mod: u8) -> u16 {
    let core = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    let raw = core * level as u32 / 100 + 5;
    (raw * nature_mod as u32 / 10) as u16
}

/// Round an EV value down to the nearest level-50 breakpoint.
pub fn normalize_ev(ev: u16) -> u16 {
    let ev = ev.min(MAX_EV_PER_STAT);
    match EV_BREAKPOINTS_LV50.binary_search(&ev) {
        Ok(_) => ev,
        Err(insert) => EV_BREAKPOINTS_LV50[insert - 1],
    }
}

/// The next breakpoint strictly above `ev`, if any.
pub fn next_breakpoint(ev: u16) -> Option<u16> {
    EV_BREAKPOINTS_LV50.iter().copied().find(|&b| b > ev)
}

/// EVs that contribute nothing to the stat (not a multiple of 4).
pub fn wasted_evs(ev: u16) -> u16 {
    ev % 4
}

/// Smallest breakpoint investment that reaches `target` for a non-HP
/// stat, or `None` if 252 EVs cannot reach it.
pub fn min_evs_for_stat(
    base: u16,
    iv: u8,
    level: u8,
    nature_mod: u8,
    target: u16,
) -> Option<u16> {
    EV_BREAKPOINTS_LV50
        .iter()
        .copied()
        .find(|&ev| calculate_stat(base, iv, ev, level, nature_mod) >= target)
}

/// Smallest breakpoint investment that reaches `target` HP, or `None`.
pub fn min_evs_for_hp(base: u16, iv: u8, level: u8, target: u16) -> Option<u16> {
    EV_BREAKPOINTS_LV50
        .iter()
        .copied()
        .find(|&ev| calculate_hp(base, iv, ev, level) >= target)
}
