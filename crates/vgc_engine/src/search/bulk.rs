//! Forward bulk optimization.
//!
//! Instead of surviving a named threat, this maximizes a weighted
//! HP x defense product across both defense axes. The score for a
//! spread is `hp * (physical_weight * def + special_weight * spd)`,
//! which rewards the HP/defense balance that actually buys the most
//! effective bulk.

use crate::combatant::Combatant;
use crate::natures::BattleStat;
use crate::stats::{calculate_hp, calculate_stat, next_breakpoint, EV_BREAKPOINTS_LV50, MAX_EV_TOTAL};

/// Relative weight of the two defense axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkBias {
    pub physical: u32,
    pub special: u32,
}

impl Default for BulkBias {
    fn default() -> Self {
        Self {
            physical: 1,
            special: 1,
        }
    }
}

impl BulkBias {
    pub const fn physical_only() -> Self {
        Self {
            physical: 1,
            special: 0,
        }
    }

    pub const fn special_only() -> Self {
        Self {
            physical: 0,
            special: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkSpread {
    pub hp_ev: u16,
    pub def_ev: u16,
    pub spd_ev: u16,
    pub hp: u16,
    pub def: u16,
    pub spd: u16,
    pub score: u64,
}

impl BulkSpread {
    pub fn total(&self) -> u16 {
        self.hp_ev + self.def_ev + self.spd_ev
    }
}

fn evaluate(build: &Combatant, bias: BulkBias, hp_ev: u16, def_ev: u16, spd_ev: u16) -> BulkSpread {
    let hp = calculate_hp(build.base.hp, build.ivs.hp(), hp_ev, build.level);
    let def = calculate_stat(
        build.base.def,
        build.ivs.get(BattleStat::Def),
        def_ev,
        build.level,
        build.nature.stat_modifier(BattleStat::Def),
    );
    let spd = calculate_stat(
        build.base.spd,
        build.ivs.get(BattleStat::SpD),
        spd_ev,
        build.level,
        build.nature.stat_modifier(BattleStat::SpD),
    );
    let score = hp as u64
        * (bias.physical as u64 * def as u64 + bias.special as u64 * spd as u64);
    BulkSpread {
        hp_ev,
        def_ev,
        spd_ev,
        hp,
        def,
        spd,
        score,
    }
}

/// Exhaustively pick the best-scoring spread within `ev_budget`.
///
/// EVs already spent on Atk, SpA, or Spe shrink the available budget.
/// Ties go to the cheaper spread, then to the one with more HP.
pub fn optimize_bulk(build: &Combatant, ev_budget: u16, bias: BulkBias) -> BulkSpread {
    let existing = build.evs.values();
    let other_total = existing[1] + existing[3] + existing[5];
    let budget = ev_budget.min(MAX_EV_TOTAL).saturating_sub(other_total);

    let spd_axis: &[u16] = if bias.special == 0 { &[0] } else { &EV_BREAKPOINTS_LV50 };
    let def_axis: &[u16] = if bias.physical == 0 { &[0] } else { &EV_BREAKPOINTS_LV50 };

    let mut best = evaluate(build, bias, 0, 0, 0);
    for &hp_ev in &EV_BREAKPOINTS_LV50 {
        for &def_ev in def_axis {
            if hp_ev + def_ev > budget {
                break;
            }
            for &spd_ev in spd_axis {
                if hp_ev + def_ev + spd_ev > budget {
                    break;
                }
                let candidate = evaluate(build, bias, hp_ev, def_ev, spd_ev);
                let better = candidate.score > best.score
                    || (candidate.score == best.score
                        && (candidate.total() < best.total()
                            || (candidate.total() == best.total() && candidate.hp > best.hp)));
                if better {
                    best = candidate;
                }
            }
        }
    }
    best
}

/// Score gained by stepping each axis to its next breakpoint from an
/// existing spread. `None` means the axis is maxed.
pub fn marginal_gains(
    build: &Combatant,
    spread: &BulkSpread,
    bias: BulkBias,
) -> [Option<u64>; 3] {
    let gain = |hp_ev: u16, def_ev: u16, spd_ev: u16| -> u64 {
        evaluate(build, bias, hp_ev, def_ev, spd_ev)
            .score
            .saturating_sub(spread.score)
    };
    [
        next_breakpoint(spread.hp_ev).map(|ev| gain(ev, spread.def_ev, spread.spd_ev)),
        next_breakpoint(spread.def_ev).map(|ev| gain(spread.hp_ev, ev, spread.spd_ev)),
        next_breakpoint(spread.spd_ev).map(|ev| gain(spread.hp_ev, spread.def_ev, ev)),
    ]
}
