//! Inverse EV searches: the smallest investment meeting a goal.
//!
//! All searches walk the level-50 EV breakpoints in a fixed order
//! (total investment ascending, HP preferred on ties) and return the
//! first candidate that meets the goal. An unreachable goal is a
//! normal outcome: [`SearchResult::Infeasible`] carries the best
//! candidate found so the caller can still report how close it gets.

pub mod bulk;
pub mod hp_tuning;

use std::collections::HashMap;

use crate::combatant::{Combatant, EvSpread};
use crate::damage::{calculate_damage, DamageOutcome};
use crate::field::FieldState;
use crate::ko::KoVerdict;
use crate::moves::Move;
use crate::natures::{BattleStat, NatureId};
use crate::stats::{calculate_hp, calculate_stat, EV_BREAKPOINTS_LV50, MAX_EV_TOTAL, ROLL_COUNT};

/// One incoming attack the defender must handle.
#[derive(Clone, Copy, Debug)]
pub struct Threat {
    pub attacker: Combatant,
    pub mv: Move,
    pub field: FieldState,
}

/// Outcome of a search. `Infeasible` is not an error; it reports the
/// best candidate the budget allows.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult<T> {
    Found(T),
    Infeasible { best: T },
}

impl<T> SearchResult<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            SearchResult::Found(value) | SearchResult::Infeasible { best: value } => value,
        }
    }

    pub fn inner(&self) -> &T {
        match self {
            SearchResult::Found(value) | SearchResult::Infeasible { best: value } => value,
        }
    }
}

/// What "surviving" a threat means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurvivalGoal {
    /// No roll combination KOs in a single use of the move.
    Guaranteed,
    /// Survive a single use with at least this chance (0.0 to 1.0).
    AtLeast(f64),
}

/// What "getting the KO" means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KoGoal {
    /// Guaranteed KO within this many turns.
    Guaranteed(u8),
    /// At least this chance (0.0 to 1.0) of a KO within `turns`.
    Chance { turns: u8, at_least: f64 },
}

/// A bulk spread candidate with its worst-case survival chance.
#[derive(Clone, Debug, PartialEq)]
pub struct BulkAllocation {
    pub hp_ev: u16,
    pub def_ev: u16,
    pub spd_ev: u16,
    pub total: u16,
    pub hp: u16,
    /// Lowest single-use survival chance across all threats.
    pub survival: f64,
}

/// An offensive investment with the outcome it produces.
#[derive(Clone, Debug, PartialEq)]
pub struct OffenseAllocation {
    pub ev: u16,
    pub stat: BattleStat,
    pub stat_value: u16,
    pub outcome: DamageOutcome,
}

/// A speed investment, possibly with a nature change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedAllocation {
    pub ev: u16,
    pub nature: NatureId,
    pub speed: u16,
}

/// Chance that `hits` hits, each drawing from `rolls`, sum below `hp`.
fn survival_chance(rolls: &[u16; ROLL_COUNT], hits: u8, hp: u16) -> f64 {
    let hp = hp.max(1) as u32;
    let mut dist: HashMap<u32, u64> = HashMap::from([(0u32, 1u64)]);
    let mut denominator: u64 = 1;
    for _ in 0..hits {
        let mut next: HashMap<u32, u64> = HashMap::with_capacity(dist.len() * 2);
        for (&dealt, &count) in &dist {
            if dealt >= hp {
                *next.entry(hp).or_default() += count * ROLL_COUNT as u64;
                continue;
            }
            for &roll in rolls {
                let sum = (dealt + roll as u32).min(hp);
                *next.entry(sum).or_default() += count;
            }
        }
        dist = next;
        denominator *= ROLL_COUNT as u64;
    }
    let ko = dist.get(&hp).copied().unwrap_or(0);
    1.0 - ko as f64 / denominator as f64
}

/// Find the cheapest HP/Def/SpD spread surviving every threat.
///
/// Only the axes the threats actually hit are searched; the defender's
/// existing EVs outside those axes count against `ev_budget`. Rolls are
/// cached per (threat, defense investment) since HP EVs never change
/// them.
pub fn minimum_bulk(
    defender: &Combatant,
    threats: &[Threat],
    goal: SurvivalGoal,
    ev_budget: u16,
) -> SearchResult<BulkAllocation> {
    let needs_def = threats.iter().any(|t| t.mv.is_physical());
    let needs_spd = threats.iter().any(|t| !t.mv.is_physical() && t.mv.is_damaging());

    let def_axis: &[u16] = if needs_def { &EV_BREAKPOINTS_LV50 } else { &[0] };
    let spd_axis: &[u16] = if needs_spd { &EV_BREAKPOINTS_LV50 } else { &[0] };

    let existing = defender.evs.values();
    let other_total: u16 = existing[1] + existing[3] + existing[5]; // Atk, SpA, Spe
    let budget = ev_budget.min(MAX_EV_TOTAL).saturating_sub(other_total);

    let mut candidates: Vec<(u16, u16, u16, u16)> = Vec::new();
    for &hp_ev in &EV_BREAKPOINTS_LV50 {
        for &def_ev in def_axis {
            for &spd_ev in spd_axis {
                let total = hp_ev + def_ev + spd_ev;
                if total <= budget {
                    candidates.push((total, hp_ev, def_ev, spd_ev));
                }
            }
        }
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    // (threat index, investment on the threat's defense axis) -> rolls
    let mut cache: HashMap<(usize, u16), ([u16; ROLL_COUNT], u8)> = HashMap::new();

    let mut best: Option<BulkAllocation> = None;

    for (total, hp_ev, def_ev, spd_ev) in candidates {
        let hp = calculate_hp(defender.base.hp, defender.ivs.hp(), hp_ev, defender.level);

        let mut worst_survival = 1.0f64;
        for (idx, threat) in threats.iter().enumerate() {
            let axis_ev = if threat.mv.is_physical() { def_ev } else { spd_ev };
            let (rolls, hits) = match cache.get(&(idx, axis_ev)) {
                Some(&cached) => cached,
                None => {
                    let mut values = existing;
                    values[0] = 0;
                    values[2] = def_ev;
                    values[4] = spd_ev;
                    let Ok(evs) = EvSpread::new(values) else {
                        continue;
                    };
                    let candidate = defender.evs(evs);
                    let outcome =
                        calculate_damage(&threat.attacker, &candidate, &threat.mv, &threat.field);
                    cache.insert((idx, axis_ev), (outcome.rolls, outcome.hits));
                    (outcome.rolls, outcome.hits)
                }
            };
            let chance = match goal {
                SurvivalGoal::Guaranteed => {
                    let max_total = rolls[ROLL_COUNT - 1] as u32 * hits as u32;
                    if max_total < hp as u32 {
                        1.0
                    } else {
                        survival_chance(&rolls, hits, hp)
                    }
                }
                SurvivalGoal::AtLeast(_) => survival_chance(&rolls, hits, hp),
            };
            worst_survival = worst_survival.min(chance);
            // A candidate that already lost the guarantee and cannot
            // beat the running best has nothing left to prove.
            if matches!(goal, SurvivalGoal::Guaranteed)
                && worst_survival < 1.0
                && best.as_ref().is_some_and(|b| worst_survival <= b.survival)
            {
                break;
            }
        }

        let allocation = BulkAllocation {
            hp_ev,
            def_ev,
            spd_ev,
            total,
            hp,
            survival: worst_survival,
        };

        let meets = match goal {
            SurvivalGoal::Guaranteed => worst_survival >= 1.0,
            SurvivalGoal::AtLeast(p) => worst_survival >= p,
        };
        if meets {
            return SearchResult::Found(allocation);
        }
        if best.as_ref().is_none_or(|b| allocation.survival > b.survival) {
            best = Some(allocation);
        }
    }

    // The zero spread always enumerates, so best is always present.
    let best = best.unwrap_or(BulkAllocation {
        hp_ev: 0,
        def_ev: 0,
        spd_ev: 0,
        total: 0,
        hp: calculate_hp(defender.base.hp, defender.ivs.hp(), 0, defender.level),
        survival: 0.0,
    });
    SearchResult::Infeasible { best }
}

/// Find the cheapest attacking investment meeting a KO goal.
pub fn minimum_offense(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &FieldState,
    goal: KoGoal,
) -> SearchResult<OffenseAllocation> {
    let stat = if mv.is_physical() {
        BattleStat::Atk
    } else {
        BattleStat::SpA
    };

    let mut best: Option<(f64, OffenseAllocation)> = None;

    for &ev in &EV_BREAKPOINTS_LV50 {
        let Ok(evs) = attacker.evs.with_stat(stat, ev) else {
            continue;
        };
        let candidate = attacker.evs(evs);
        let outcome = calculate_damage(&candidate, defender, mv, field);

        let (meets, score) = match goal {
            KoGoal::Guaranteed(turns) => {
                let ok = matches!(outcome.ko.verdict, KoVerdict::Guaranteed(g) if g <= turns);
                (ok, outcome.ko.chance_within(turns))
            }
            KoGoal::Chance { turns, at_least } => {
                let chance = outcome.ko.chance_within(turns);
                (chance >= at_least, chance)
            }
        };

        let allocation = OffenseAllocation {
            ev,
            stat,
            stat_value: candidate.stat(stat),
            outcome,
        };
        if meets {
            return SearchResult::Found(allocation);
        }
        if best.as_ref().is_none_or(|(s, _)| score > *s) {
            best = Some((score, allocation));
        }
    }

    match best {
        Some((_, allocation)) => SearchResult::Infeasible { best: allocation },
        None => {
            // Every breakpoint overflowed the EV total; report the build as-is.
            let outcome = calculate_damage(attacker, defender, mv, field);
            SearchResult::Infeasible {
                best: OffenseAllocation {
                    ev: attacker.evs.get(stat),
                    stat,
                    stat_value: attacker.stat(stat),
                    outcome,
                },
            }
        }
    }
}

/// Find the cheapest Speed investment reaching `target`, trying the
/// build's own nature before suggesting a +Spe nature.
pub fn minimum_speed(build: &Combatant, target: u16) -> SearchResult<SpeedAllocation> {
    let speed_at = |nature: NatureId, ev: u16| -> u16 {
        calculate_stat(
            build.base.spe,
            build.ivs.get(BattleStat::Spe),
            ev,
            build.level,
            nature.stat_modifier(BattleStat::Spe),
        )
    };

    let fallback_minus = build
        .nature
        .minus()
        .filter(|&m| m != BattleStat::Spe)
        .unwrap_or(BattleStat::Atk);
    let boosted = NatureId::from_grid(BattleStat::Spe, fallback_minus);

    let mut natures = vec![build.nature];
    if build.nature.stat_modifier(BattleStat::Spe) != 11 {
        natures.push(boosted);
    }

    for nature in &natures {
        for &ev in &EV_BREAKPOINTS_LV50 {
            let speed = speed_at(*nature, ev);
            if speed >= target {
                return SearchResult::Found(SpeedAllocation {
                    ev,
                    nature: *nature,
                    speed,
                });
            }
        }
    }

    let fastest = *natures.last().unwrap_or(&build.nature);
    SearchResult::Infeasible {
        best: SpeedAllocation {
            ev: 252,
            nature: fastest,
            speed: speed_at(fastest, 252),
        },
    }
}
