//! Scenario sweeps: the same matchup under many field conditions.
//!
//! Each scenario is a named transformation of the base field. The
//! sweep runs the full pipeline per scenario and renders a familiar
//! calc-style summary line for each result.

use crate::combatant::Combatant;
use crate::damage::{calculate_damage, DamageOutcome};
use crate::field::{FieldState, Screens, Weather};
use crate::moves::Move;
use crate::natures::BattleStat;

/// A labeled field transformation.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub label: &'static str,
    pub apply: fn(FieldState) -> FieldState,
}

/// The usual suspects worth checking for any matchup.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            label: "neutral",
            apply: |f| f,
        },
        Scenario {
            label: "critical hit",
            apply: |mut f| {
                f.critical = true;
                f
            },
        },
        Scenario {
            label: "helping hand",
            apply: |mut f| {
                f.helping_hand = true;
                f
            },
        },
        Scenario {
            label: "dual screens",
            apply: |mut f| {
                f.screens = Screens::REFLECT | Screens::LIGHT_SCREEN;
                f
            },
        },
        Scenario {
            label: "rain",
            apply: |f| f.with_weather(Weather::Rain),
        },
        Scenario {
            label: "sun",
            apply: |f| f.with_weather(Weather::Sun),
        },
        Scenario {
            label: "tera",
            apply: |mut f| {
                f.attacker_tera = true;
                f
            },
        },
        Scenario {
            label: "intimidated",
            apply: |mut f| {
                f.attack_stage -= 1;
                f
            },
        },
    ]
}

/// One sweep result.
#[derive(Clone, Debug)]
pub struct SweepRow {
    pub label: &'static str,
    pub line: String,
    pub outcome: DamageOutcome,
}

/// Run every scenario against the base field.
pub fn run_sweep(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    base_field: &FieldState,
    scenarios: &[Scenario],
) -> Vec<SweepRow> {
    scenarios
        .iter()
        .map(|scenario| {
            let field = (scenario.apply)(*base_field);
            let outcome = calculate_damage(attacker, defender, mv, &field);
            let line = calc_line(attacker, defender, mv, &outcome);
            SweepRow {
                label: scenario.label,
                line,
                outcome,
            }
        })
        .collect()
}

/// One scenario's aggregate over a whole set of matchups.
#[derive(Clone, Debug)]
pub struct ScenarioSummary {
    pub label: &'static str,
    pub rows: Vec<SweepRow>,
    /// Matchups that are a guaranteed OHKO under this scenario.
    pub ohko: usize,
    /// Matchups that are a guaranteed KO in two turns or fewer.
    pub two_hko: usize,
}

/// Run every move against every defender under every scenario,
/// counting guaranteed KOs per scenario.
pub fn run_matrix(
    attacker: &Combatant,
    moves: &[Move],
    defenders: &[Combatant],
    base_field: &FieldState,
    scenarios: &[Scenario],
) -> Vec<ScenarioSummary> {
    scenarios
        .iter()
        .map(|scenario| {
            let field = (scenario.apply)(*base_field);
            let mut rows = Vec::with_capacity(moves.len() * defenders.len());
            let mut ohko = 0;
            let mut two_hko = 0;
            for mv in moves {
                for defender in defenders {
                    let outcome = calculate_damage(attacker, defender, mv, &field);
                    if outcome.ko.chance_within(1) >= 0.999 {
                        ohko += 1;
                    }
                    if outcome.ko.chance_within(2) >= 0.999 {
                        two_hko += 1;
                    }
                    rows.push(SweepRow {
                        label: scenario.label,
                        line: calc_line(attacker, defender, mv, &outcome),
                        outcome,
                    });
                }
            }
            ScenarioSummary {
                label: scenario.label,
                rows,
                ohko,
                two_hko,
            }
        })
        .collect()
}

fn stat_suffix(build: &Combatant, stat: BattleStat) -> &'static str {
    if build.nature.plus() == Some(stat) {
        "+"
    } else if build.nature.minus() == Some(stat) {
        "-"
    } else {
        ""
    }
}

fn fmt_tenths(tenths: u32) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Render a calc-style summary line for an outcome.
pub fn calc_line(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    outcome: &DamageOutcome,
) -> String {
    let atk_stat = if mv.is_physical() {
        BattleStat::Atk
    } else {
        BattleStat::SpA
    };
    let def_stat = if mv.is_physical() {
        BattleStat::Def
    } else {
        BattleStat::SpD
    };
    let item = attacker
        .item
        .map(|i| format!("{} ", i.name()))
        .unwrap_or_default();

    format!(
        "{}{} {} {}{} BP {} vs. {} HP / {}{} {}: {}-{} ({} - {}%) -- {}",
        attacker.evs.get(atk_stat),
        stat_suffix(attacker, atk_stat),
        atk_stat.name(),
        item,
        mv.power,
        mv.typ.name(),
        defender.evs.hp(),
        defender.evs.get(def_stat),
        stat_suffix(defender, def_stat),
        def_stat.name(),
        outcome.min_total(),
        outcome.max_total(),
        fmt_tenths(outcome.min_percent_tenths()),
        fmt_tenths(outcome.max_percent_tenths()),
        outcome.ko.verdict,
    )
}
