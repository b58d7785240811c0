//! The damage pipeline.
//!
//! Phases run in cartridge order: effective power, effective stats,
//! base damage, spread penalty, weather, terrain, crit, the 16 random
//! rolls, STAB, type effectiveness, then one chained pass of final
//! modifiers. Every intermediate value is integer math with the exact
//! rounding the games use.

pub mod context;
pub mod effectiveness;
pub mod formula;
pub mod modifier;
pub mod phases;

pub use self::context::DamageContext;
pub use self::modifier::Modifier;

use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;
use crate::field::FieldState;
use crate::ko::{self, KoAnalysis};
use crate::moves::Move;
use crate::stats::ROLL_COUNT;
use self::formula::{apply_chained, apply_modifier, apply_random_roll, chain_mods, get_base_damage};
use self::phases::{
    effective_power, effective_stats, final_mods, terrain_mod, weather_mod, WeatherEffect,
};

/// The full result of one calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// The 16 equally likely damage values for a single hit, low to high.
    pub rolls: [u16; ROLL_COUNT],
    /// Hits per use of the move.
    pub hits: u8,
    /// 4-scale effectiveness the pipeline resolved.
    pub effectiveness: u8,
    /// Whether the crit path was taken.
    pub critical: bool,
    pub defender_hp: u16,
    pub ko: KoAnalysis,
}

impl DamageOutcome {
    fn zero(hits: u8, effectiveness: u8, critical: bool, defender_hp: u16) -> Self {
        let rolls = [0u16; ROLL_COUNT];
        let ko = ko::analyze(&rolls, hits.max(1), defender_hp);
        Self {
            rolls,
            hits: hits.max(1),
            effectiveness,
            critical,
            defender_hp,
            ko,
        }
    }

    /// Lowest total damage for one use of the move.
    pub fn min_total(&self) -> u32 {
        self.rolls[0] as u32 * self.hits as u32
    }

    /// Highest total damage for one use of the move.
    pub fn max_total(&self) -> u32 {
        self.rolls[ROLL_COUNT - 1] as u32 * self.hits as u32
    }

    pub fn deals_damage(&self) -> bool {
        self.max_total() > 0
    }

    /// Minimum damage as tenths of a percent of the defender's HP.
    pub fn min_percent_tenths(&self) -> u32 {
        self.min_total() * 1000 / self.defender_hp.max(1) as u32
    }

    /// Maximum damage as tenths of a percent of the defender's HP.
    pub fn max_percent_tenths(&self) -> u32 {
        self.max_total() * 1000 / self.defender_hp.max(1) as u32
    }
}

/// Run the full pipeline for one attacker, defender, move, and field.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &FieldState,
) -> DamageOutcome {
    let ctx = DamageContext::build(attacker, defender, mv, field);
    let defender_hp = ctx.defender_stats.hp;

    if !mv.is_damaging() || ctx.effectiveness == 0 {
        return DamageOutcome::zero(ctx.hits, ctx.effectiveness, ctx.critical, defender_hp);
    }

    let weather = weather_mod(&ctx);
    if weather == WeatherEffect::Negated {
        return DamageOutcome::zero(ctx.hits, ctx.effectiveness, ctx.critical, defender_hp);
    }

    let power = effective_power(&ctx);
    let (attack, defense) = effective_stats(&ctx);
    let mut base = get_base_damage(ctx.attacker.level as u32, power, attack, defense);

    if ctx.mv.is_spread() && ctx.field.doubles && ctx.field.multiple_targets {
        base = apply_modifier(base, Modifier::SPREAD);
    }
    if let WeatherEffect::Mod(m) = weather {
        base = apply_modifier(base, m);
    }
    if let Some(m) = terrain_mod(&ctx) {
        base = apply_modifier(base, m);
    }
    if ctx.critical {
        base = apply_modifier(base, Modifier::CRIT);
    }

    let chained = chain_mods(&final_mods(&ctx));

    let mut rolls = [0u16; ROLL_COUNT];
    for (i, slot) in rolls.iter_mut().enumerate() {
        let mut damage = apply_random_roll(base, i as u8);
        damage = apply_modifier(damage, ctx.stab);
        damage = damage * ctx.effectiveness as u32 / 4;
        damage = apply_chained(damage, chained);
        // Extreme stage/power combinations can overflow u16; saturate.
        *slot = damage.max(1).min(u16::MAX as u32) as u16;
    }

    let ko = ko::analyze(&rolls, ctx.hits, defender_hp);

    DamageOutcome {
        rolls,
        hits: ctx.hits,
        effectiveness: ctx.effectiveness,
        critical: ctx.critical,
        defender_hp,
        ko,
    }
}
