//! Pipeline phases: power, stats, condition modifiers, final chain.
//!
//! Each phase consumes the resolved [`DamageContext`] and nothing else.
//! Base-power modifiers chain on the 4096 scale before the core
//! formula; stat-side multipliers use floor division; everything after
//! the random roll goes through the chained final-modifier pass.

use crate::abilities::AbilityId;
use crate::damage::context::DamageContext;
use crate::damage::effectiveness::{is_resisted, is_super_effective};
use crate::damage::formula::{
    apply_boost, apply_chained, apply_modifier, apply_modifier_floor, chain_mods,
};
use crate::damage::modifier::Modifier;
use crate::field::{Screens, Terrain, Weather};
use crate::moves::MoveFlags;
use crate::natures::BattleStat;
use crate::types::Type;

/// How weather interacts with the move.
#[derive(Debug, PartialEq, Eq)]
pub enum WeatherEffect {
    Neutral,
    Mod(Modifier),
    /// Extreme weather washes the move out entirely.
    Negated,
}

/// Effective base power after attacker ability and item boosts.
pub fn effective_power(ctx: &DamageContext) -> u32 {
    let mut mods: Vec<Modifier> = Vec::new();

    if ctx.ate_converted {
        mods.push(Modifier::ONE_POINT_TWO);
    }

    if let Some(ability) = ctx.attacker.ability {
        match ability {
            AbilityId::Technician if ctx.mv.power <= 60 => {
                mods.push(Modifier::ONE_POINT_FIVE)
            }
            AbilityId::ToughClaws if ctx.mv.flags.contains(MoveFlags::CONTACT) => {
                mods.push(Modifier::ONE_POINT_THREE)
            }
            AbilityId::IronFist if ctx.mv.flags.contains(MoveFlags::PUNCH) => {
                mods.push(Modifier::ONE_POINT_TWO)
            }
            AbilityId::Sharpness if ctx.mv.flags.contains(MoveFlags::SLICING) => {
                mods.push(Modifier::ONE_POINT_FIVE)
            }
            AbilityId::StrongJaw if ctx.mv.flags.contains(MoveFlags::BITING) => {
                mods.push(Modifier::ONE_POINT_FIVE)
            }
            AbilityId::MegaLauncher if ctx.mv.flags.contains(MoveFlags::PULSE) => {
                mods.push(Modifier::ONE_POINT_FIVE)
            }
            AbilityId::PunkRock if ctx.mv.flags.contains(MoveFlags::SOUND) => {
                mods.push(Modifier::ONE_POINT_THREE)
            }
            AbilityId::Transistor if ctx.move_type == Type::Electric => {
                mods.push(Modifier::ONE_POINT_THREE)
            }
            AbilityId::DragonsMaw if ctx.move_type == Type::Dragon => {
                mods.push(Modifier::ONE_POINT_FIVE)
            }
            AbilityId::WaterBubble if ctx.move_type == Type::Water => {
                mods.push(Modifier::DOUBLE)
            }
            AbilityId::SheerForce if ctx.mv.effect_chance.is_some() => {
                mods.push(Modifier::ONE_POINT_THREE)
            }
            _ => {}
        }
    }

    if let Some(item) = ctx.attacker.item {
        if item.boosted_type() == Some(ctx.move_type) {
            mods.push(Modifier::ONE_POINT_TWO);
        }
    }

    let chained = chain_mods(&mods);
    apply_chained(ctx.mv.power as u32, chained).max(1)
}

/// Effective attack and defense for the core formula.
///
/// Crits ignore the attacker's drops and the defender's boosts. All
/// flat multipliers (Choice items, ruin auras, Huge Power, weather stat
/// boosts) floor; Guts alone rounds on the 4096 scale.
pub fn effective_stats(ctx: &DamageContext) -> (u32, u32) {
    let physical = ctx.mv.is_physical();

    // Attacking side
    let (atk_stat, mut atk_stage) = if physical {
        (BattleStat::Atk, ctx.field.attack_stage)
    } else {
        (BattleStat::SpA, ctx.field.special_attack_stage)
    };
    if ctx.critical {
        atk_stage = atk_stage.max(0);
    }
    let mut attack = apply_boost(ctx.attacker_stats.get(atk_stat), atk_stage) as u32;

    if let Some(ability) = ctx.attacker.ability {
        match ability {
            AbilityId::HugePower | AbilityId::PurePower if physical => {
                attack = apply_modifier_floor(attack, 2, 1);
            }
            AbilityId::Hustle | AbilityId::GorillaTactics if physical => {
                attack = apply_modifier_floor(attack, 3, 2);
            }
            AbilityId::Guts if physical && ctx.field.attacker_statused => {
                attack = apply_modifier(attack, Modifier::ONE_POINT_FIVE);
            }
            _ => {}
        }
    }

    if let Some(item) = ctx.attacker.item {
        if (physical && item.is_choice_physical()) || (!physical && item.is_choice_special()) {
            attack = apply_modifier_floor(attack, 3, 2);
        }
    }

    // The defender's ruin aura drops the matching attack stat.
    if let Some(ability) = ctx.visible_defender_ability() {
        if ability.ruin_target() == Some(atk_stat) {
            attack = apply_modifier_floor(attack, 3, 4);
        }
    }

    // Defending side
    let (def_stat, mut def_stage) = if physical {
        (BattleStat::Def, ctx.field.defense_stage)
    } else {
        (BattleStat::SpD, ctx.field.special_defense_stage)
    };
    if ctx.critical {
        def_stage = def_stage.min(0);
    }
    let mut defense = apply_boost(ctx.defender_stats.get(def_stat), def_stage) as u32;

    let defender_types = ctx.defender.effective_types(ctx.field.defender_tera);
    match ctx.field.weather {
        Some(Weather::Sand) if !physical && defender_types.contains(Type::Rock) => {
            defense = apply_modifier_floor(defense, 3, 2);
        }
        Some(Weather::Snow) if physical && defender_types.contains(Type::Ice) => {
            defense = apply_modifier_floor(defense, 3, 2);
        }
        _ => {}
    }

    if let Some(ability) = ctx.visible_defender_ability() {
        if ability == AbilityId::FurCoat && physical {
            defense = apply_modifier_floor(defense, 2, 1);
        }
    }

    if ctx.defender.item == Some(crate::items::ItemId::AssaultVest) && !physical {
        defense = apply_modifier_floor(defense, 3, 2);
    }

    // The attacker's ruin aura drops the matching defense stat.
    if let Some(ability) = ctx.attacker.ability {
        if ability.ruin_target() == Some(def_stat) {
            defense = apply_modifier_floor(defense, 3, 4);
        }
    }

    (attack.max(1), defense.max(1))
}

/// Weather's multiplicative effect on the move, if any.
pub fn weather_mod(ctx: &DamageContext) -> WeatherEffect {
    let Some(weather) = ctx.field.weather else {
        return WeatherEffect::Neutral;
    };
    match (weather, ctx.move_type) {
        (Weather::HarshSun, Type::Water) | (Weather::HeavyRain, Type::Fire) => {
            WeatherEffect::Negated
        }
        (Weather::Sun | Weather::HarshSun, Type::Fire)
        | (Weather::Rain | Weather::HeavyRain, Type::Water) => {
            WeatherEffect::Mod(Modifier::WEATHER_BOOST)
        }
        (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => {
            WeatherEffect::Mod(Modifier::WEATHER_NERF)
        }
        _ => WeatherEffect::Neutral,
    }
}

/// Terrain's multiplicative effect on the move, if any.
pub fn terrain_mod(ctx: &DamageContext) -> Option<Modifier> {
    let terrain = ctx.field.terrain?;
    match terrain {
        Terrain::Electric if ctx.field.attacker_grounded && ctx.move_type == Type::Electric => {
            Some(Modifier::TERRAIN_BOOST)
        }
        Terrain::Grassy if ctx.field.attacker_grounded && ctx.move_type == Type::Grass => {
            Some(Modifier::TERRAIN_BOOST)
        }
        Terrain::Psychic if ctx.field.attacker_grounded && ctx.move_type == Type::Psychic => {
            Some(Modifier::TERRAIN_BOOST)
        }
        Terrain::Misty if ctx.field.defender_grounded && ctx.move_type == Type::Dragon => {
            Some(Modifier::HALF)
        }
        _ => None,
    }
}

/// Whether the defending screen applies to this move.
fn screen_applies(ctx: &DamageContext) -> bool {
    if ctx.critical || ctx.attacker.ability == Some(AbilityId::Infiltrator) {
        return false;
    }
    let screens = ctx.field.screens;
    screens.contains(Screens::AURORA_VEIL)
        || (ctx.mv.is_physical() && screens.contains(Screens::REFLECT))
        || (!ctx.mv.is_physical() && screens.contains(Screens::LIGHT_SCREEN))
}

/// The final modifier chain, applied once after effectiveness.
///
/// Order follows the cartridge: burn, screens, defender abilities,
/// Friend Guard, attacker abilities, items, Helping Hand, berries.
pub fn final_mods(ctx: &DamageContext) -> Vec<Modifier> {
    let mut mods: Vec<Modifier> = Vec::new();
    let physical = ctx.mv.is_physical();
    let se = is_super_effective(ctx.effectiveness);

    if physical
        && ctx.field.attacker_burned
        && ctx.attacker.ability != Some(AbilityId::Guts)
    {
        mods.push(Modifier::BURN);
    }

    if screen_applies(ctx) {
        mods.push(if ctx.field.doubles {
            Modifier::SCREENS_DOUBLES
        } else {
            Modifier::SCREENS_SINGLES
        });
    }

    if let Some(ability) = ctx.visible_defender_ability() {
        if ability.halves_at_full_hp() && ctx.field.defender_at_full_hp {
            mods.push(Modifier::HALF);
        }
        match ability {
            AbilityId::Fluffy => {
                if ctx.mv.flags.contains(MoveFlags::CONTACT) {
                    mods.push(Modifier::HALF);
                }
                if ctx.move_type == Type::Fire {
                    mods.push(Modifier::DOUBLE);
                }
            }
            AbilityId::PurifyingSalt if ctx.move_type == Type::Ghost => {
                mods.push(Modifier::HALF)
            }
            AbilityId::IceScales if !physical => mods.push(Modifier::HALF),
            AbilityId::ThickFat if matches!(ctx.move_type, Type::Fire | Type::Ice) => {
                mods.push(Modifier::HALF)
            }
            AbilityId::Heatproof if ctx.move_type == Type::Fire => {
                mods.push(Modifier::HALF)
            }
            AbilityId::WaterBubble if ctx.move_type == Type::Fire => {
                mods.push(Modifier::HALF)
            }
            AbilityId::DrySkin if ctx.move_type == Type::Fire => {
                mods.push(Modifier::ONE_POINT_TWO_FIVE)
            }
            _ => {}
        }
        if ability.reduces_super_effective() && se {
            mods.push(Modifier::FILTER);
        }
    }

    if ctx.field.friend_guard {
        mods.push(Modifier::FRIEND_GUARD);
    }

    if let Some(ability) = ctx.attacker.ability {
        match ability {
            AbilityId::TintedLens if is_resisted(ctx.effectiveness) => {
                mods.push(Modifier::DOUBLE)
            }
            AbilityId::Neuroforce if se => mods.push(Modifier::ONE_POINT_TWO_FIVE),
            _ => {}
        }
    }

    if let Some(item) = ctx.attacker.item {
        use crate::items::ItemId;
        match item {
            ItemId::ExpertBelt if se => mods.push(Modifier::ONE_POINT_TWO),
            ItemId::LifeOrb => mods.push(Modifier::LIFE_ORB),
            ItemId::MuscleBand if physical => mods.push(Modifier::ONE_POINT_ONE),
            ItemId::WiseGlasses if !physical => mods.push(Modifier::ONE_POINT_ONE),
            ItemId::PunchingGlove if ctx.mv.flags.contains(MoveFlags::PUNCH) => {
                mods.push(Modifier::ONE_POINT_ONE)
            }
            _ => {}
        }
    }

    if ctx.field.helping_hand {
        mods.push(Modifier::HELPING_HAND);
    }

    if let Some(item) = ctx.defender.item {
        if let Some((berry_type, requires_se)) = item.resist_berry() {
            if berry_type == ctx.move_type && (se || !requires_se) {
                mods.push(Modifier::HALF);
            }
        }
    }

    mods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{BaseStats, Combatant, EvSpread};
    use crate::field::FieldState;
    use crate::items::ItemId;
    use crate::moves::Move;
    use crate::types::TypePair;

    fn plain(types: TypePair) -> Combatant {
        Combatant::new(BaseStats::new(100, 100, 100, 100, 100, 100), types)
    }

    #[test]
    fn test_power_boosts_chain() {
        let defender = plain(TypePair::single(Type::Normal));
        let field = FieldState::default();

        // Technician on a 60-power move: 60 * 1.5 = 90
        let attacker = plain(TypePair::single(Type::Water)).ability(AbilityId::Technician);
        let mv = Move::physical(Type::Water, 60);
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        assert_eq!(effective_power(&ctx), 90);

        // ... but not on 61 power
        let mv = Move::physical(Type::Water, 61);
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        assert_eq!(effective_power(&ctx), 61);

        // Mystic Water on a Water move: 90 * 1.2 = 108
        let attacker = plain(TypePair::single(Type::Water)).item(ItemId::MysticWater);
        let mv = Move::special(Type::Water, 90);
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        assert_eq!(effective_power(&ctx), 108);
    }

    #[test]
    fn test_huge_power_and_choice_band_floor() {
        let defender = plain(TypePair::single(Type::Normal));
        let field = FieldState::default();
        let mv = Move::physical(Type::Normal, 80);

        let attacker = plain(TypePair::single(Type::Normal))
            .ability(AbilityId::HugePower)
            .item(ItemId::ChoiceBand);
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let (attack, _) = effective_stats(&ctx);
        // 120 (neutral stat) -> x2 -> 240 -> x1.5 -> 360
        assert_eq!(attack, 360);
    }

    #[test]
    fn test_ruin_auras_hit_the_right_stat() {
        let field = FieldState::default();
        let mv_phys = Move::physical(Type::Normal, 80);
        let mv_spec = Move::special(Type::Normal, 80);

        // Attacker's Sword of Ruin lowers the defender's Def
        let attacker = plain(TypePair::single(Type::Normal)).ability(AbilityId::SwordOfRuin);
        let defender = plain(TypePair::single(Type::Normal));
        let ctx = DamageContext::build(&attacker, &defender, &mv_phys, &field);
        let (_, defense) = effective_stats(&ctx);
        assert_eq!(defense, 120 * 3 / 4);

        // ... but not the SpD
        let ctx = DamageContext::build(&attacker, &defender, &mv_spec, &field);
        let (_, defense) = effective_stats(&ctx);
        assert_eq!(defense, 120);

        // Defender's Vessel of Ruin lowers the attacker's SpA
        let attacker = plain(TypePair::single(Type::Normal));
        let defender = plain(TypePair::single(Type::Normal)).ability(AbilityId::VesselOfRuin);
        let ctx = DamageContext::build(&attacker, &defender, &mv_spec, &field);
        let (attack, _) = effective_stats(&ctx);
        assert_eq!(attack, 120 * 3 / 4);
    }

    #[test]
    fn test_crit_ignores_the_right_stages() {
        let attacker = plain(TypePair::single(Type::Normal));
        let defender = plain(TypePair::single(Type::Normal));
        let mv = Move::physical(Type::Normal, 80);

        let mut field = FieldState::default();
        field.attack_stage = -2;
        field.defense_stage = 2;

        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let (attack, defense) = effective_stats(&ctx);
        assert_eq!(attack, 60);
        assert_eq!(defense, 240);

        field.critical = true;
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let (attack, defense) = effective_stats(&ctx);
        assert_eq!(attack, 120);
        assert_eq!(defense, 120);

        // Positive attacker stages still count on a crit
        field.attack_stage = 1;
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let (attack, _) = effective_stats(&ctx);
        assert_eq!(attack, 180);
    }

    #[test]
    fn test_weather_table() {
        let attacker = plain(TypePair::single(Type::Fire));
        let defender = plain(TypePair::single(Type::Normal));
        let fire = Move::special(Type::Fire, 90);
        let water = Move::special(Type::Water, 90);

        let field = FieldState::default().with_weather(Weather::Sun);
        let ctx = DamageContext::build(&attacker, &defender, &fire, &field);
        assert_eq!(weather_mod(&ctx), WeatherEffect::Mod(Modifier::WEATHER_BOOST));
        let ctx = DamageContext::build(&attacker, &defender, &water, &field);
        assert_eq!(weather_mod(&ctx), WeatherEffect::Mod(Modifier::WEATHER_NERF));

        let field = FieldState::default().with_weather(Weather::HeavyRain);
        let ctx = DamageContext::build(&attacker, &defender, &fire, &field);
        assert_eq!(weather_mod(&ctx), WeatherEffect::Negated);

        let field = FieldState::default().with_weather(Weather::Sand);
        let ctx = DamageContext::build(&attacker, &defender, &fire, &field);
        assert_eq!(weather_mod(&ctx), WeatherEffect::Neutral);
    }

    #[test]
    fn test_sand_boosts_rock_spd() {
        let attacker = plain(TypePair::single(Type::Normal));
        let defender = plain(TypePair::single(Type::Rock))
            .evs(EvSpread::default());
        let mv = Move::special(Type::Normal, 80);
        let field = FieldState::default().with_weather(Weather::Sand);

        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let (_, defense) = effective_stats(&ctx);
        assert_eq!(defense, 180);

        // Physical hits don't care
        let mv = Move::physical(Type::Normal, 80);
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let (_, defense) = effective_stats(&ctx);
        assert_eq!(defense, 120);
    }

    #[test]
    fn test_terrain_table() {
        let attacker = plain(TypePair::single(Type::Electric));
        let defender = plain(TypePair::single(Type::Normal));
        let mv = Move::special(Type::Electric, 90);

        let field = FieldState::default().with_terrain(Terrain::Electric);
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        assert_eq!(terrain_mod(&ctx), Some(Modifier::TERRAIN_BOOST));

        // Airborne attacker gets nothing
        let mut airborne = field;
        airborne.attacker_grounded = false;
        let ctx = DamageContext::build(&attacker, &defender, &mv, &airborne);
        assert_eq!(terrain_mod(&ctx), None);

        // Misty halves Dragon into a grounded defender
        let dragon = Move::special(Type::Dragon, 100);
        let field = FieldState::default().with_terrain(Terrain::Misty);
        let ctx = DamageContext::build(&attacker, &defender, &dragon, &field);
        assert_eq!(terrain_mod(&ctx), Some(Modifier::HALF));
    }

    #[test]
    fn test_final_chain_contents() {
        let attacker = plain(TypePair::single(Type::Normal)).item(ItemId::LifeOrb);
        let defender = plain(TypePair::single(Type::Normal));
        let mv = Move::physical(Type::Normal, 80);

        let mut field = FieldState::default();
        field.attacker_burned = true;
        field.screens = Screens::REFLECT;
        field.helping_hand = true;

        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        let mods = final_mods(&ctx);
        assert_eq!(
            mods,
            vec![
                Modifier::BURN,
                Modifier::SCREENS_DOUBLES,
                Modifier::LIFE_ORB,
                Modifier::HELPING_HAND,
            ]
        );

        // Guts ignores the burn; crits ignore the screen
        let gutsy = plain(TypePair::single(Type::Normal)).ability(AbilityId::Guts);
        field.critical = true;
        let ctx = DamageContext::build(&gutsy, &defender, &mv, &field);
        assert_eq!(final_mods(&ctx), vec![Modifier::HELPING_HAND]);
    }

    #[test]
    fn test_infiltrator_ignores_screens() {
        let attacker = plain(TypePair::single(Type::Normal)).ability(AbilityId::Infiltrator);
        let defender = plain(TypePair::single(Type::Normal));
        let mv = Move::physical(Type::Normal, 80);

        let mut field = FieldState::default();
        field.screens = Screens::REFLECT | Screens::LIGHT_SCREEN;
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        assert!(final_mods(&ctx).is_empty());
    }

    #[test]
    fn test_defensive_ability_mods_respect_mold_breaker() {
        let defender = plain(TypePair::single(Type::Dragon)).ability(AbilityId::Multiscale);
        let mv = Move::physical(Type::Normal, 80);
        let field = FieldState::default();

        let attacker = plain(TypePair::single(Type::Normal));
        let ctx = DamageContext::build(&attacker, &defender, &mv, &field);
        assert_eq!(final_mods(&ctx), vec![Modifier::HALF]);

        let breaker = plain(TypePair::single(Type::Normal)).ability(AbilityId::MoldBreaker);
        let ctx = DamageContext::build(&breaker, &defender, &mv, &field);
        assert!(final_mods(&ctx).is_empty());
    }

    #[test]
    fn test_resist_berry_gating() {
        let attacker = plain(TypePair::single(Type::Ice));
        let mv = Move::special(Type::Ice, 110);
        let field = FieldState::default();

        // Yache only halves when Ice is super effective
        let holder = plain(TypePair::single(Type::Dragon)).item(ItemId::YacheBerry);
        let ctx = DamageContext::build(&attacker, &holder, &mv, &field);
        assert_eq!(final_mods(&ctx), vec![Modifier::HALF]);

        let neutral_holder = plain(TypePair::single(Type::Normal)).item(ItemId::YacheBerry);
        let ctx = DamageContext::build(&attacker, &neutral_holder, &mv, &field);
        assert!(final_mods(&ctx).is_empty());

        // Chilan halves any Normal hit
        let chilan = plain(TypePair::single(Type::Normal)).item(ItemId::ChilanBerry);
        let tackle = Move::physical(Type::Normal, 90);
        let ctx = DamageContext::build(&attacker, &chilan, &tackle, &field);
        assert_eq!(final_mods(&ctx), vec![Modifier::HALF]);
    }
}
