//! Effectiveness resolution against a live defender.
//!
//! The raw chart in [`crate::types`] knows nothing about abilities or
//! Terastallization; this module layers both on top. Ability-based
//! immunities (Levitate, Flash Fire, ...) zero the result unless the
//! attacker ignores abilities, and Scrappy-style attackers punch
//! through the Ghost immunity of Normal and Fighting moves.

use crate::abilities::AbilityId;
use crate::combatant::Combatant;
use crate::items::ItemId;
use crate::types::{Type, TypePair, EFF_NEUTRAL};

/// Whether the attacker's ability lets Normal/Fighting moves hit Ghosts.
fn ghost_bypass(move_type: Type, attacker_ability: Option<AbilityId>) -> bool {
    matches!(move_type, Type::Normal | Type::Fighting)
        && attacker_ability.is_some_and(|a| a.bypasses_ghost_immunity())
}

/// Chart effectiveness with the Ghost bypass applied per defending type.
fn chart_effectiveness(move_type: Type, types: TypePair, bypass: bool) -> u8 {
    let single = |t: Type| -> u16 {
        if bypass && t == Type::Ghost && move_type.against(t) == 0 {
            EFF_NEUTRAL as u16
        } else {
            move_type.against(t) as u16
        }
    };
    let e1 = single(types.primary);
    let e2 = match types.secondary {
        Some(t) => single(t),
        None => EFF_NEUTRAL as u16,
    };
    (e1 * e2 / 4) as u8
}

/// Resolve the 4-scale effectiveness of a move against a defender.
///
/// Tera replaces the defender's typing entirely. A defender ability
/// that absorbs the move's type zeroes the result unless the attacker
/// has Mold Breaker (or an equivalent); an Air Balloon zeroes Ground
/// moves regardless, since it is an item rather than an ability.
pub fn resolve_effectiveness(
    move_type: Type,
    attacker_ability: Option<AbilityId>,
    defender: &Combatant,
    defender_tera: bool,
) -> u8 {
    if move_type == Type::Ground && defender.item == Some(ItemId::AirBalloon) {
        return 0;
    }

    let ignores_abilities =
        attacker_ability.is_some_and(|a| a.ignores_defender_ability());

    if !ignores_abilities {
        if let Some(ability) = defender.ability {
            if ability.immune_type() == Some(move_type) {
                return 0;
            }
        }
    }

    let types = defender.effective_types(defender_tera);
    let bypass = ghost_bypass(move_type, attacker_ability);
    chart_effectiveness(move_type, types, bypass)
}

/// Whether a 4-scale effectiveness is super effective.
#[inline]
pub const fn is_super_effective(eff: u8) -> bool {
    eff > EFF_NEUTRAL
}

/// Whether a 4-scale effectiveness is resisted (but not an immunity).
#[inline]
pub const fn is_resisted(eff: u8) -> bool {
    eff > 0 && eff < EFF_NEUTRAL
}

/// Human-readable multiplier for output lines ("2x", "0.25x").
pub fn effectiveness_label(eff: u8) -> &'static str {
    match eff {
        0 => "0x",
        1 => "0.25x",
        2 => "0.5x",
        4 => "1x",
        8 => "2x",
        16 => "4x",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::BaseStats;

    fn defender(types: TypePair) -> Combatant {
        Combatant::new(BaseStats::new(100, 100, 100, 100, 100, 100), types)
    }

    #[test]
    fn test_plain_chart_lookup() {
        let gyarados = defender(TypePair::dual(Type::Water, Type::Flying));
        assert_eq!(resolve_effectiveness(Type::Electric, None, &gyarados, false), 16);
        assert_eq!(resolve_effectiveness(Type::Ground, None, &gyarados, false), 0);
    }

    #[test]
    fn test_ability_immunity_and_mold_breaker() {
        let levitator =
            defender(TypePair::single(Type::Steel)).ability(AbilityId::Levitate);
        assert_eq!(resolve_effectiveness(Type::Ground, None, &levitator, false), 0);
        // Mold Breaker reads straight from the chart: Ground vs Steel = 2x
        assert_eq!(
            resolve_effectiveness(
                Type::Ground,
                Some(AbilityId::MoldBreaker),
                &levitator,
                false
            ),
            8
        );
    }

    #[test]
    fn test_scrappy_hits_ghosts() {
        let ghost = defender(TypePair::dual(Type::Ghost, Type::Fairy));
        assert_eq!(resolve_effectiveness(Type::Normal, None, &ghost, false), 0);
        // Scrappy treats the Ghost component as neutral; Fairy is still neutral
        assert_eq!(
            resolve_effectiveness(Type::Normal, Some(AbilityId::Scrappy), &ghost, false),
            4
        );
        // Fighting vs Ghost/Fairy with Minds Eye: neutral * 0.5 = 0.5x
        assert_eq!(
            resolve_effectiveness(Type::Fighting, Some(AbilityId::MindsEye), &ghost, false),
            2
        );
        // Scrappy does not help non-Normal/Fighting moves
        assert_eq!(
            resolve_effectiveness(Type::Ghost, Some(AbilityId::Scrappy), &defender(TypePair::single(Type::Normal)), false),
            0
        );
    }

    #[test]
    fn test_air_balloon_blocks_ground() {
        let holder = defender(TypePair::single(Type::Steel)).item(ItemId::AirBalloon);
        assert_eq!(resolve_effectiveness(Type::Ground, None, &holder, false), 0);
        // Mold Breaker does not pop the balloon
        assert_eq!(
            resolve_effectiveness(Type::Ground, Some(AbilityId::MoldBreaker), &holder, false),
            0
        );
        // Other move types pass through normally
        assert_eq!(resolve_effectiveness(Type::Fire, None, &holder, false), 8);
    }

    #[test]
    fn test_tera_replaces_typing() {
        let d = defender(TypePair::dual(Type::Water, Type::Flying)).tera(Type::Steel);
        // Pre-Tera: Electric is 4x
        assert_eq!(resolve_effectiveness(Type::Electric, None, &d, false), 16);
        // After Tera Steel: Electric is neutral, Ground is 2x
        assert_eq!(resolve_effectiveness(Type::Electric, None, &d, true), 4);
        assert_eq!(resolve_effectiveness(Type::Ground, None, &d, true), 8);
    }

    #[test]
    fn test_labels() {
        assert_eq!(effectiveness_label(8), "2x");
        assert_eq!(effectiveness_label(1), "0.25x");
        assert!(is_super_effective(8));
        assert!(is_resisted(2));
        assert!(!is_resisted(0));
    }
}
