//! HP remainder tuning.
//!
//! Residual healing and recoil both floor-divide max HP, so specific
//! remainders get strictly more value per point: Leftovers wants HP
//! divisible by 16, Life Orb wants HP ending in 9 mod 10 (the recoil
//! floors away a full point), and Sitrus Berry restores exactly a
//! quarter when HP is divisible by 4.

use crate::combatant::Combatant;
use crate::items::ItemId;
use crate::stats::{calculate_hp, EV_BREAKPOINTS_LV50};

/// The (modulus, remainder) an item prefers for max HP.
pub const fn preferred_remainder(item: ItemId) -> Option<(u16, u16)> {
    match item {
        ItemId::Leftovers => Some((16, 0)),
        ItemId::LifeOrb => Some((10, 9)),
        ItemId::SitrusBerry => Some((4, 0)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpTuning {
    pub ev: u16,
    pub hp: u16,
}

/// Highest affordable HP investment whose stat hits the item's
/// preferred remainder. `None` when the item has no preference or no
/// breakpoint under `max_ev` lands on it.
pub fn tune_hp(build: &Combatant, item: ItemId, max_ev: u16) -> Option<HpTuning> {
    let (modulus, remainder) = preferred_remainder(item)?;
    EV_BREAKPOINTS_LV50
        .iter()
        .rev()
        .copied()
        .filter(|&ev| ev <= max_ev)
        .map(|ev| HpTuning {
            ev,
            hp: calculate_hp(build.base.hp, build.ivs.hp(), ev, build.level),
        })
        .find(|t| t.hp % modulus == remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{BaseStats, Combatant};
    use crate::types::{Type, TypePair};

    fn base_100() -> Combatant {
        Combatant::new(
            BaseStats::new(100, 100, 100, 100, 100, 100),
            TypePair::single(Type::Normal),
        )
    }

    #[test]
    fn test_leftovers_number() {
        // Base 100 HP: the highest multiple of 16 reachable is 192
        let tuning = tune_hp(&base_100(), ItemId::Leftovers, 252).unwrap();
        assert_eq!(tuning.hp, 192);
        assert_eq!(tuning.ev, 132);
        assert_eq!(tuning.hp % 16, 0);
    }

    #[test]
    fn test_life_orb_number() {
        let tuning = tune_hp(&base_100(), ItemId::LifeOrb, 252).unwrap();
        assert_eq!(tuning.hp % 10, 9);
        assert_eq!(tuning.hp, 199);
        assert_eq!(tuning.ev, 188);
    }

    #[test]
    fn test_budget_cap() {
        let tuning = tune_hp(&base_100(), ItemId::SitrusBerry, 100).unwrap();
        assert!(tuning.ev <= 100);
        assert_eq!(tuning.hp % 4, 0);
    }

    #[test]
    fn test_no_preference_items() {
        assert_eq!(tune_hp(&base_100(), ItemId::ChoiceBand, 252), None);
        assert_eq!(preferred_remainder(ItemId::ExpertBelt), None);
    }
}
