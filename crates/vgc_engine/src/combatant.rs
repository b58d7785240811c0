//! Validated builds: base stats, spreads, and the combatant profile.
//!
//! Invalid spreads are unrepresentable past construction; everything
//! downstream of [`EvSpread::new`] / [`IvSpread::new`] is a total
//! function.

use crate::abilities::AbilityId;
use crate::items::ItemId;
use crate::natures::{BattleStat, NatureId};
use crate::stats::{
    calculate_hp, calculate_stat, wasted_evs, DEFAULT_LEVEL, MAX_EV_PER_STAT, MAX_EV_TOTAL, MAX_IV,
};
use crate::types::{Type, TypePair};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stat order used by all six-element arrays in this crate.
pub const STAT_NAMES: [&str; 6] = ["HP", "Atk", "Def", "SpA", "SpD", "Spe"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("{value} {stat} EVs exceed the per-stat cap of {MAX_EV_PER_STAT}")]
    EvPerStat { stat: &'static str, value: u16 },
    #[error("EV total {total} exceeds the cap of {MAX_EV_TOTAL}")]
    EvTotal { total: u16 },
    #[error("{value} {stat} IVs exceed the cap of {MAX_IV}")]
    IvRange { stat: &'static str, value: u8 },
    #[error("level {0} outside 1..=100")]
    Level(u8),
}

/// Species base stats, order HP/Atk/Def/SpA/SpD/Spe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub const fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    pub const fn get(&self, stat: BattleStat) -> u16 {
        match stat {
            BattleStat::Atk => self.atk,
            BattleStat::Def => self.def,
            BattleStat::SpA => self.spa,
            BattleStat::SpD => self.spd,
            BattleStat::Spe => self.spe,
        }
    }
}

/// Effort values, order HP/Atk/Def/SpA/SpD/Spe.
///
/// Construction enforces the 252 per-stat and 508 total caps. Values
/// that are not multiples of 4 are legal but wasteful; see
/// [`EvSpread::wasted`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvSpread([u16; 6]);

impl EvSpread {
    pub fn new(values: [u16; 6]) -> Result<Self, BuildError> {
        for (i, &value) in values.iter().enumerate() {
            if value > MAX_EV_PER_STAT {
                return Err(BuildError::EvPerStat {
                    stat: STAT_NAMES[i],
                    value,
                });
            }
        }
        let total: u16 = values.iter().sum();
        if total > MAX_EV_TOTAL {
            return Err(BuildError::EvTotal { total });
        }
        Ok(Self(values))
    }

    /// Common shorthand: HP / offensive stat / defensive stat all on
    /// separate axes, everything else zero.
    pub fn hp_and(hp: u16, stat: BattleStat, value: u16) -> Result<Self, BuildError> {
        let mut values = [0u16; 6];
        values[0] = hp;
        values[1 + stat as usize] = value;
        Self::new(values)
    }

    pub const fn hp(&self) -> u16 {
        self.0[0]
    }

    pub const fn get(&self, stat: BattleStat) -> u16 {
        self.0[1 + stat as usize]
    }

    pub const fn values(&self) -> [u16; 6] {
        self.0
    }

    pub fn total(&self) -> u16 {
        self.0.iter().sum()
    }

    pub fn remaining(&self) -> u16 {
        MAX_EV_TOTAL - self.total()
    }

    /// EVs contributing nothing to any stat.
    pub fn wasted(&self) -> u16 {
        self.0.iter().map(|&ev| wasted_evs(ev)).sum()
    }

    /// Copy with one battle stat replaced (panics are avoided by
    /// revalidating).
    pub fn with_stat(&self, stat: BattleStat, value: u16) -> Result<Self, BuildError> {
        let mut values = self.0;
        values[1 + stat as usize] = value;
        Self::new(values)
    }

    pub fn with_hp(&self, value: u16) -> Result<Self, BuildError> {
        let mut values = self.0;
        values[0] = value;
        Self::new(values)
    }
}

/// Individual values, order HP/Atk/Def/SpA/SpD/Spe. Defaults to 31s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvSpread([u8; 6]);

impl Default for IvSpread {
    fn default() -> Self {
        Self([MAX_IV; 6])
    }
}

impl IvSpread {
    pub fn new(values: [u8; 6]) -> Result<Self, BuildError> {
        for (i, &value) in values.iter().enumerate() {
            if value > MAX_IV {
                return Err(BuildError::IvRange {
                    stat: STAT_NAMES[i],
                    value,
                });
            }
        }
        Ok(Self(values))
    }

    pub const fn hp(&self) -> u8 {
        self.0[0]
    }

    pub const fn get(&self, stat: BattleStat) -> u8 {
        self.0[1 + stat as usize]
    }
}

/// Fully computed stats at the combatant's level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatBlock {
    pub const fn get(&self, stat: BattleStat) -> u16 {
        match stat {
            BattleStat::Atk => self.atk,
            BattleStat::Def => self.def,
            BattleStat::SpA => self.spa,
            BattleStat::SpD => self.spd,
            BattleStat::Spe => self.spe,
        }
    }
}

/// One side of a damage calculation: species numbers plus the build
/// choices that matter for math.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub base: BaseStats,
    pub types: TypePair,
    pub evs: EvSpread,
    pub ivs: IvSpread,
    pub nature: NatureId,
    pub level: u8,
    pub tera_type: Option<Type>,
    pub ability: Option<AbilityId>,
    pub item: Option<ItemId>,
}

impl Combatant {
    pub fn new(base: BaseStats, types: TypePair) -> Self {
        Self {
            base,
            types,
            evs: EvSpread::default(),
            ivs: IvSpread::default(),
            nature: NatureId::default(),
            level: DEFAULT_LEVEL,
            tera_type: None,
            ability: None,
            item: None,
        }
    }

    pub fn evs(mut self, evs: EvSpread) -> Self {
        self.evs = evs;
        self
    }

    pub fn ivs(mut self, ivs: IvSpread) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn nature(mut self, nature: NatureId) -> Self {
        self.nature = nature;
        self
    }

    /// Set the level. Rejects values outside 1..=100.
    pub fn level(mut self, level: u8) -> Result<Self, BuildError> {
        if level == 0 || level > 100 {
            return Err(BuildError::Level(level));
        }
        self.level = level;
        Ok(self)
    }

    pub fn ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    pub fn tera(mut self, tera_type: Type) -> Self {
        self.tera_type = Some(tera_type);
        self
    }

    /// Compute all six stats.
    pub fn stats(&self) -> StatBlock {
        StatBlock {
            hp: calculate_hp(self.base.hp, self.ivs.hp(), self.evs.hp(), self.level),
            atk: self.stat(BattleStat::Atk),
            def: self.stat(BattleStat::Def),
            spa: self.stat(BattleStat::SpA),
            spd: self.stat(BattleStat::SpD),
            spe: self.stat(BattleStat::Spe),
        }
    }

    /// Compute one non-HP stat.
    pub fn stat(&self, stat: BattleStat) -> u16 {
        calculate_stat(
            self.base.get(stat),
            self.ivs.get(stat),
            self.evs.get(stat),
            self.level,
            self.nature.stat_modifier(stat),
        )
    }

    pub fn max_hp(&self) -> u16 {
        calculate_hp(self.base.hp, self.ivs.hp(), self.evs.hp(), self.level)
    }

    /// The defender's effective typing: Tera replaces both types.
    pub fn effective_types(&self, tera_active: bool) -> TypePair {
        match (tera_active, self.tera_type) {
            (true, Some(t)) => TypePair::single(t),
            _ => self.types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ev_validation() {
        assert!(EvSpread::new([252, 252, 4, 0, 0, 0]).is_ok());
        assert_eq!(
            EvSpread::new([253, 0, 0, 0, 0, 0]),
            Err(BuildError::EvPerStat {
                stat: "HP",
                value: 253
            })
        );
        assert_eq!(
            EvSpread::new([252, 252, 8, 0, 0, 0]),
            Err(BuildError::EvTotal { total: 512 })
        );
    }

    #[test]
    fn test_ev_waste_reporting() {
        let spread = EvSpread::new([6, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(spread.wasted(), 2);
        assert_eq!(spread.total(), 6);
        assert_eq!(spread.remaining(), 502);
    }

    #[test]
    fn test_iv_validation() {
        assert!(IvSpread::new([31; 6]).is_ok());
        assert_eq!(
            IvSpread::new([31, 32, 31, 31, 31, 31]),
            Err(BuildError::IvRange {
                stat: "Atk",
                value: 32
            })
        );
    }

    #[test]
    fn test_stat_block() {
        // Classic fast attacker: base 135 Spe, Timid, 252 Spe EVs
        let evs = EvSpread::hp_and(0, BattleStat::Spe, 252).unwrap();
        let build = Combatant::new(
            BaseStats::new(78, 84, 78, 109, 85, 135),
            TypePair::dual(Type::Fire, Type::Flying),
        )
        .nature(NatureId::Timid)
        .evs(evs);

        let stats = build.stats();
        assert_eq!(stats.spe, 205);
        // 0 HP EVs, base 78: (187 * 50 / 100) + 60 = 153
        assert_eq!(stats.hp, 153);
        // Timid drops Atk
        assert_eq!(stats.atk, build.stat(BattleStat::Atk));
        assert_eq!(
            stats.atk,
            crate::stats::calculate_stat(84, 31, 0, 50, 9)
        );
    }

    #[test]
    fn test_level_validation() {
        let build = Combatant::new(
            BaseStats::new(100, 100, 100, 100, 100, 100),
            TypePair::single(Type::Normal),
        );
        assert_eq!(build.level(100).unwrap().level, 100);
        assert_eq!(build.level(0), Err(BuildError::Level(0)));
        assert_eq!(build.level(101), Err(BuildError::Level(101)));
    }

    #[test]
    fn test_effective_types_with_tera() {
        let build = Combatant::new(
            BaseStats::new(100, 100, 100, 100, 100, 100),
            TypePair::dual(Type::Water, Type::Flying),
        )
        .tera(Type::Grass);

        assert_eq!(build.effective_types(false), TypePair::dual(Type::Water, Type::Flying));
        assert_eq!(build.effective_types(true), TypePair::single(Type::Grass));
    }
}
