//! Abilities that interact with the damage pipeline.
//!
//! The set is closed: only abilities with a modeled damage-side effect
//! are listed. Each variant's behavior is looked up through the small
//! predicate/table methods below; the pipeline never matches on
//! individual abilities outside this module.

use crate::natures::BattleStat;
use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityId {
    // STAB / type conversion
    Adaptability,
    Aerilate,
    Pixilate,
    Refrigerate,
    Galvanize,
    // Base-power boosts
    Technician,
    SheerForce,
    ToughClaws,
    IronFist,
    Sharpness,
    StrongJaw,
    MegaLauncher,
    PunkRock,
    Transistor,
    DragonsMaw,
    WaterBubble,
    // Stat-side modifiers
    Guts,
    HugePower,
    PurePower,
    GorillaTactics,
    Hustle,
    SwordOfRuin,
    BeadsOfRuin,
    TabletsOfRuin,
    VesselOfRuin,
    FurCoat,
    // Immunities and bypasses
    Levitate,
    FlashFire,
    VoltAbsorb,
    MotorDrive,
    LightningRod,
    WaterAbsorb,
    StormDrain,
    DrySkin,
    SapSipper,
    EarthEater,
    WellBakedBody,
    Scrappy,
    MindsEye,
    MoldBreaker,
    Teravolt,
    Turboblaze,
    Infiltrator,
    // Damage reduction / amplification on the defending side
    Multiscale,
    ShadowShield,
    SolidRock,
    Filter,
    PrismArmor,
    IceScales,
    ThickFat,
    Heatproof,
    Fluffy,
    PurifyingSalt,
    // Effectiveness-conditional attacker boosts
    TintedLens,
    Neuroforce,
}

static ABILITY_NAMES: phf::Map<&'static str, AbilityId> = phf::phf_map! {
    "adaptability" => AbilityId::Adaptability,
    "aerilate" => AbilityId::Aerilate,
    "pixilate" => AbilityId::Pixilate,
    "refrigerate" => AbilityId::Refrigerate,
    "galvanize" => AbilityId::Galvanize,
    "technician" => AbilityId::Technician,
    "sheer-force" => AbilityId::SheerForce,
    "tough-claws" => AbilityId::ToughClaws,
    "iron-fist" => AbilityId::IronFist,
    "sharpness" => AbilityId::Sharpness,
    "strong-jaw" => AbilityId::StrongJaw,
    "mega-launcher" => AbilityId::MegaLauncher,
    "punk-rock" => AbilityId::PunkRock,
    "transistor" => AbilityId::Transistor,
    "dragons-maw" => AbilityId::DragonsMaw,
    "water-bubble" => AbilityId::WaterBubble,
    "guts" => AbilityId::Guts,
    "huge-power" => AbilityId::HugePower,
    "pure-power" => AbilityId::PurePower,
    "gorilla-tactics" => AbilityId::GorillaTactics,
    "hustle" => AbilityId::Hustle,
    "sword-of-ruin" => AbilityId::SwordOfRuin,
    "beads-of-ruin" => AbilityId::BeadsOfRuin,
    "tablets-of-ruin" => AbilityId::TabletsOfRuin,
    "vessel-of-ruin" => AbilityId::VesselOfRuin,
    "fur-coat" => AbilityId::FurCoat,
    "levitate" => AbilityId::Levitate,
    "flash-fire" => AbilityId::FlashFire,
    "volt-absorb" => AbilityId::VoltAbsorb,
    "motor-drive" => AbilityId::MotorDrive,
    "lightning-rod" => AbilityId::LightningRod,
    "water-absorb" => AbilityId::WaterAbsorb,
    "storm-drain" => AbilityId::StormDrain,
    "dry-skin" => AbilityId::DrySkin,
    "sap-sipper" => AbilityId::SapSipper,
    "earth-eater" => AbilityId::EarthEater,
    "well-baked-body" => AbilityId::WellBakedBody,
    "scrappy" => AbilityId::Scrappy,
    "minds-eye" => AbilityId::MindsEye,
    "mold-breaker" => AbilityId::MoldBreaker,
    "teravolt" => AbilityId::Teravolt,
    "turboblaze" => AbilityId::Turboblaze,
    "infiltrator" => AbilityId::Infiltrator,
    "multiscale" => AbilityId::Multiscale,
    "shadow-shield" => AbilityId::ShadowShield,
    "solid-rock" => AbilityId::SolidRock,
    "filter" => AbilityId::Filter,
    "prism-armor" => AbilityId::PrismArmor,
    "ice-scales" => AbilityId::IceScales,
    "thick-fat" => AbilityId::ThickFat,
    "heatproof" => AbilityId::Heatproof,
    "fluffy" => AbilityId::Fluffy,
    "purifying-salt" => AbilityId::PurifyingSalt,
    "tinted-lens" => AbilityId::TintedLens,
    "neuroforce" => AbilityId::Neuroforce,
};

impl AbilityId {
    /// Parse from a hyphenated lowercase name ("sword-of-ruin").
    pub fn from_name(name: &str) -> Option<Self> {
        ABILITY_NAMES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Type this ability absorbs or is immune to.
    pub const fn immune_type(self) -> Option<Type> {
        match self {
            AbilityId::Levitate | AbilityId::EarthEater => Some(Type::Ground),
            AbilityId::FlashFire | AbilityId::WellBakedBody => Some(Type::Fire),
            AbilityId::VoltAbsorb | AbilityId::MotorDrive | AbilityId::LightningRod => {
                Some(Type::Electric)
            }
            AbilityId::WaterAbsorb | AbilityId::StormDrain | AbilityId::DrySkin => {
                Some(Type::Water)
            }
            AbilityId::SapSipper => Some(Type::Grass),
            _ => None,
        }
    }

    /// Target type for Normal-move conversion (the -ate abilities).
    pub const fn converts_normal_to(self) -> Option<Type> {
        match self {
            AbilityId::Aerilate => Some(Type::Flying),
            AbilityId::Pixilate => Some(Type::Fairy),
            AbilityId::Refrigerate => Some(Type::Ice),
            AbilityId::Galvanize => Some(Type::Electric),
            _ => None,
        }
    }

    /// Whether this ability ignores the defender's abilities.
    pub const fn ignores_defender_ability(self) -> bool {
        matches!(
            self,
            AbilityId::MoldBreaker | AbilityId::Teravolt | AbilityId::Turboblaze
        )
    }

    /// Whether Normal/Fighting moves from this attacker hit Ghost types.
    pub const fn bypasses_ghost_immunity(self) -> bool {
        matches!(self, AbilityId::Scrappy | AbilityId::MindsEye)
    }

    /// The ruin aura's target: the opposing stat it drops to 0.75x.
    pub const fn ruin_target(self) -> Option<BattleStat> {
        match self {
            AbilityId::SwordOfRuin => Some(BattleStat::Def),
            AbilityId::BeadsOfRuin => Some(BattleStat::SpD),
            AbilityId::TabletsOfRuin => Some(BattleStat::Atk),
            AbilityId::VesselOfRuin => Some(BattleStat::SpA),
            _ => None,
        }
    }

    /// Whether the ability halves damage at full HP.
    pub const fn halves_at_full_hp(self) -> bool {
        matches!(self, AbilityId::Multiscale | AbilityId::ShadowShield)
    }

    /// Whether the ability reduces super-effective damage to 0.75x.
    pub const fn reduces_super_effective(self) -> bool {
        matches!(
            self,
            AbilityId::SolidRock | AbilityId::Filter | AbilityId::PrismArmor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tables() {
        assert_eq!(AbilityId::Levitate.immune_type(), Some(Type::Ground));
        assert_eq!(AbilityId::StormDrain.immune_type(), Some(Type::Water));
        assert_eq!(AbilityId::Guts.immune_type(), None);

        assert_eq!(AbilityId::Galvanize.converts_normal_to(), Some(Type::Electric));
        assert_eq!(AbilityId::Adaptability.converts_normal_to(), None);

        assert!(AbilityId::MoldBreaker.ignores_defender_ability());
        assert!(!AbilityId::Scrappy.ignores_defender_ability());
        assert!(AbilityId::MindsEye.bypasses_ghost_immunity());

        assert_eq!(AbilityId::SwordOfRuin.ruin_target(), Some(BattleStat::Def));
        assert_eq!(AbilityId::VesselOfRuin.ruin_target(), Some(BattleStat::SpA));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AbilityId::from_name("sword-of-ruin"), Some(AbilityId::SwordOfRuin));
        assert_eq!(AbilityId::from_name("Huge-Power"), Some(AbilityId::HugePower));
        assert_eq!(AbilityId::from_name("pickup"), None);
    }
}
