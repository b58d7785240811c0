//! Held items that interact with the damage pipeline or HP tuning.

use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    // Offensive
    LifeOrb,
    ExpertBelt,
    ChoiceBand,
    ChoiceSpecs,
    ChoiceScarf,
    MuscleBand,
    WiseGlasses,
    PunchingGlove,
    // Defensive
    AssaultVest,
    AirBalloon,
    // Residual-recovery items (HP tuning)
    Leftovers,
    SitrusBerry,
    // Type-boosting items (1.2x to matching base power)
    SilkScarf,
    Charcoal,
    MysticWater,
    Magnet,
    MiracleSeed,
    NeverMeltIce,
    BlackBelt,
    PoisonBarb,
    SoftSand,
    SharpBeak,
    TwistedSpoon,
    SilverPowder,
    HardStone,
    SpellTag,
    DragonFang,
    BlackGlasses,
    MetalCoat,
    FairyFeather,
    // Super-effective-halving berries (Chilan works on any Normal hit)
    ChilanBerry,
    OccaBerry,
    PasshoBerry,
    WacanBerry,
    RindoBerry,
    YacheBerry,
    ChopleBerry,
    KebiaBerry,
    ShucaBerry,
    CobaBerry,
    PayapaBerry,
    TangaBerry,
    ChartiBerry,
    KasibBerry,
    HabanBerry,
    ColburBerry,
    BabiriBerry,
    RoseliBerry,
}

static ITEM_NAMES: phf::Map<&'static str, ItemId> = phf::phf_map! {
    "life-orb" => ItemId::LifeOrb,
    "expert-belt" => ItemId::ExpertBelt,
    "choice-band" => ItemId::ChoiceBand,
    "choice-specs" => ItemId::ChoiceSpecs,
    "choice-scarf" => ItemId::ChoiceScarf,
    "muscle-band" => ItemId::MuscleBand,
    "wise-glasses" => ItemId::WiseGlasses,
    "punching-glove" => ItemId::PunchingGlove,
    "assault-vest" => ItemId::AssaultVest,
    "air-balloon" => ItemId::AirBalloon,
    "leftovers" => ItemId::Leftovers,
    "sitrus-berry" => ItemId::SitrusBerry,
    "silk-scarf" => ItemId::SilkScarf,
    "charcoal" => ItemId::Charcoal,
    "mystic-water" => ItemId::MysticWater,
    "magnet" => ItemId::Magnet,
    "miracle-seed" => ItemId::MiracleSeed,
    "never-melt-ice" => ItemId::NeverMeltIce,
    "black-belt" => ItemId::BlackBelt,
    "poison-barb" => ItemId::PoisonBarb,
    "soft-sand" => ItemId::SoftSand,
    "sharp-beak" => ItemId::SharpBeak,
    "twisted-spoon" => ItemId::TwistedSpoon,
    "silver-powder" => ItemId::SilverPowder,
    "hard-stone" => ItemId::HardStone,
    "spell-tag" => ItemId::SpellTag,
    "dragon-fang" => ItemId::DragonFang,
    "black-glasses" => ItemId::BlackGlasses,
    "metal-coat" => ItemId::MetalCoat,
    "fairy-feather" => ItemId::FairyFeather,
    "chilan-berry" => ItemId::ChilanBerry,
    "occa-berry" => ItemId::OccaBerry,
    "passho-berry" => ItemId::PasshoBerry,
    "wacan-berry" => ItemId::WacanBerry,
    "rindo-berry" => ItemId::RindoBerry,
    "yache-berry" => ItemId::YacheBerry,
    "chople-berry" => ItemId::ChopleBerry,
    "kebia-berry" => ItemId::KebiaBerry,
    "shuca-berry" => ItemId::ShucaBerry,
    "coba-berry" => ItemId::CobaBerry,
    "payapa-berry" => ItemId::PayapaBerry,
    "tanga-berry" => ItemId::TangaBerry,
    "charti-berry" => ItemId::ChartiBerry,
    "kasib-berry" => ItemId::KasibBerry,
    "haban-berry" => ItemId::HabanBerry,
    "colbur-berry" => ItemId::ColburBerry,
    "babiri-berry" => ItemId::BabiriBerry,
    "roseli-berry" => ItemId::RoseliBerry,
};

impl ItemId {
    /// Parse from a hyphenated lowercase name ("life-orb").
    pub fn from_name(name: &str) -> Option<Self> {
        ITEM_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Display name ("Life Orb").
    pub fn name(self) -> &'static str {
        match self {
            ItemId::LifeOrb => "Life Orb",
            ItemId::ExpertBelt => "Expert Belt",
            ItemId::ChoiceBand => "Choice Band",
            ItemId::ChoiceSpecs => "Choice Specs",
            ItemId::ChoiceScarf => "Choice Scarf",
            ItemId::MuscleBand => "Muscle Band",
            ItemId::WiseGlasses => "Wise Glasses",
            ItemId::PunchingGlove => "Punching Glove",
            ItemId::AssaultVest => "Assault Vest",
            ItemId::AirBalloon => "Air Balloon",
            ItemId::Leftovers => "Leftovers",
            ItemId::SitrusBerry => "Sitrus Berry",
            ItemId::SilkScarf => "Silk Scarf",
            ItemId::Charcoal => "Charcoal",
            ItemId::MysticWater => "Mystic Water",
            ItemId::Magnet => "Magnet",
            ItemId::MiracleSeed => "Miracle Seed",
            ItemId::NeverMeltIce => "Never-Melt Ice",
            ItemId::BlackBelt => "Black Belt",
            ItemId::PoisonBarb => "Poison Barb",
            ItemId::SoftSand => "Soft Sand",
            ItemId::SharpBeak => "Sharp Beak",
            ItemId::TwistedSpoon => "Twisted Spoon",
            ItemId::SilverPowder => "Silver Powder",
            ItemId::HardStone => "Hard Stone",
            ItemId::SpellTag => "Spell Tag",
            ItemId::DragonFang => "Dragon Fang",
            ItemId::BlackGlasses => "Black Glasses",
            ItemId::MetalCoat => "Metal Coat",
            ItemId::FairyFeather => "Fairy Feather",
            ItemId::ChilanBerry => "Chilan Berry",
            ItemId::OccaBerry => "Occa Berry",
            ItemId::PasshoBerry => "Passho Berry",
            ItemId::WacanBerry => "Wacan Berry",
            ItemId::RindoBerry => "Rindo Berry",
            ItemId::YacheBerry => "Yache Berry",
            ItemId::ChopleBerry => "Chople Berry",
            ItemId::KebiaBerry => "Kebia Berry",
            ItemId::ShucaBerry => "Shuca Berry",
            ItemId::CobaBerry => "Coba Berry",
            ItemId::PayapaBerry => "Payapa Berry",
            ItemId::TangaBerry => "Tanga Berry",
            ItemId::ChartiBerry => "Charti Berry",
            ItemId::KasibBerry => "Kasib Berry",
            ItemId::HabanBerry => "Haban Berry",
            ItemId::ColburBerry => "Colbur Berry",
            ItemId::BabiriBerry => "Babiri Berry",
            ItemId::RoseliBerry => "Roseli Berry",
        }
    }

    /// The move type this item boosts by 1.2x (base-power side).
    pub const fn boosted_type(self) -> Option<Type> {
        match self {
            ItemId::SilkScarf => Some(Type::Normal),
            ItemId::Charcoal => Some(Type::Fire),
            ItemId::MysticWater => Some(Type::Water),
            ItemId::Magnet => Some(Type::Electric),
            ItemId::MiracleSeed => Some(Type::Grass),
            ItemId::NeverMeltIce => Some(Type::Ice),
            ItemId::BlackBelt => Some(Type::Fighting),
            ItemId::PoisonBarb => Some(Type::Poison),
            ItemId::SoftSand => Some(Type::Ground),
            ItemId::SharpBeak => Some(Type::Flying),
            ItemId::TwistedSpoon => Some(Type::Psychic),
            ItemId::SilverPowder => Some(Type::Bug),
            ItemId::HardStone => Some(Type::Rock),
            ItemId::SpellTag => Some(Type::Ghost),
            ItemId::DragonFang => Some(Type::Dragon),
            ItemId::BlackGlasses => Some(Type::Dark),
            ItemId::MetalCoat => Some(Type::Steel),
            ItemId::FairyFeather => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Berry halving: `(type, requires_super_effective)`.
    /// Chilan halves any Normal hit; the others only super-effective ones.
    pub const fn resist_berry(self) -> Option<(Type, bool)> {
        match self {
            ItemId::ChilanBerry => Some((Type::Normal, false)),
            ItemId::OccaBerry => Some((Type::Fire, true)),
            ItemId::PasshoBerry => Some((Type::Water, true)),
            ItemId::WacanBerry => Some((Type::Electric, true)),
            ItemId::RindoBerry => Some((Type::Grass, true)),
            ItemId::YacheBerry => Some((Type::Ice, true)),
            ItemId::ChopleBerry => Some((Type::Fighting, true)),
            ItemId::KebiaBerry => Some((Type::Poison, true)),
            ItemId::ShucaBerry => Some((Type::Ground, true)),
            ItemId::CobaBerry => Some((Type::Flying, true)),
            ItemId::PayapaBerry => Some((Type::Psychic, true)),
            ItemId::TangaBerry => Some((Type::Bug, true)),
            ItemId::ChartiBerry => Some((Type::Rock, true)),
            ItemId::KasibBerry => Some((Type::Ghost, true)),
            ItemId::HabanBerry => Some((Type::Dragon, true)),
            ItemId::ColburBerry => Some((Type::Dark, true)),
            ItemId::BabiriBerry => Some((Type::Steel, true)),
            ItemId::RoseliBerry => Some((Type::Fairy, true)),
            _ => None,
        }
    }

    pub const fn is_choice_physical(self) -> bool {
        matches!(self, ItemId::ChoiceBand)
    }

    pub const fn is_choice_special(self) -> bool {
        matches!(self, ItemId::ChoiceSpecs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_boost_lookup() {
        assert_eq!(ItemId::Charcoal.boosted_type(), Some(Type::Fire));
        assert_eq!(ItemId::FairyFeather.boosted_type(), Some(Type::Fairy));
        assert_eq!(ItemId::LifeOrb.boosted_type(), None);
    }

    #[test]
    fn test_resist_berries() {
        assert_eq!(ItemId::YacheBerry.resist_berry(), Some((Type::Ice, true)));
        assert_eq!(ItemId::ChilanBerry.resist_berry(), Some((Type::Normal, false)));
        assert_eq!(ItemId::Leftovers.resist_berry(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ItemId::from_name("life-orb"), Some(ItemId::LifeOrb));
        assert_eq!(ItemId::from_name("Assault-Vest"), Some(ItemId::AssaultVest));
        assert_eq!(ItemId::from_name("rocky-helmet"), None);
    }
}
