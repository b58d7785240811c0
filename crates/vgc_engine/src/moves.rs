//! Move descriptors.
//!
//! Moves carry only the numbers and flags the damage pipeline needs;
//! there is no move dex. Callers describe the move they want calculated.

use crate::types::Type;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Mechanical move classifications that abilities and items key on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct MoveFlags: u16 {
        const CONTACT = 1 << 0;
        const PUNCH   = 1 << 1;
        const SOUND   = 1 << 2;
        const SLICING = 1 << 3;
        const BITING  = 1 << 4;
        const PULSE   = 1 << 5;
        const BULLET  = 1 << 6;
        const WIND    = 1 << 7;
        /// Hits multiple targets in doubles.
        const SPREAD  = 1 << 8;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Hit count of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitCount {
    #[default]
    Single,
    Fixed(u8),
    Variable {
        min: u8,
        max: u8,
    },
}

impl HitCount {
    /// Hits assumed when calculating: variable multi-hit moves plan for
    /// the maximum (worst case for the defender).
    pub const fn planned(self) -> u8 {
        match self {
            HitCount::Single => 1,
            HitCount::Fixed(n) => n,
            HitCount::Variable { max, .. } => max,
        }
    }

    pub const fn is_multi(self) -> bool {
        self.planned() > 1
    }
}

/// A damaging (or status) move described by its numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub typ: Type,
    pub category: MoveCategory,
    pub power: u16,
    pub accuracy: Option<u8>,
    pub priority: i8,
    /// Secondary effect chance in percent; Sheer Force keys on this.
    pub effect_chance: Option<u8>,
    pub hits: HitCount,
    pub always_crit: bool,
    pub flags: MoveFlags,
}

impl Move {
    pub const fn physical(typ: Type, power: u16) -> Self {
        Self {
            typ,
            category: MoveCategory::Physical,
            power,
            accuracy: Some(100),
            priority: 0,
            effect_chance: None,
            hits: HitCount::Single,
            always_crit: false,
            flags: MoveFlags::empty(),
        }
    }

    pub const fn special(typ: Type, power: u16) -> Self {
        Self {
            typ,
            category: MoveCategory::Special,
            power,
            accuracy: Some(100),
            priority: 0,
            effect_chance: None,
            hits: HitCount::Single,
            always_crit: false,
            flags: MoveFlags::empty(),
        }
    }

    pub const fn status(typ: Type) -> Self {
        Self {
            typ,
            category: MoveCategory::Status,
            power: 0,
            accuracy: Some(100),
            priority: 0,
            effect_chance: None,
            hits: HitCount::Single,
            always_crit: false,
            flags: MoveFlags::empty(),
        }
    }

    pub const fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub const fn with_effect_chance(mut self, chance: u8) -> Self {
        self.effect_chance = Some(chance);
        self
    }

    pub const fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub const fn multi_hit(mut self, min: u8, max: u8) -> Self {
        self.hits = HitCount::Variable { min, max };
        self
    }

    pub const fn fixed_hits(mut self, n: u8) -> Self {
        self.hits = HitCount::Fixed(n);
        self
    }

    pub const fn crit_locked(mut self) -> Self {
        self.always_crit = true;
        self
    }

    /// Whether the move can deal direct damage at all.
    pub fn is_damaging(&self) -> bool {
        !matches!(self.category, MoveCategory::Status) && self.power > 0
    }

    pub fn is_physical(&self) -> bool {
        matches!(self.category, MoveCategory::Physical)
    }

    pub fn is_spread(&self) -> bool {
        self.flags.contains(MoveFlags::SPREAD)
    }
}
