//! vgc_engine - Bit-exact VGC damage and EV optimization engine
//!
//! This library reproduces the cartridge damage pipeline with exact
//! integer rounding, then builds inverse searches on top of it: the
//! cheapest EV spreads that survive a threat, secure a KO, or outrun a
//! benchmark.

/// Type definitions and the effectiveness chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Stat formulas and EV breakpoints
pub mod stats;

/// Ability identifiers and their damage-side effects
pub mod abilities;

/// Held item identifiers and their damage-side effects
pub mod items;

/// Move descriptors and mechanical flags
pub mod moves;

/// Battle conditions for a calculation
pub mod field;

/// Combatant builds and validated spreads
pub mod combatant;

/// The damage pipeline
pub mod damage;

/// Exact KO probability analysis
pub mod ko;

/// Inverse EV searches and bulk optimization
pub mod search;

/// Scenario sweeps with calc-style output
pub mod sweep;

// Re-export commonly used types
pub use abilities::AbilityId;
pub use combatant::{BaseStats, BuildError, Combatant, EvSpread, IvSpread, StatBlock};
pub use damage::{calculate_damage, DamageContext, DamageOutcome, Modifier};
pub use field::{FieldState, Screens, Terrain, Weather};
pub use items::ItemId;
pub use ko::{KoAnalysis, KoVerdict};
pub use moves::{HitCount, Move, MoveCategory, MoveFlags};
pub use natures::{BattleStat, NatureId};
pub use search::{
    minimum_bulk, minimum_offense, minimum_speed, KoGoal, SearchResult, SurvivalGoal, Threat,
};
pub use types::{Type, TypePair};
