//! Battle conditions for a single calculation.
//!
//! A flat, copyable description of everything outside the two builds
//! that affects damage. Defaults describe a plain doubles turn: no
//! weather, no screens, both sides grounded, defender at full HP.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Snow,
    HarshSun,
    HeavyRain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Electric,
    Grassy,
    Psychic,
    Misty,
}

bitflags! {
    /// Active screens on the defender's side.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Screens: u8 {
        const REFLECT      = 1 << 0;
        const LIGHT_SCREEN = 1 << 1;
        const AURORA_VEIL  = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    pub doubles: bool,
    /// Spread move actually hitting more than one target this turn.
    pub multiple_targets: bool,
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub attacker_grounded: bool,
    pub defender_grounded: bool,
    pub critical: bool,
    pub attacker_burned: bool,
    /// Any major status on the attacker (Guts trigger).
    pub attacker_statused: bool,
    pub defender_at_full_hp: bool,
    pub attack_stage: i8,
    pub defense_stage: i8,
    pub special_attack_stage: i8,
    pub special_defense_stage: i8,
    pub screens: Screens,
    pub helping_hand: bool,
    pub friend_guard: bool,
    /// Attacker has Terastallized (Tera type lives on the build).
    pub attacker_tera: bool,
    pub defender_tera: bool,
    /// Override the hit count of a variable multi-hit move.
    pub hit_override: Option<u8>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            doubles: true,
            multiple_targets: false,
            weather: None,
            terrain: None,
            attacker_grounded: true,
            defender_grounded: true,
            critical: false,
            attacker_burned: false,
            attacker_statused: false,
            defender_at_full_hp: true,
            attack_stage: 0,
            defense_stage: 0,
            special_attack_stage: 0,
            special_defense_stage: 0,
            screens: Screens::empty(),
            helping_hand: false,
            friend_guard: false,
            attacker_tera: false,
            defender_tera: false,
            hit_override: None,
        }
    }
}

impl FieldState {
    /// Singles format, otherwise default conditions.
    pub fn singles() -> Self {
        Self {
            doubles: false,
            ..Self::default()
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_plain_doubles() {
        let field = FieldState::default();
        assert!(field.doubles);
        assert!(field.defender_at_full_hp);
        assert!(field.attacker_grounded);
        assert_eq!(field.screens, Screens::empty());
        assert_eq!(field.attack_stage, 0);
    }

    #[test]
    fn test_builders() {
        let field = FieldState::singles().with_weather(Weather::Rain);
        assert!(!field.doubles);
        assert_eq!(field.weather, Some(Weather::Rain));
    }
}
