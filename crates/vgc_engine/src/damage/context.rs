//! Resolved calculation context.
//!
//! Everything the pipeline phases need, computed once up front: the
//! authoritative move type (after -ate conversion), the effectiveness,
//! the STAB modifier, the crit flag, and the hit count. Phases read
//! from this instead of re-deriving facts from the raw inputs.

use crate::abilities::AbilityId;
use crate::combatant::{Combatant, StatBlock};
use crate::damage::effectiveness::resolve_effectiveness;
use crate::damage::modifier::Modifier;
use crate::field::FieldState;
use crate::moves::Move;
use crate::types::Type;

#[derive(Debug)]
pub struct DamageContext<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub mv: &'a Move,
    pub field: &'a FieldState,
    /// Move type after -ate conversion; all later phases use this.
    pub move_type: Type,
    /// A Normal move was converted by an -ate ability (adds 1.2x power).
    pub ate_converted: bool,
    /// Attacker ignores the defender's ability (Mold Breaker line).
    pub ignores_defender_ability: bool,
    /// 4-scale effectiveness against the defender's live typing.
    pub effectiveness: u8,
    /// STAB modifier (4096 when the move type matches nothing).
    pub stab: Modifier,
    pub critical: bool,
    /// Hits this calculation plans for (variable multi-hit at max).
    pub hits: u8,
    pub attacker_stats: StatBlock,
    pub defender_stats: StatBlock,
}

impl<'a> DamageContext<'a> {
    pub fn build(
        attacker: &'a Combatant,
        defender: &'a Combatant,
        mv: &'a Move,
        field: &'a FieldState,
    ) -> Self {
        let (move_type, ate_converted) = resolve_move_type(mv.typ, attacker.ability);

        let ignores_defender_ability = attacker
            .ability
            .is_some_and(|a| a.ignores_defender_ability());

        let effectiveness = resolve_effectiveness(
            move_type,
            attacker.ability,
            defender,
            field.defender_tera,
        );

        let stab = stab_modifier(attacker, move_type, field.attacker_tera);

        let critical = field.critical || mv.always_crit;

        let hits = field.hit_override.unwrap_or_else(|| mv.hits.planned());

        Self {
            attacker,
            defender,
            mv,
            field,
            move_type,
            ate_converted,
            ignores_defender_ability,
            effectiveness,
            stab,
            critical,
            hits,
            attacker_stats: attacker.stats(),
            defender_stats: defender.stats(),
        }
    }

    /// The defender ability, masked out when the attacker ignores it.
    pub fn visible_defender_ability(&self) -> Option<AbilityId> {
        if self.ignores_defender_ability {
            None
        } else {
            self.defender.ability
        }
    }
}

/// The -ate abilities rewrite Normal moves before anything else looks at
/// the type.
fn resolve_move_type(typ: Type, attacker_ability: Option<AbilityId>) -> (Type, bool) {
    if typ == Type::Normal {
        if let Some(converted) = attacker_ability.and_then(|a| a.converts_normal_to()) {
            return (converted, true);
        }
    }
    (typ, false)
}

/// STAB ladder: 1.5x for a type match, 2x for Adaptability or for Tera
/// into one of the original types, 2.25x for both at once.
fn stab_modifier(attacker: &Combatant, move_type: Type, tera_active: bool) -> Modifier {
    let adaptability = attacker.ability == Some(AbilityId::Adaptability);
    let tera_match = tera_active && attacker.tera_type == Some(move_type);
    let original_match = attacker.types.contains(move_type);

    match (tera_match, original_match) {
        (true, true) if adaptability => Modifier::STAB_TERA_ADAPT,
        (true, true) => Modifier::STAB_BOOSTED,
        (true, false) | (false, true) if adaptability => Modifier::STAB_BOOSTED,
        (true, false) | (false, true) => Modifier::STAB,
        (false, false) => Modifier::ONE,
    }
}
