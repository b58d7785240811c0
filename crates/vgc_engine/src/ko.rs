//! Exact KO probability analysis.
//!
//! Every damage roll is equally likely, so KO chances over a few turns
//! are exact rational numbers: the counting convolves the per-hit roll
//! distribution turn by turn, capping accumulated damage at the
//! target's HP so KOed states stay merged.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::ROLL_COUNT;

/// Horizon for KO counting. Anything slower is reported as chip damage.
pub const MAX_KO_TURNS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KoVerdict {
    /// All roll combinations KO within this many turns.
    Guaranteed(u8),
    /// Earliest turn with a nonzero KO chance, with the exact chance
    /// rounded to tenths of a percent.
    Chance { turns: u8, percent_tenths: u16 },
    /// No roll combination KOs within the horizon.
    CannotKo,
}

impl fmt::Display for KoVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hko = |turns: u8| -> String {
            if turns == 1 {
                "OHKO".to_string()
            } else {
                format!("{turns}HKO")
            }
        };
        match self {
            KoVerdict::Guaranteed(turns) => write!(f, "guaranteed {}", hko(*turns)),
            KoVerdict::Chance {
                turns,
                percent_tenths,
            } => write!(
                f,
                "{}.{}% chance to {}",
                percent_tenths / 10,
                percent_tenths % 10,
                hko(*turns)
            ),
            KoVerdict::CannotKo => write!(f, "not a KO within {MAX_KO_TURNS} turns"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KoAnalysis {
    pub hp: u16,
    /// Damage over one full turn with every hit at the lowest roll.
    pub min_per_turn: u32,
    /// Damage over one full turn with every hit at the highest roll.
    pub max_per_turn: u32,
    /// `chances[n - 1]` is the exact chance of a KO within `n` turns.
    pub chances: [f64; MAX_KO_TURNS],
    pub verdict: KoVerdict,
}

impl KoAnalysis {
    /// Chance of a KO within `turns` turns.
    pub fn chance_within(&self, turns: u8) -> f64 {
        let turns = (turns as usize).clamp(1, MAX_KO_TURNS);
        self.chances[turns - 1]
    }

    /// Remaining HP in tenths of a percent after `turns` turns of
    /// minimum rolls. Zero means the KO is guaranteed by then.
    pub fn chip_percent_tenths(&self, turns: u8) -> u16 {
        let dealt = self.min_per_turn.saturating_mul(turns as u32);
        let hp = self.hp as u32;
        if dealt >= hp {
            0
        } else {
            ((hp - dealt) * 1000 / hp) as u16
        }
    }
}

/// Analyze KO chances for a move dealing `hits` hits per turn, each
/// with the 16 equally likely `rolls`.
pub fn analyze(rolls: &[u16; ROLL_COUNT], hits: u8, hp: u16) -> KoAnalysis {
    let hp_cap = hp.max(1) as u32;
    let min_per_turn = rolls[0] as u32 * hits as u32;
    let max_per_turn = rolls[ROLL_COUNT - 1] as u32 * hits as u32;

    // Damage distribution, capped at hp_cap. Counts are exact; the
    // denominator grows by 16 per hit.
    let mut dist: HashMap<u32, u128> = HashMap::from([(0u32, 1u128)]);
    let mut denominator: u128 = 1;
    let mut chances = [0f64; MAX_KO_TURNS];

    for chance in chances.iter_mut() {
        for _ in 0..hits {
            let mut next: HashMap<u32, u128> = HashMap::with_capacity(dist.len() * 2);
            for (&dealt, &count) in &dist {
                if dealt >= hp_cap {
                    *next.entry(hp_cap).or_default() += count * ROLL_COUNT as u128;
                    continue;
                }
                for &roll in rolls {
                    let sum = (dealt + roll as u32).min(hp_cap);
                    *next.entry(sum).or_default() += count;
                }
            }
            dist = next;
            denominator *= ROLL_COUNT as u128;
        }
        let ko_count = dist.get(&hp_cap).copied().unwrap_or(0);
        *chance = ko_count as f64 / denominator as f64;
    }

    let guaranteed_at = (1..=MAX_KO_TURNS as u32)
        .find(|&n| min_per_turn > 0 && min_per_turn * n >= hp_cap)
        .map(|n| n as u8);
    let first_chance_at = (1..=MAX_KO_TURNS)
        .find(|&n| chances[n - 1] > 0.0)
        .map(|n| n as u8);

    // A chance of 99.9% or better reads as guaranteed; anything below
    // reports the exact percentage so a 15/16 roll never overstates.
    let verdict = match (first_chance_at, guaranteed_at) {
        (Some(c), Some(g)) if c == g => KoVerdict::Guaranteed(g),
        (Some(c), _) if chances[c as usize - 1] >= 0.999 => KoVerdict::Guaranteed(c),
        (Some(c), _) => KoVerdict::Chance {
            turns: c,
            percent_tenths: (chances[c as usize - 1] * 1000.0).round() as u16,
        },
        (None, _) => KoVerdict::CannotKo,
    };

    KoAnalysis {
        hp,
        min_per_turn,
        max_per_turn,
        chances,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guaranteed_two_turn_ko() {
        let rolls = [50u16; ROLL_COUNT];
        let analysis = analyze(&rolls, 1, 100);
        assert_eq!(analysis.verdict, KoVerdict::Guaranteed(2));
        assert_eq!(analysis.chances[0], 0.0);
        assert_eq!(analysis.chances[1], 1.0);
        assert_eq!(analysis.chip_percent_tenths(1), 500);
        assert_eq!(analysis.chip_percent_tenths(2), 0);
    }

    #[test]
    fn test_partial_chance_counting() {
        // Half the rolls deal 49, half deal 50, against 99 HP: a KO in
        // two turns needs at least one 50-50 or 49-50 pair.
        let mut rolls = [49u16; ROLL_COUNT];
        for roll in rolls.iter_mut().skip(8) {
            *roll = 50;
        }
        let analysis = analyze(&rolls, 1, 99);
        assert_eq!(analysis.chances[0], 0.0);
        // 3 of 4 equally likely pair classes reach 99: 192/256
        assert_eq!(analysis.chances[1], 0.75);
        assert_eq!(
            analysis.verdict,
            KoVerdict::Chance {
                turns: 2,
                percent_tenths: 750
            }
        );
    }

    #[test]
    fn test_near_certain_reads_as_guaranteed() {
        // One roll in 16 falls short per turn; over three turns the
        // miss chance is (1/16)^3, far past the 99.9% cutoff.
        let mut rolls = [34u16; ROLL_COUNT];
        rolls[0] = 33;
        let analysis = analyze(&rolls, 1, 100);
        assert_eq!(analysis.chances[1], 0.0);
        assert!(analysis.chances[2] >= 0.999 && analysis.chances[2] < 1.0);
        assert_eq!(analysis.verdict, KoVerdict::Guaranteed(3));
    }

    #[test]
    fn test_fifteen_of_sixteen_is_not_guaranteed() {
        let mut rolls = [100u16; ROLL_COUNT];
        rolls[0] = 99;
        let analysis = analyze(&rolls, 1, 100);
        assert_eq!(
            analysis.verdict,
            KoVerdict::Chance {
                turns: 1,
                percent_tenths: 938
            }
        );
    }

    #[test]
    fn test_multi_hit_convolution() {
        let rolls = [30u16; ROLL_COUNT];
        let analysis = analyze(&rolls, 2, 100);
        assert_eq!(analysis.min_per_turn, 60);
        assert_eq!(analysis.verdict, KoVerdict::Guaranteed(2));
    }

    #[test]
    fn test_no_damage_cannot_ko() {
        let rolls = [0u16; ROLL_COUNT];
        let analysis = analyze(&rolls, 1, 175);
        assert_eq!(analysis.verdict, KoVerdict::CannotKo);
        assert_eq!(analysis.chances, [0.0; MAX_KO_TURNS]);
        assert_eq!(analysis.chip_percent_tenths(4), 1000);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(KoVerdict::Guaranteed(1).to_string(), "guaranteed OHKO");
        assert_eq!(KoVerdict::Guaranteed(3).to_string(), "guaranteed 3HKO");
        assert_eq!(
            KoVerdict::Chance {
                turns: 2,
                percent_tenths: 418
            }
            .to_string(),
            "41.8% chance to 2HKO"
        );
        assert_eq!(KoVerdict::CannotKo.to_string(), "not a KO within 4 turns");
    }
}
