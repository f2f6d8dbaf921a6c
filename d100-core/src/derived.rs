//! Derived attribute tables: hit points per body location, social class
//! and starting money.
//!
//! These stand apart from the allocation phases. Hit points are a pure
//! lookup recomputed whenever characteristics change; the social-class
//! and money rolls produce one-shot results a session stores until an
//! explicit re-roll.

use crate::characteristics::Characteristics;
use crate::data::Culture;
use crate::dice::Roller;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Hit points per location
// ============================================================================

/// Hit points for each of the five body-location rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHitPoints {
    pub head: i32,
    pub chest: i32,
    pub abdomen: i32,
    pub arm: i32,
    pub leg: i32,
}

impl fmt::Display for LocationHitPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Head {}, Chest {}, Abdomen {}, Arm {}, Leg {}",
            self.head, self.chest, self.abdomen, self.arm, self.leg
        )
    }
}

/// Inclusive upper bounds of the CON+SIZ brackets.
const HP_THRESHOLDS: [i32; 8] = [5, 10, 15, 20, 25, 30, 35, 40];

const HEAD_HP: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
const CHEST_HP: [i32; 8] = [3, 4, 5, 6, 7, 8, 9, 10];
const ABDOMEN_HP: [i32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
const ARM_HP: [i32; 8] = [1, 1, 2, 3, 4, 5, 6, 7];
const LEG_HP: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Look up hit points per location from CON + SIZ.
///
/// Totals beyond the last bracket use its row plus one extra point per
/// started step of five above 40.
pub fn location_hit_points(characteristics: &Characteristics) -> LocationHitPoints {
    let total = characteristics.constitution as i32 + characteristics.size as i32;
    let (index, extra) = match HP_THRESHOLDS.iter().position(|&bound| total <= bound) {
        Some(index) => (index, 0),
        None => (HP_THRESHOLDS.len() - 1, (total - 41) / 5 + 1),
    };
    LocationHitPoints {
        head: HEAD_HP[index] + extra,
        chest: CHEST_HP[index] + extra,
        abdomen: ABDOMEN_HP[index] + extra,
        arm: ARM_HP[index] + extra,
        leg: LEG_HP[index] + extra,
    }
}

// ============================================================================
// Background rolls
// ============================================================================

/// Outcome of the d100 social-class roll.
///
/// A roll no table row covers leaves the class unset rather than
/// guessing; [`crate::data::RuleData::validate`] reports such gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialClassRoll {
    pub roll: u32,
    pub class_name: Option<String>,
}

/// Roll d100 against the culture's social-class table.
pub fn roll_social_class(culture: &Culture, roller: &mut impl Roller) -> SocialClassRoll {
    let roll = roller.roll(100);
    let class_name = culture
        .social_class_table
        .iter()
        .find(|row| row.min <= roll && roll <= row.max)
        .map(|row| row.name.clone());
    if class_name.is_none() {
        tracing::warn!(
            culture = %culture.name,
            roll,
            "social-class table has no row for this roll"
        );
    }
    SocialClassRoll { roll, class_name }
}

/// Outcome of the starting-money roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRoll {
    /// The four d6 faces.
    pub rolls: [u32; 4],
    /// Silver pieces after the culture and social-class scaling.
    pub silver: i32,
}

/// Roll starting money: four d6, scaled by the culture's money
/// multiplier and the social class's modifier (1 when the class is
/// unset or has no entry), rounded to the nearest silver piece.
pub fn roll_starting_money(
    culture: &Culture,
    social_class: Option<&str>,
    roller: &mut impl Roller,
) -> MoneyRoll {
    let mut rolls = [0u32; 4];
    for face in rolls.iter_mut() {
        *face = roller.roll(6);
    }
    let total: u32 = rolls.iter().sum();
    let class_modifier = social_class
        .and_then(|name| culture.social_class_modifiers.get(name))
        .copied()
        .unwrap_or(1.0);
    let silver = (total as f64 * culture.money_multiplier * class_modifier).round() as i32;
    MoneyRoll { rolls, silver }
}
