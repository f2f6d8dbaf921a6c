//! Base-percentage table and final-sheet assembly.
//!
//! [`build_base_skills`] evaluates the catalog's formulas into starting
//! percentages once per session; [`finalize`] merges those with every
//! committed allocation into the single immutable sheet that review and
//! export read from.

use crate::characteristics::Characteristics;
use crate::data::SkillDef;
use crate::engine::SkillAllocationEngine;
use crate::formula;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed additive bonus for the cultural-fluency skills.
pub const CULTURAL_FLUENCY_BONUS: i32 = 40;

/// Skills that receive [`CULTURAL_FLUENCY_BONUS`] on top of their formula.
pub const CULTURAL_FLUENCY_SKILLS: [&str; 2] = ["Customs", "Native Tongue"];

/// Evaluate every formula entry into a starting percentage.
///
/// Both groups merge into one flat map. A name defined in both groups is
/// an authoring error; the later (professional) value wins and a warning
/// is emitted rather than resolving it two ways silently.
pub fn build_base_skills(
    standard: &[SkillDef],
    professional: &[SkillDef],
    characteristics: &Characteristics,
) -> HashMap<String, i32> {
    let mut base = HashMap::new();
    for def in standard.iter().chain(professional) {
        let mut value = formula::evaluate(&def.base, characteristics);
        if CULTURAL_FLUENCY_SKILLS.contains(&def.name.as_str()) {
            value += CULTURAL_FLUENCY_BONUS;
        }
        if base.insert(def.name.clone(), value).is_some() {
            tracing::warn!(
                skill = %def.name,
                "skill defined in more than one formula list; last value wins"
            );
        }
    }
    base
}

/// The authoritative skill sheet: name to final percentage.
///
/// Produced once by [`finalize`] when generation completes and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSkillSheet {
    values: HashMap<String, i32>,
}

impl FinalSkillSheet {
    /// Final percentage for a skill; 0 when the sheet does not know it.
    pub fn get(&self, skill: &str) -> i32 {
        self.values.get(skill).copied().unwrap_or(0)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.values.contains_key(skill)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Entries sorted by skill name, for stable display and export.
    pub fn sorted(&self) -> Vec<(&str, i32)> {
        let mut entries: Vec<(&str, i32)> = self.iter().collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}

/// Merge base percentages with every phase's committed allocations.
///
/// Only names present in `base` appear on the sheet; an allocation whose
/// skill has no base entry is an authoring error and contributes nothing.
/// The merge is a pure function of its inputs, so calling it again with
/// unchanged state yields an identical sheet.
pub fn finalize(base: &HashMap<String, i32>, engine: &SkillAllocationEngine) -> FinalSkillSheet {
    let mut values = base.clone();
    for pool in [engine.cultural_pool(), engine.career_pool(), engine.bonus_pool()] {
        for (skill, allocated) in pool.allocations() {
            match values.get_mut(skill) {
                Some(value) => *value += allocated,
                None => {
                    tracing::warn!(
                        skill,
                        "allocation for a skill with no base entry; dropped from the final sheet"
                    );
                }
            }
        }
    }
    FinalSkillSheet { values }
}
