//! Multi-phase skill-point allocation.
//!
//! A generation session spends three pools in order: cultural, career,
//! then the age-based bonus pool, onto the skills its culture and career
//! offer. The phases form an explicit state machine. [`advance`] and
//! [`back`] are the only transitions, and the final step into
//! [`Phase::Complete`] is gated on the bonus pool being fully spent.
//!
//! [`advance`]: SkillAllocationEngine::advance
//! [`back`]: SkillAllocationEngine::back

use crate::data::{Career, Culture, SkillCatalog};
use crate::pool::{AgeBonus, AllocationPool, BONUS_MINIMUM_SPEND};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Skill points in each of the cultural and career pools.
pub const PHASE_POOL_CAPACITY: i32 = 100;
/// Most points one skill may take during the cultural and career phases.
pub const PHASE_SKILL_MAX: i32 = 15;
/// Professional-skill picks allowed per phase.
pub const MAX_PROFESSIONAL_PICKS: usize = 3;

/// Ordered allocation phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Cultural,
    Career,
    Bonus,
    Complete,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Cultural => "Cultural",
            Phase::Career => "Career",
            Phase::Bonus => "Bonus",
            Phase::Complete => "Complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors from allocation-engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("operation belongs to the {expected} phase, but {actual} is active")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("skill '{0}' is not available in this phase")]
    SkillNotAvailable(String),
    #[error("combat style '{0}' is not offered by this culture")]
    UnknownCombatStyle(String),
    #[error("no combat style has been chosen")]
    NoCombatStyle,
    #[error("allocation incomplete: {remaining} bonus points remain unspent")]
    BonusPointsUnspent { remaining: i32 },
    #[error("generation is already complete")]
    GenerationComplete,
    #[error("the cultural phase has no earlier phase")]
    AtFirstPhase,
}

/// Bounded set of professional-skill picks.
///
/// Adding past the limit is refused rather than evicting an earlier
/// pick; removal works regardless, and a removed skill may be re-added.
/// Pick order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSet {
    members: Vec<String>,
    limit: usize,
}

impl SelectionSet {
    pub fn new(limit: usize) -> Self {
        Self {
            members: Vec::new(),
            limit,
        }
    }

    /// Add a pick. Returns whether the skill is selected after the call:
    /// re-selecting an existing member reports true, a full set refuses
    /// with false.
    pub fn select(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return true;
        }
        if self.members.len() >= self.limit {
            return false;
        }
        self.members.push(name.to_string());
        true
    }

    /// Remove a pick; true when it was present.
    pub fn deselect(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != name);
        self.members.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Picks in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(String::as_str)
    }
}

fn contains(list: &[String], name: &str) -> bool {
    list.iter().any(|s| s == name)
}

/// Orchestrates the cultural, career and bonus allocation phases.
///
/// Each of the cultural and career phases owns one shared
/// [`AllocationPool`]: the standard, professional and combat-style
/// operations all draw from that single ledger, so spending can never be
/// double-counted across categories. Navigating between phases never
/// discards committed allocations.
#[derive(Debug, Clone)]
pub struct SkillAllocationEngine {
    phase: Phase,

    cultural_standard: Vec<String>,
    cultural_professional: Vec<String>,
    combat_styles: Vec<String>,
    career_standard: Vec<String>,
    career_professional: Vec<String>,
    catalog_skills: Vec<String>,

    cultural_pool: AllocationPool,
    career_pool: AllocationPool,
    bonus_pool: AllocationPool,

    cultural_picks: SelectionSet,
    career_picks: SelectionSet,
    combat_style: Option<String>,
    hobby: Option<String>,
}

impl SkillAllocationEngine {
    /// Build the engine for a culture/career pairing; `age` sizes the
    /// bonus pool via [`AgeBonus::for_age`].
    pub fn new(culture: &Culture, career: &Career, catalog: &SkillCatalog, age: u32) -> Self {
        let bonus = AgeBonus::for_age(age);
        Self {
            phase: Phase::Cultural,
            cultural_standard: culture.standard_skills.clone(),
            cultural_professional: culture.professional_skills.clone(),
            combat_styles: culture.combat_styles.clone(),
            career_standard: career.standard_skills.clone(),
            career_professional: career.professional_skills.clone(),
            catalog_skills: catalog.names(),
            cultural_pool: AllocationPool::new(PHASE_POOL_CAPACITY, PHASE_SKILL_MAX),
            career_pool: AllocationPool::new(PHASE_POOL_CAPACITY, PHASE_SKILL_MAX),
            bonus_pool: AllocationPool::new(bonus.pool, bonus.per_skill_max)
                .with_minimum_spend(BONUS_MINIMUM_SPEND),
            cultural_picks: SelectionSet::new(MAX_PROFESSIONAL_PICKS),
            career_picks: SelectionSet::new(MAX_PROFESSIONAL_PICKS),
            combat_style: None,
            hobby: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn require_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // ========================================================================
    // Phase transitions
    // ========================================================================

    /// Step forward. The final `Bonus -> Complete` edge is refused while
    /// bonus points remain unspent; `Complete` itself is terminal.
    pub fn advance(&mut self) -> Result<Phase, EngineError> {
        self.phase = match self.phase {
            Phase::Cultural => Phase::Career,
            Phase::Career => Phase::Bonus,
            Phase::Bonus => {
                if !self.bonus_pool.fully_spent() {
                    return Err(EngineError::BonusPointsUnspent {
                        remaining: self.bonus_pool.remaining(),
                    });
                }
                Phase::Complete
            }
            Phase::Complete => return Err(EngineError::GenerationComplete),
        };
        Ok(self.phase)
    }

    /// Step back to revise an earlier phase. Allocations made so far are
    /// kept. `Complete` cannot be left.
    pub fn back(&mut self) -> Result<Phase, EngineError> {
        self.phase = match self.phase {
            Phase::Cultural => return Err(EngineError::AtFirstPhase),
            Phase::Career => Phase::Cultural,
            Phase::Bonus => Phase::Career,
            Phase::Complete => return Err(EngineError::GenerationComplete),
        };
        Ok(self.phase)
    }

    // ========================================================================
    // Cultural phase
    // ========================================================================

    /// Allocate cultural points to one of the culture's standard skills.
    /// `Ok(false)` reports a capacity refusal; the pool is unchanged.
    pub fn allocate_cultural_standard(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, EngineError> {
        self.require_phase(Phase::Cultural)?;
        if !contains(&self.cultural_standard, skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.cultural_pool.try_increment(skill, value))
    }

    /// Pick a professional skill from the culture's list.
    /// Returns whether the skill is selected after the call.
    pub fn select_cultural_professional(&mut self, skill: &str) -> Result<bool, EngineError> {
        self.require_phase(Phase::Cultural)?;
        if !contains(&self.cultural_professional, skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.cultural_picks.select(skill))
    }

    /// Drop a professional pick, refunding any points allocated to it.
    pub fn deselect_cultural_professional(&mut self, skill: &str) -> Result<bool, EngineError> {
        self.require_phase(Phase::Cultural)?;
        let removed = self.cultural_picks.deselect(skill);
        if removed {
            self.cultural_pool.refund(skill);
            self.reclaim_stale_bonus(skill);
        }
        Ok(removed)
    }

    /// Allocate cultural points to a currently selected professional skill.
    pub fn allocate_cultural_professional(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, EngineError> {
        self.require_phase(Phase::Cultural)?;
        if !self.cultural_picks.contains(skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.cultural_pool.try_increment(skill, value))
    }

    /// Choose the single combat style. Replacing an earlier choice
    /// refunds whatever was allocated to it.
    pub fn choose_combat_style(&mut self, style: &str) -> Result<(), EngineError> {
        self.require_phase(Phase::Cultural)?;
        if !contains(&self.combat_styles, style) {
            return Err(EngineError::UnknownCombatStyle(style.to_string()));
        }
        let previous = self.combat_style.replace(style.to_string());
        if let Some(previous) = previous {
            if previous != style {
                self.cultural_pool.refund(&previous);
                self.reclaim_stale_bonus(&previous);
            }
        }
        Ok(())
    }

    /// Allocate cultural points to the chosen combat style.
    pub fn allocate_combat_style(&mut self, value: i32) -> Result<bool, EngineError> {
        self.require_phase(Phase::Cultural)?;
        let style = self
            .combat_style
            .clone()
            .ok_or(EngineError::NoCombatStyle)?;
        Ok(self.cultural_pool.try_increment(&style, value))
    }

    // ========================================================================
    // Career phase
    // ========================================================================

    /// Allocate career points to one of the career's standard skills.
    pub fn allocate_career_standard(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, EngineError> {
        self.require_phase(Phase::Career)?;
        if !contains(&self.career_standard, skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.career_pool.try_increment(skill, value))
    }

    /// Pick a professional skill from the career's list.
    pub fn select_career_professional(&mut self, skill: &str) -> Result<bool, EngineError> {
        self.require_phase(Phase::Career)?;
        if !contains(&self.career_professional, skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.career_picks.select(skill))
    }

    /// Drop a career professional pick, refunding its allocation.
    pub fn deselect_career_professional(&mut self, skill: &str) -> Result<bool, EngineError> {
        self.require_phase(Phase::Career)?;
        let removed = self.career_picks.deselect(skill);
        if removed {
            self.career_pool.refund(skill);
            self.reclaim_stale_bonus(skill);
        }
        Ok(removed)
    }

    /// Allocate career points to a currently selected professional skill.
    pub fn allocate_career_professional(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, EngineError> {
        self.require_phase(Phase::Career)?;
        if !self.career_picks.contains(skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.career_pool.try_increment(skill, value))
    }

    // ========================================================================
    // Bonus phase
    // ========================================================================

    /// Choose the free-choice hobby skill from the full catalog.
    /// Replacing an earlier choice refunds whatever was allocated to it,
    /// unless the old hobby stays eligible through another list.
    pub fn choose_hobby(&mut self, skill: &str) -> Result<(), EngineError> {
        self.require_phase(Phase::Bonus)?;
        if !contains(&self.catalog_skills, skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        let previous = self.hobby.replace(skill.to_string());
        if let Some(previous) = previous {
            if previous != skill {
                self.reclaim_stale_bonus(&previous);
            }
        }
        Ok(())
    }

    /// Allocate bonus points to an eligible skill. Requests of 1 to 4
    /// snap to 0 and cost nothing.
    pub fn allocate_bonus(&mut self, skill: &str, value: i32) -> Result<bool, EngineError> {
        self.require_phase(Phase::Bonus)?;
        if !self.is_bonus_eligible(skill) {
            return Err(EngineError::SkillNotAvailable(skill.to_string()));
        }
        Ok(self.bonus_pool.try_increment(skill, value))
    }

    /// Return a skill's bonus-pool points once nothing keeps it
    /// eligible. Deselecting a pick or replacing the style or hobby
    /// calls this so revision in any phase leaves no allocation the
    /// player can no longer reach.
    fn reclaim_stale_bonus(&mut self, skill: &str) {
        if !self.is_bonus_eligible(skill) {
            self.bonus_pool.refund(skill);
        }
    }

    /// Whether a skill may take bonus points: everything the cultural and
    /// career phases put on the sheet, plus the hobby.
    pub fn is_bonus_eligible(&self, skill: &str) -> bool {
        contains(&self.cultural_standard, skill)
            || contains(&self.career_standard, skill)
            || self.cultural_picks.contains(skill)
            || self.career_picks.contains(skill)
            || self.combat_style.as_deref() == Some(skill)
            || self.hobby.as_deref() == Some(skill)
    }

    /// Every bonus-eligible skill, sorted and de-duplicated.
    pub fn bonus_eligible(&self) -> Vec<String> {
        let mut names: HashSet<&str> = HashSet::new();
        names.extend(self.cultural_standard.iter().map(String::as_str));
        names.extend(self.career_standard.iter().map(String::as_str));
        names.extend(self.cultural_picks.iter());
        names.extend(self.career_picks.iter());
        names.extend(self.combat_style.as_deref());
        names.extend(self.hobby.as_deref());
        let mut names: Vec<String> = names.into_iter().map(String::from).collect();
        names.sort();
        names
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn cultural_pool(&self) -> &AllocationPool {
        &self.cultural_pool
    }

    pub fn career_pool(&self) -> &AllocationPool {
        &self.career_pool
    }

    pub fn bonus_pool(&self) -> &AllocationPool {
        &self.bonus_pool
    }

    pub fn cultural_picks(&self) -> &SelectionSet {
        &self.cultural_picks
    }

    pub fn career_picks(&self) -> &SelectionSet {
        &self.career_picks
    }

    pub fn combat_style(&self) -> Option<&str> {
        self.combat_style.as_deref()
    }

    pub fn hobby(&self) -> Option<&str> {
        self.hobby.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BUILTIN_RULES;

    fn engine(age: u32) -> SkillAllocationEngine {
        let rules = &*BUILTIN_RULES;
        SkillAllocationEngine::new(
            rules.culture("Barbarian").unwrap(),
            rules.career("Warrior").unwrap(),
            &rules.skills,
            age,
        )
    }

    fn spend_all_bonus(engine: &mut SkillAllocationEngine) {
        let cap = engine.bonus_pool().per_skill_max();
        for skill in engine.bonus_eligible() {
            let remaining = engine.bonus_pool().remaining();
            if remaining == 0 {
                break;
            }
            engine.allocate_bonus(&skill, remaining.min(cap)).unwrap();
        }
        assert!(engine.bonus_pool().fully_spent());
    }

    #[test]
    fn test_forward_and_backward_transitions() {
        let mut engine = engine(25);
        assert_eq!(engine.phase(), Phase::Cultural);
        assert_eq!(engine.advance().unwrap(), Phase::Career);
        assert_eq!(engine.advance().unwrap(), Phase::Bonus);
        assert_eq!(engine.back().unwrap(), Phase::Career);
        assert_eq!(engine.back().unwrap(), Phase::Cultural);
        assert_eq!(engine.back().unwrap_err(), EngineError::AtFirstPhase);
    }

    #[test]
    fn test_completion_gate_requires_full_bonus_spend() {
        let mut engine = engine(25);
        engine.advance().unwrap();
        engine.advance().unwrap();
        assert_eq!(
            engine.advance().unwrap_err(),
            EngineError::BonusPointsUnspent { remaining: 150 }
        );
        spend_all_bonus(&mut engine);
        assert_eq!(engine.advance().unwrap(), Phase::Complete);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut engine = engine(25);
        engine.advance().unwrap();
        engine.advance().unwrap();
        spend_all_bonus(&mut engine);
        engine.advance().unwrap();
        assert_eq!(engine.advance().unwrap_err(), EngineError::GenerationComplete);
        assert_eq!(engine.back().unwrap_err(), EngineError::GenerationComplete);
        assert!(matches!(
            engine.allocate_bonus("Athletics", 10),
            Err(EngineError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_operations_are_phase_gated() {
        let mut engine = engine(25);
        assert!(matches!(
            engine.allocate_career_standard("Athletics", 10),
            Err(EngineError::WrongPhase {
                expected: Phase::Career,
                actual: Phase::Cultural
            })
        ));
        assert!(matches!(
            engine.allocate_bonus("Athletics", 10),
            Err(EngineError::WrongPhase { .. })
        ));
        engine.advance().unwrap();
        assert!(matches!(
            engine.allocate_cultural_standard("Athletics", 10),
            Err(EngineError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_allocation_requires_a_listed_skill() {
        let mut engine = engine(25);
        // Willpower is standard in the catalog but not Barbarian
        assert!(matches!(
            engine.allocate_cultural_standard("Willpower", 10),
            Err(EngineError::SkillNotAvailable(_))
        ));
        // professional skills need selection first
        assert!(matches!(
            engine.allocate_cultural_professional("Survival", 10),
            Err(EngineError::SkillNotAvailable(_))
        ));
        engine.select_cultural_professional("Survival").unwrap();
        assert!(engine.allocate_cultural_professional("Survival", 10).unwrap());
    }

    #[test]
    fn test_professional_picks_stop_at_three() {
        let mut engine = engine(25);
        assert!(engine.select_cultural_professional("Craft").unwrap());
        assert!(engine.select_cultural_professional("Healing").unwrap());
        assert!(engine.select_cultural_professional("Lore").unwrap());
        // fourth pick refused, set unchanged
        assert!(!engine.select_cultural_professional("Survival").unwrap());
        assert_eq!(engine.cultural_picks().len(), 3);
        assert!(!engine.cultural_picks().contains("Survival"));
        // re-selecting a member is a no-op that reports success
        assert!(engine.select_cultural_professional("Craft").unwrap());
        assert_eq!(engine.cultural_picks().len(), 3);
        // room opens up after a deselect
        assert!(engine.deselect_cultural_professional("Lore").unwrap());
        assert!(engine.select_cultural_professional("Survival").unwrap());
    }

    #[test]
    fn test_deselect_refunds_points() {
        let mut engine = engine(25);
        engine.select_cultural_professional("Survival").unwrap();
        engine.allocate_cultural_professional("Survival", 12).unwrap();
        assert_eq!(engine.cultural_pool().spent(), 12);
        engine.deselect_cultural_professional("Survival").unwrap();
        assert_eq!(engine.cultural_pool().spent(), 0);
        assert!(matches!(
            engine.allocate_cultural_professional("Survival", 5),
            Err(EngineError::SkillNotAvailable(_))
        ));
    }

    #[test]
    fn test_combat_style_choice_and_replacement() {
        let mut engine = engine(25);
        assert_eq!(
            engine.allocate_combat_style(10).unwrap_err(),
            EngineError::NoCombatStyle
        );
        assert!(matches!(
            engine.choose_combat_style("Pike Square"),
            Err(EngineError::UnknownCombatStyle(_))
        ));
        engine.choose_combat_style("Axe and Shield").unwrap();
        assert!(engine.allocate_combat_style(10).unwrap());
        assert_eq!(engine.cultural_pool().allocation("Axe and Shield"), 10);

        // switching styles refunds the old allocation
        engine.choose_combat_style("Bow and Knife").unwrap();
        assert_eq!(engine.combat_style(), Some("Bow and Knife"));
        assert_eq!(engine.cultural_pool().spent(), 0);

        // re-choosing the current style keeps its points
        engine.allocate_combat_style(8).unwrap();
        engine.choose_combat_style("Bow and Knife").unwrap();
        assert_eq!(engine.cultural_pool().allocation("Bow and Knife"), 8);
    }

    #[test]
    fn test_navigation_preserves_allocations() {
        let mut engine = engine(25);
        engine.allocate_cultural_standard("Athletics", 15).unwrap();
        engine.advance().unwrap();
        engine.allocate_career_standard("Evade", 10).unwrap();
        engine.back().unwrap();
        assert_eq!(engine.cultural_pool().allocation("Athletics"), 15);
        engine.advance().unwrap();
        assert_eq!(engine.career_pool().allocation("Evade"), 10);
    }

    #[test]
    fn test_bonus_eligibility() {
        let mut engine = engine(25);
        engine.select_cultural_professional("Survival").unwrap();
        engine.choose_combat_style("Axe and Shield").unwrap();
        engine.advance().unwrap();
        engine.select_career_professional("Oratory").unwrap();
        engine.advance().unwrap();

        // culture standard, career standard, picks and style all qualify
        for skill in ["Boating", "Unarmed", "Survival", "Oratory", "Axe and Shield"] {
            assert!(engine.is_bonus_eligible(skill), "{skill} should be eligible");
        }
        // catalog skills never put on the sheet do not
        assert!(!engine.is_bonus_eligible("Commerce"));
        assert!(matches!(
            engine.allocate_bonus("Commerce", 10),
            Err(EngineError::SkillNotAvailable(_))
        ));

        // until chosen as the hobby
        engine.choose_hobby("Commerce").unwrap();
        assert!(engine.allocate_bonus("Commerce", 10).unwrap());

        // replacing the hobby refunds and removes eligibility
        engine.choose_hobby("Folk Magic").unwrap();
        assert_eq!(engine.bonus_pool().spent(), 0);
        assert!(!engine.is_bonus_eligible("Commerce"));
    }

    #[test]
    fn test_bonus_allocations_snap_below_five() {
        let mut engine = engine(16);
        engine.advance().unwrap();
        engine.advance().unwrap();
        assert!(engine.allocate_bonus("Athletics", 3).unwrap());
        assert_eq!(engine.bonus_pool().allocation("Athletics"), 0);
        assert_eq!(engine.bonus_pool().spent(), 0);
        assert!(engine.allocate_bonus("Athletics", 5).unwrap());
        assert_eq!(engine.bonus_pool().allocation("Athletics"), 5);
    }

    #[test]
    fn test_revision_reclaims_bonus_points_for_removed_picks() {
        let mut engine = engine(16);
        engine.advance().unwrap();
        engine.select_career_professional("Oratory").unwrap();
        engine.advance().unwrap();
        engine.allocate_bonus("Oratory", 10).unwrap();
        assert_eq!(engine.bonus_pool().spent(), 10);

        // revising the career phase removes the pick and its bonus points
        engine.back().unwrap();
        engine.deselect_career_professional("Oratory").unwrap();
        assert_eq!(engine.bonus_pool().allocation("Oratory"), 0);
        assert_eq!(engine.bonus_pool().spent(), 0);

        engine.advance().unwrap();
        assert!(!engine.is_bonus_eligible("Oratory"));
        assert_eq!(
            engine.advance().unwrap_err(),
            EngineError::BonusPointsUnspent { remaining: 100 }
        );
    }

    #[test]
    fn test_hobby_switch_keeps_points_for_skills_on_a_standard_list() {
        let mut engine = engine(25);
        engine.advance().unwrap();
        engine.advance().unwrap();
        engine.choose_hobby("Ride").unwrap();
        engine.allocate_bonus("Ride", 15).unwrap();

        // Ride stays eligible through the cultural standard list
        engine.choose_hobby("Folk Magic").unwrap();
        assert_eq!(engine.bonus_pool().allocation("Ride"), 15);
        assert_eq!(engine.bonus_pool().spent(), 15);
    }
}
