//! GenerationSession, the primary public API for character generation.
//!
//! A session owns one character's characteristics, culture and career,
//! base-percentage table, allocation engine, background rolls and
//! equipment ledger, and exposes the read surface review and export
//! hosts consume. UI wizards drive it; persistence and document output
//! live elsewhere.

use crate::characteristics::Characteristics;
use crate::data::{Career, Culture, EquipmentDef, RuleData, SkillCatalog};
use crate::derived::{self, LocationHitPoints, MoneyRoll, SocialClassRoll};
use crate::dice::Roller;
use crate::engine::{EngineError, Phase, SkillAllocationEngine};
use crate::equipment::{self, BudgetSummary};
use crate::sheet::{self, FinalSkillSheet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a generated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown culture: {0}")]
    UnknownCulture(String),
    #[error("unknown career: {0}")]
    UnknownCareer(String),
    #[error("unknown cult: {0}")]
    UnknownCult(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Configuration for a new generation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub name: String,
    pub age: u32,
    pub characteristics: Characteristics,
    pub culture: String,
    pub career: String,
}

impl SessionConfig {
    /// Config with defaults: age 21, average characteristics, a Civilised
    /// Warrior. Override with the `with_` methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: 21,
            characteristics: Characteristics::default(),
            culture: "Civilised".to_string(),
            career: "Warrior".to_string(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = characteristics;
        self
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    pub fn with_career(mut self, career: impl Into<String>) -> Self {
        self.career = career.into();
        self
    }
}

/// Phase progress for display: the active phase and what remains in each
/// pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub phase: Phase,
    pub cultural_remaining: i32,
    pub career_remaining: i32,
    pub bonus_remaining: i32,
}

/// The finished character record handed to export hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedCharacter {
    pub id: CharacterId,
    pub name: String,
    pub age: u32,
    pub culture: String,
    pub career: String,
    pub characteristics: Characteristics,
    pub social_class: Option<String>,
    pub cult: Option<String>,
    pub silver: i32,
    pub hit_points: LocationHitPoints,
    pub skills: FinalSkillSheet,
    pub equipment: HashMap<String, u32>,
}

/// One character's generation state from configuration to completion.
#[derive(Debug)]
pub struct GenerationSession {
    id: CharacterId,
    name: String,
    age: u32,
    characteristics: Characteristics,
    culture: Culture,
    career: Career,
    catalog: SkillCatalog,
    equipment_prices: Vec<EquipmentDef>,
    cults: Vec<String>,
    base_skills: HashMap<String, i32>,
    engine: SkillAllocationEngine,
    social_class: Option<SocialClassRoll>,
    money: Option<MoneyRoll>,
    cult: Option<String>,
    equipment: HashMap<String, u32>,
    final_sheet: Option<FinalSkillSheet>,
}

impl GenerationSession {
    /// Start a session over the given rule data.
    pub fn new(config: SessionConfig, rules: &RuleData) -> Result<Self, SessionError> {
        let culture = rules
            .culture(&config.culture)
            .ok_or_else(|| SessionError::UnknownCulture(config.culture.clone()))?
            .clone();
        let career = rules
            .career(&config.career)
            .ok_or_else(|| SessionError::UnknownCareer(config.career.clone()))?
            .clone();
        let base_skills = sheet::build_base_skills(
            &rules.skills.standard,
            &rules.skills.professional,
            &config.characteristics,
        );
        let engine = SkillAllocationEngine::new(&culture, &career, &rules.skills, config.age);
        Ok(Self {
            id: CharacterId::new(),
            name: config.name,
            age: config.age,
            characteristics: config.characteristics,
            culture,
            career,
            catalog: rules.skills.clone(),
            equipment_prices: rules.equipment.clone(),
            cults: rules.cults.clone(),
            base_skills,
            engine,
            social_class: None,
            money: None,
            cult: None,
            equipment: HashMap::new(),
            final_sheet: None,
        })
    }

    // ========================================================================
    // Identity and inputs
    // ========================================================================

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn career(&self) -> &Career {
        &self.career
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.engine.phase() == Phase::Complete {
            return Err(SessionError::Engine(EngineError::GenerationComplete));
        }
        Ok(())
    }

    /// Replace the characteristics and recompute the base table.
    /// Committed allocations are unaffected. Refused once complete.
    pub fn set_characteristics(
        &mut self,
        characteristics: Characteristics,
    ) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        self.characteristics = characteristics;
        self.base_skills = sheet::build_base_skills(
            &self.catalog.standard,
            &self.catalog.professional,
            &self.characteristics,
        );
        Ok(())
    }

    /// Switch culture. The allocation engine restarts because every
    /// phase list changes, and the background rolls are cleared since
    /// both tables belong to the old culture.
    pub fn set_culture(&mut self, name: &str, rules: &RuleData) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let culture = rules
            .culture(name)
            .ok_or_else(|| SessionError::UnknownCulture(name.to_string()))?;
        self.culture = culture.clone();
        self.rebuild_engine();
        self.social_class = None;
        self.money = None;
        Ok(())
    }

    /// Switch career, restarting the allocation engine.
    pub fn set_career(&mut self, name: &str, rules: &RuleData) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let career = rules
            .career(name)
            .ok_or_else(|| SessionError::UnknownCareer(name.to_string()))?;
        self.career = career.clone();
        self.rebuild_engine();
        Ok(())
    }

    fn rebuild_engine(&mut self) {
        self.engine =
            SkillAllocationEngine::new(&self.culture, &self.career, &self.catalog, self.age);
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn engine(&self) -> &SkillAllocationEngine {
        &self.engine
    }

    /// Step to the next phase. Reaching `Complete` finalizes the sheet.
    pub fn advance_phase(&mut self) -> Result<Phase, SessionError> {
        let phase = self.engine.advance()?;
        if phase == Phase::Complete {
            self.final_sheet = Some(sheet::finalize(&self.base_skills, &self.engine));
        }
        Ok(phase)
    }

    /// Step back to revise the previous phase.
    pub fn back_phase(&mut self) -> Result<Phase, SessionError> {
        Ok(self.engine.back()?)
    }

    pub fn allocate_cultural_standard(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, SessionError> {
        Ok(self.engine.allocate_cultural_standard(skill, value)?)
    }

    pub fn select_cultural_professional(&mut self, skill: &str) -> Result<bool, SessionError> {
        Ok(self.engine.select_cultural_professional(skill)?)
    }

    pub fn deselect_cultural_professional(&mut self, skill: &str) -> Result<bool, SessionError> {
        Ok(self.engine.deselect_cultural_professional(skill)?)
    }

    pub fn allocate_cultural_professional(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, SessionError> {
        Ok(self.engine.allocate_cultural_professional(skill, value)?)
    }

    pub fn choose_combat_style(&mut self, style: &str) -> Result<(), SessionError> {
        Ok(self.engine.choose_combat_style(style)?)
    }

    pub fn allocate_combat_style(&mut self, value: i32) -> Result<bool, SessionError> {
        Ok(self.engine.allocate_combat_style(value)?)
    }

    pub fn allocate_career_standard(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, SessionError> {
        Ok(self.engine.allocate_career_standard(skill, value)?)
    }

    pub fn select_career_professional(&mut self, skill: &str) -> Result<bool, SessionError> {
        Ok(self.engine.select_career_professional(skill)?)
    }

    pub fn deselect_career_professional(&mut self, skill: &str) -> Result<bool, SessionError> {
        Ok(self.engine.deselect_career_professional(skill)?)
    }

    pub fn allocate_career_professional(
        &mut self,
        skill: &str,
        value: i32,
    ) -> Result<bool, SessionError> {
        Ok(self.engine.allocate_career_professional(skill, value)?)
    }

    pub fn choose_hobby(&mut self, skill: &str) -> Result<(), SessionError> {
        Ok(self.engine.choose_hobby(skill)?)
    }

    pub fn allocate_bonus(&mut self, skill: &str, value: i32) -> Result<bool, SessionError> {
        Ok(self.engine.allocate_bonus(skill, value)?)
    }

    // ========================================================================
    // Skills
    // ========================================================================

    /// Starting percentage for a skill before any allocation.
    pub fn base_value(&self, skill: &str) -> i32 {
        self.base_skills.get(skill).copied().unwrap_or(0)
    }

    pub fn base_skills(&self) -> &HashMap<String, i32> {
        &self.base_skills
    }

    pub fn is_complete(&self) -> bool {
        self.engine.phase() == Phase::Complete
    }

    /// The finalized sheet, present once generation completes.
    pub fn final_sheet(&self) -> Option<&FinalSkillSheet> {
        self.final_sheet.as_ref()
    }

    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary {
            phase: self.engine.phase(),
            cultural_remaining: self.engine.cultural_pool().remaining(),
            career_remaining: self.engine.career_pool().remaining(),
            bonus_remaining: self.engine.bonus_pool().remaining(),
        }
    }

    // ========================================================================
    // Background: derived tables, cult, equipment
    // ========================================================================

    /// Hit points per location for the current characteristics.
    pub fn hit_points(&self) -> LocationHitPoints {
        derived::location_hit_points(&self.characteristics)
    }

    /// Roll (or explicitly re-roll) social class. The result is stored.
    pub fn roll_social_class(&mut self, roller: &mut impl Roller) -> &SocialClassRoll {
        self.social_class
            .insert(derived::roll_social_class(&self.culture, roller))
    }

    pub fn social_class_roll(&self) -> Option<&SocialClassRoll> {
        self.social_class.as_ref()
    }

    pub fn social_class(&self) -> Option<&str> {
        self.social_class
            .as_ref()
            .and_then(|result| result.class_name.as_deref())
    }

    /// Roll (or explicitly re-roll) starting money, applying the current
    /// social class if one has been rolled. The result is stored.
    pub fn roll_starting_money(&mut self, roller: &mut impl Roller) -> &MoneyRoll {
        let class = self.social_class().map(str::to_string);
        let roll = derived::roll_starting_money(&self.culture, class.as_deref(), roller);
        self.money.insert(roll)
    }

    pub fn money_roll(&self) -> Option<&MoneyRoll> {
        self.money.as_ref()
    }

    /// Starting silver, once money has been rolled.
    pub fn starting_silver(&self) -> Option<i32> {
        self.money.as_ref().map(|roll| roll.silver)
    }

    /// Join a cult from the rule data's list. Like equipment, this is a
    /// review-time choice and stays editable after completion.
    pub fn set_cult(&mut self, cult: &str) -> Result<(), SessionError> {
        if !self.cults.iter().any(|c| c == cult) {
            return Err(SessionError::UnknownCult(cult.to_string()));
        }
        self.cult = Some(cult.to_string());
        Ok(())
    }

    pub fn clear_cult(&mut self) {
        self.cult = None;
    }

    pub fn cult(&self) -> Option<&str> {
        self.cult.as_deref()
    }

    /// Set an item's purchased quantity; 0 removes the line.
    pub fn set_equipment_quantity(&mut self, name: &str, quantity: u32) {
        if quantity == 0 {
            self.equipment.remove(name);
        } else {
            self.equipment.insert(name.to_string(), quantity);
        }
    }

    pub fn equipment_quantity(&self, name: &str) -> u32 {
        self.equipment.get(name).copied().unwrap_or(0)
    }

    pub fn equipment(&self) -> &HashMap<String, u32> {
        &self.equipment
    }

    /// Price the equipment ledger against starting silver (0 until money
    /// has been rolled).
    pub fn budget(&self) -> BudgetSummary {
        equipment::equipment_budget(
            &self.equipment_prices,
            &self.equipment,
            self.starting_silver().unwrap_or(0),
        )
    }

    /// Snapshot the finished character; `None` until generation completes.
    pub fn completed_character(&self) -> Option<CompletedCharacter> {
        let skills = self.final_sheet.clone()?;
        Some(CompletedCharacter {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            culture: self.culture.name.clone(),
            career: self.career.name.clone(),
            characteristics: self.characteristics.clone(),
            social_class: self.social_class().map(String::from),
            cult: self.cult.clone(),
            silver: self.starting_silver().unwrap_or(0),
            hit_points: self.hit_points(),
            skills,
            equipment: self.equipment.clone(),
        })
    }
}
