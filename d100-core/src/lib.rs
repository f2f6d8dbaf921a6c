//! Character generation engine for d100 percentile roleplaying.
//!
//! This crate implements the rules core of a character generator:
//!
//! - attribute-formula evaluation into base skill percentages
//! - the cultural, career and bonus point-spending phases, with pool
//!   capacities, per-skill caps and professional-pick limits
//! - finalization into a single immutable skill sheet
//! - derived tables: hit points per body location, age-based bonus
//!   pools, social class and starting money rolls
//! - equipment budgeting against rolled starting silver
//!
//! Rule content (cultures, careers, skill formulas, price lists) is
//! data, not code: hosts load their own via
//! [`RuleData::from_json`](data::RuleData::from_json) or use the
//! built-in [`BUILTIN_RULES`] catalog. UI wizards, document export and
//! persistence are hosts that sit on top of [`GenerationSession`].
//!
//! # Quick Start
//!
//! ```
//! use d100_core::{GenerationSession, SessionConfig, BUILTIN_RULES};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SessionConfig::new("Kara")
//!     .with_age(25)
//!     .with_culture("Barbarian")
//!     .with_career("Scout");
//! let mut session = GenerationSession::new(config, &BUILTIN_RULES)?;
//!
//! session.allocate_cultural_standard("Athletics", 15)?;
//! assert_eq!(session.progress().cultural_remaining, 85);
//! # Ok(())
//! # }
//! ```

pub mod characteristics;
pub mod data;
pub mod derived;
pub mod dice;
pub mod engine;
pub mod equipment;
pub mod formula;
pub mod pool;
pub mod session;
pub mod sheet;
pub mod testing;

pub use characteristics::{roll_characteristics, Characteristic, Characteristics};
pub use data::{Career, Culture, RuleData, SkillCatalog, SkillDef, BUILTIN_RULES};
pub use derived::{location_hit_points, LocationHitPoints, MoneyRoll, SocialClassRoll};
pub use dice::{DiceError, DiceExpression, DiceRoll, RngRoller, Roller};
pub use engine::{EngineError, Phase, SelectionSet, SkillAllocationEngine};
pub use equipment::{equipment_budget, BudgetSummary};
pub use pool::{AgeBonus, AllocationPool};
pub use session::{
    CharacterId, CompletedCharacter, GenerationSession, ProgressSummary, SessionConfig,
    SessionError,
};
pub use sheet::{build_base_skills, finalize, FinalSkillSheet};
