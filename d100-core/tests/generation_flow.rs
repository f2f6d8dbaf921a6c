//! End-to-end generation scenarios over the session facade.

use d100_core::{
    Characteristics, EngineError, GenerationSession, Phase, RuleData, SessionConfig, SessionError,
    BUILTIN_RULES,
};
use d100_core::testing::ScriptedRoller;

/// A two-skill culture for pinning down exact arithmetic.
fn island_rules() -> RuleData {
    RuleData::from_json(
        r#"{
        "cultures": [{
            "name": "Island",
            "standard_skills": ["Boating", "Customs"],
            "professional_skills": ["Seamanship"],
            "combat_styles": ["Spear and Shield"],
            "money_multiplier": 30.0
        }],
        "careers": [{
            "name": "Fisher",
            "standard_skills": ["Boating"],
            "professional_skills": ["Seamanship"]
        }],
        "skills": {
            "standard": [
                {"name": "Boating", "base": "STR+CON"},
                {"name": "Customs", "base": "INTx2"}
            ],
            "professional": [
                {"name": "Seamanship", "base": "INT+CON"},
                {"name": "Spear and Shield", "base": "STR+DEX"}
            ]
        }
    }"#,
    )
    .unwrap()
}

#[test]
fn test_cultural_allocation_tracks_spent_and_remaining() {
    let rules = island_rules();
    assert!(rules.validate().is_empty());

    // STR 16, CON 14 -> Boating 30; INT 10 -> Customs 20 + 40
    let config = SessionConfig::new("Islander")
        .with_characteristics(Characteristics::new(16, 14, 10, 10, 10, 10, 10))
        .with_culture("Island")
        .with_career("Fisher");
    let mut session = GenerationSession::new(config, &rules).unwrap();

    assert_eq!(session.base_value("Boating"), 30);
    assert_eq!(session.base_value("Customs"), 60);

    assert!(session.allocate_cultural_standard("Boating", 15).unwrap());
    let progress = session.progress();
    assert_eq!(progress.phase, Phase::Cultural);
    assert_eq!(progress.cultural_remaining, 85);
    assert_eq!(session.engine().cultural_pool().spent(), 15);
    assert_eq!(session.engine().cultural_pool().allocation("Customs"), 0);
}

#[test]
fn test_bonus_pool_must_empty_before_completion() {
    let config = SessionConfig::new("Young")
        .with_age(16)
        .with_culture("Barbarian")
        .with_career("Warrior");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();

    session.advance_phase().unwrap();
    session.advance_phase().unwrap();
    assert_eq!(session.phase(), Phase::Bonus);
    assert_eq!(
        session.advance_phase().unwrap_err(),
        SessionError::Engine(EngineError::BonusPointsUnspent { remaining: 100 })
    );

    // age 16: 100 points at 10 per skill, the Barbarian standards take all of it
    let skills = [
        "Athletics",
        "Boating",
        "Brawn",
        "Customs",
        "Endurance",
        "First Aid",
        "Locale",
        "Native Tongue",
        "Perception",
        "Ride",
    ];
    for (index, skill) in skills.iter().enumerate() {
        assert!(session.allocate_bonus(skill, 10).unwrap());
        assert_eq!(
            session.progress().bonus_remaining,
            100 - 10 * (index as i32 + 1)
        );
    }

    assert_eq!(session.advance_phase().unwrap(), Phase::Complete);
    assert!(session.is_complete());
    let sheet = session.final_sheet().unwrap();
    assert_eq!(sheet.get("Boating"), session.base_value("Boating") + 10);
}

#[test]
fn test_fourth_professional_pick_changes_nothing() {
    let config = SessionConfig::new("Picker")
        .with_culture("Barbarian")
        .with_career("Warrior");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();

    assert!(session.select_cultural_professional("Craft").unwrap());
    assert!(session.select_cultural_professional("Healing").unwrap());
    assert!(session.select_cultural_professional("Lore").unwrap());
    assert!(!session.select_cultural_professional("Track").unwrap());

    let picks: Vec<&str> = session.engine().cultural_picks().iter().collect();
    assert_eq!(picks, vec!["Craft", "Healing", "Lore"]);
    assert!(session.allocate_cultural_professional("Track", 10).is_err());
    assert_eq!(session.engine().cultural_pool().spent(), 0);
}

#[test]
fn test_deselected_skills_leave_no_trace_on_the_sheet() {
    let config = SessionConfig::new("Fickle")
        .with_age(16)
        .with_culture("Barbarian")
        .with_career("Warrior");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();

    session.select_cultural_professional("Survival").unwrap();
    session.allocate_cultural_professional("Survival", 12).unwrap();
    session.deselect_cultural_professional("Survival").unwrap();
    assert_eq!(session.progress().cultural_remaining, 100);

    session.advance_phase().unwrap();
    session.advance_phase().unwrap();
    for skill in [
        "Athletics",
        "Boating",
        "Brawn",
        "Customs",
        "Endurance",
        "First Aid",
        "Locale",
        "Native Tongue",
        "Perception",
        "Ride",
    ] {
        session.allocate_bonus(skill, 10).unwrap();
    }
    session.advance_phase().unwrap();

    let sheet = session.final_sheet().unwrap();
    assert_eq!(sheet.get("Survival"), session.base_value("Survival"));
}

#[test]
fn test_phase_navigation_keeps_earlier_work() {
    let config = SessionConfig::new("Reviser")
        .with_culture("Nomadic")
        .with_career("Scout");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();

    session.allocate_cultural_standard("Stealth", 15).unwrap();
    session.advance_phase().unwrap();
    session.allocate_career_standard("Swim", 10).unwrap();

    session.back_phase().unwrap();
    assert_eq!(session.phase(), Phase::Cultural);
    assert_eq!(session.engine().cultural_pool().allocation("Stealth"), 15);
    session.allocate_cultural_standard("Ride", 10).unwrap();

    session.advance_phase().unwrap();
    assert_eq!(session.engine().career_pool().allocation("Swim"), 10);
    // cultural operations are sealed again
    assert!(matches!(
        session.allocate_cultural_standard("Stealth", 5),
        Err(SessionError::Engine(EngineError::WrongPhase { .. }))
    ));
}

#[test]
fn test_full_generation_walkthrough() {
    // STR 15, CON 12, DEX 14, POW 10, CHA 8, INT 13, SIZ 15
    let mut chars_roller = ScriptedRoller::new([
        6, 5, 4, 4, 4, 4, 5, 5, 4, 3, 4, 3, 2, 3, 3, 4, 3, 5, 4,
    ]);
    let characteristics = d100_core::roll_characteristics(&mut chars_roller);
    assert_eq!(
        characteristics,
        Characteristics::new(15, 12, 14, 10, 8, 13, 15)
    );

    let config = SessionConfig::new("Varka")
        .with_age(30)
        .with_characteristics(characteristics)
        .with_culture("Nomadic")
        .with_career("Scout");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();

    // ---- cultural phase: 100 points, 15 per skill ----
    session.allocate_cultural_standard("Ride", 15).unwrap();
    session.allocate_cultural_standard("Stealth", 15).unwrap();
    session.allocate_cultural_standard("Endurance", 15).unwrap();
    session.allocate_cultural_standard("Perception", 10).unwrap();
    session.allocate_cultural_standard("Customs", 10).unwrap();
    session.choose_combat_style("Bow and Knife").unwrap();
    session.allocate_combat_style(10).unwrap();
    session.select_cultural_professional("Survival").unwrap();
    session.allocate_cultural_professional("Survival", 15).unwrap();
    session.select_cultural_professional("Track").unwrap();
    session.allocate_cultural_professional("Track", 10).unwrap();
    assert_eq!(session.progress().cultural_remaining, 0);

    // ---- career phase: partial spend is allowed ----
    session.advance_phase().unwrap();
    session.allocate_career_standard("Ride", 10).unwrap();
    session.allocate_career_standard("Athletics", 15).unwrap();
    session.allocate_career_standard("Swim", 10).unwrap();
    session.allocate_career_standard("First Aid", 10).unwrap();
    session.select_career_professional("Track").unwrap();
    session.allocate_career_professional("Track", 12).unwrap();
    session.select_career_professional("Navigation").unwrap();
    session.allocate_career_professional("Navigation", 8).unwrap();
    assert_eq!(session.progress().career_remaining, 35);

    // ---- bonus phase: age 30 grants 200 points at 20 per skill ----
    session.advance_phase().unwrap();
    assert_eq!(session.progress().bonus_remaining, 200);
    session.choose_hobby("Folk Magic").unwrap();
    session.allocate_bonus("Folk Magic", 20).unwrap();
    for skill in [
        "Athletics",
        "Customs",
        "Endurance",
        "First Aid",
        "Locale",
        "Native Tongue",
        "Perception",
        "Ride",
        "Stealth",
    ] {
        session.allocate_bonus(skill, 20).unwrap();
    }
    assert_eq!(session.advance_phase().unwrap(), Phase::Complete);

    // ---- the finalized sheet sums base and every pool ----
    let sheet = session.final_sheet().unwrap();
    assert_eq!(sheet.get("Ride"), 24 + 15 + 10 + 20);
    assert_eq!(sheet.get("Track"), 25 + 10 + 12);
    assert_eq!(sheet.get("Athletics"), 29 + 15 + 20);
    assert_eq!(sheet.get("Bow and Knife"), 29 + 10);
    assert_eq!(sheet.get("Folk Magic"), 18 + 20);
    assert_eq!(sheet.get("Customs"), 26 + 40 + 10 + 20);
    assert_eq!(sheet.get("Swim"), 27 + 10);
    assert_eq!(sheet.get("Survival"), 22 + 15);
    assert_eq!(sheet.get("Navigation"), 23 + 8);
    // never-touched skills keep their base
    assert_eq!(sheet.get("Insight"), 23);

    // ---- background: class, money, equipment, cult ----
    let mut roller = ScriptedRoller::new([90]);
    assert_eq!(
        session.roll_social_class(&mut roller).class_name.as_deref(),
        Some("Khan")
    );
    let mut roller = ScriptedRoller::new([6, 6, 5, 3]);
    session.roll_starting_money(&mut roller);
    // 20 points x25 culture x2.5 Khan
    assert_eq!(session.starting_silver(), Some(1250));

    session.set_equipment_quantity("Spear", 1);
    session.set_equipment_quantity("Rations (1 week)", 2);
    session.set_equipment_quantity("Sling", 1);
    let budget = session.budget();
    assert_eq!(budget.spent, 55.0);
    assert_eq!(budget.remaining, 1195.0);

    session.set_cult("Cult of the Hunter").unwrap();

    let character = session.completed_character().unwrap();
    assert_eq!(character.name, "Varka");
    assert_eq!(character.culture, "Nomadic");
    assert_eq!(character.career, "Scout");
    assert_eq!(character.social_class.as_deref(), Some("Khan"));
    assert_eq!(character.silver, 1250);
    assert_eq!(character.skills.get("Ride"), 69);
    // CON 12 + SIZ 15 = 27 falls in the 26-30 row
    assert_eq!(character.hit_points.head, 6);
    assert_eq!(character.hit_points.chest, 8);
}

#[test]
fn test_magic_tradition_hobbies_never_reach_the_sheet() {
    // magic skills are catalog data for the (external) tradition step;
    // they take bonus points as a hobby but have no base entry, so the
    // finalizer drops them
    let config = SessionConfig::new("Mystic")
        .with_age(16)
        .with_culture("Barbarian")
        .with_career("Warrior");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();
    session.advance_phase().unwrap();
    session.advance_phase().unwrap();

    session.choose_hobby("Invocation").unwrap();
    assert!(session.allocate_bonus("Invocation", 10).unwrap());
    for skill in [
        "Athletics",
        "Boating",
        "Brawn",
        "Customs",
        "Endurance",
        "First Aid",
        "Locale",
        "Native Tongue",
        "Perception",
    ] {
        session.allocate_bonus(skill, 10).unwrap();
    }
    session.advance_phase().unwrap();

    let sheet = session.final_sheet().unwrap();
    assert!(!sheet.contains("Invocation"));
    assert_eq!(sheet.get("Invocation"), 0);
    assert_eq!(session.base_value("Invocation"), 0);
}

#[test]
fn test_backing_out_of_a_pick_returns_its_bonus_points() {
    let config = SessionConfig::new("Undecided")
        .with_age(16)
        .with_culture("Barbarian")
        .with_career("Warrior");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();

    session.advance_phase().unwrap();
    session.select_career_professional("Oratory").unwrap();
    session.advance_phase().unwrap();
    session.allocate_bonus("Oratory", 10).unwrap();
    assert_eq!(session.progress().bonus_remaining, 90);

    // change of heart: drop the pick, then resume the bonus phase
    session.back_phase().unwrap();
    session.deselect_career_professional("Oratory").unwrap();
    session.advance_phase().unwrap();
    assert_eq!(session.progress().bonus_remaining, 100);

    for skill in [
        "Athletics",
        "Boating",
        "Brawn",
        "Customs",
        "Endurance",
        "First Aid",
        "Locale",
        "Native Tongue",
        "Perception",
        "Ride",
    ] {
        session.allocate_bonus(skill, 10).unwrap();
    }
    session.advance_phase().unwrap();

    let sheet = session.final_sheet().unwrap();
    assert_eq!(sheet.get("Oratory"), session.base_value("Oratory"));
}

#[test]
fn test_hobby_opens_one_catalog_skill_to_bonus_points() {
    let config = SessionConfig::new("Dabbler")
        .with_culture("Civilised")
        .with_career("Physician");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES).unwrap();
    session.advance_phase().unwrap();
    session.advance_phase().unwrap();

    // Commerce was never offered by culture or career
    assert!(matches!(
        session.allocate_bonus("Commerce", 15),
        Err(SessionError::Engine(EngineError::SkillNotAvailable(_)))
    ));
    session.choose_hobby("Commerce").unwrap();
    assert!(session.allocate_bonus("Commerce", 15).unwrap());

    // switching hobbies refunds the points and closes the old skill
    session.choose_hobby("Acrobatics").unwrap();
    assert_eq!(session.progress().bonus_remaining, 150);
    assert!(session.allocate_bonus("Commerce", 15).is_err());
}
