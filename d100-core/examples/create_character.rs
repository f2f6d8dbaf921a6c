//! Generate a complete character at the terminal.
//!
//! Run with: cargo run --example create_character

use d100_core::{
    roll_characteristics, GenerationSession, RngRoller, SessionConfig, SessionError, BUILTIN_RULES,
};

fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt::init();

    let mut roller = RngRoller::new();

    for problem in BUILTIN_RULES.validate() {
        eprintln!("rule data: {problem}");
    }

    let characteristics = roll_characteristics(&mut roller);
    let config = SessionConfig::new("Varka")
        .with_age(28)
        .with_characteristics(characteristics.clone())
        .with_culture("Barbarian")
        .with_career("Scout");
    let mut session = GenerationSession::new(config, &BUILTIN_RULES)?;

    println!("=== {} ===", session.name());
    println!(
        "STR {} CON {} DEX {} POW {} CHA {} INT {} SIZ {}",
        characteristics.strength,
        characteristics.constitution,
        characteristics.dexterity,
        characteristics.power,
        characteristics.charisma,
        characteristics.intelligence,
        characteristics.size,
    );
    println!(
        "{} {} aged {}",
        session.culture().name,
        session.career().name,
        session.age()
    );

    // Cultural phase: favourite standards, two professions, a style.
    session.allocate_cultural_standard("Athletics", 15)?;
    session.allocate_cultural_standard("Ride", 15)?;
    session.allocate_cultural_standard("Perception", 10)?;
    session.allocate_cultural_standard("Endurance", 10)?;
    session.allocate_cultural_standard("Locale", 10)?;
    session.choose_combat_style("Bow and Knife")?;
    session.allocate_combat_style(15)?;
    session.select_cultural_professional("Survival")?;
    session.allocate_cultural_professional("Survival", 15)?;
    session.select_cultural_professional("Track")?;
    session.allocate_cultural_professional("Track", 10)?;
    session.advance_phase()?;

    // Career phase.
    session.allocate_career_standard("Stealth", 15)?;
    session.allocate_career_standard("First Aid", 15)?;
    session.allocate_career_standard("Swim", 10)?;
    session.allocate_career_standard("Athletics", 15)?;
    session.select_career_professional("Navigation")?;
    session.allocate_career_professional("Navigation", 15)?;
    session.select_career_professional("Healing")?;
    session.allocate_career_professional("Healing", 15)?;
    session.advance_phase()?;

    // Bonus phase: pick a hobby, then empty the pool.
    session.choose_hobby("Folk Magic")?;
    let cap = session.engine().bonus_pool().per_skill_max();
    session.allocate_bonus("Folk Magic", cap)?;
    for skill in session.engine().bonus_eligible() {
        let remaining = session.progress().bonus_remaining;
        if remaining == 0 {
            break;
        }
        session.allocate_bonus(&skill, remaining.min(cap))?;
    }
    session.advance_phase()?;

    // Background.
    let class = session.roll_social_class(&mut roller).clone();
    println!(
        "Social class: {} (rolled {})",
        class.class_name.as_deref().unwrap_or("unmatched"),
        class.roll
    );
    let money = session.roll_starting_money(&mut roller).clone();
    println!("Starting silver: {} {:?}", money.silver, money.rolls);

    session.set_cult("Cult of the Hunter")?;
    session.set_equipment_quantity("Shortbow", 1);
    session.set_equipment_quantity("Arrows (20)", 2);
    session.set_equipment_quantity("Dagger", 1);
    session.set_equipment_quantity("Rations (1 week)", 2);
    let budget = session.budget();
    println!(
        "Equipment: {:.1} sp spent, {:.1} sp remaining",
        budget.spent, budget.remaining
    );

    println!("Hit points: {}", session.hit_points());
    println!("--- Skills ---");
    if let Some(sheet) = session.final_sheet() {
        for (skill, value) in sheet.sorted() {
            println!("{skill:<20} {value:>3}%");
        }
    }

    Ok(())
}
