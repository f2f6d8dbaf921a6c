//! Rule data consumed by the generation engine.
//!
//! Cultures, careers, the skill catalog, equipment prices and cult names
//! are opaque read-only records: the engine enforces membership and
//! arithmetic over them, never game-rule legality. Hosts load their own
//! records via [`RuleData::from_json`]; a built-in catalog backs the
//! tests and the demo.

use crate::formula;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ============================================================================
// Records
// ============================================================================

/// A skill's name and base-formula expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDef {
    pub name: String,
    pub base: String,
}

impl SkillDef {
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
        }
    }
}

/// The full skill catalog. The base table is built from the standard and
/// professional groups; magic-tradition skills are carried as data for
/// hosts that run a tradition step, and only reach this engine as hobby
/// candidates. Combat styles are professional entries like any other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCatalog {
    #[serde(default)]
    pub standard: Vec<SkillDef>,
    #[serde(default)]
    pub professional: Vec<SkillDef>,
    #[serde(default)]
    pub magic: Vec<SkillDef>,
}

impl SkillCatalog {
    fn all(&self) -> impl Iterator<Item = &SkillDef> + '_ {
        self.standard
            .iter()
            .chain(&self.professional)
            .chain(&self.magic)
    }

    /// Every skill name across all groups.
    pub fn names(&self) -> Vec<String> {
        self.all().map(|def| def.name.clone()).collect()
    }

    /// Find a skill definition by name in any group.
    pub fn find(&self, name: &str) -> Option<&SkillDef> {
        self.all().find(|def| def.name == name)
    }
}

/// One row of a culture's social-class table: an inclusive d100 range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialClassRow {
    pub min: u32,
    pub max: u32,
    pub name: String,
}

/// A culture record: the skill lists the cultural phase draws from plus
/// the background tables rolled at review time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
    #[serde(default)]
    pub standard_skills: Vec<String>,
    #[serde(default)]
    pub professional_skills: Vec<String>,
    #[serde(default)]
    pub combat_styles: Vec<String>,
    #[serde(default)]
    pub social_classes: Vec<String>,
    #[serde(default)]
    pub social_class_table: Vec<SocialClassRow>,
    /// Multiplies the starting-money dice; silver pieces per rolled point.
    #[serde(default = "default_money_multiplier")]
    pub money_multiplier: f64,
    /// Per-social-class scaling of starting money; absent classes scale by 1.
    #[serde(default)]
    pub social_class_modifiers: HashMap<String, f64>,
}

fn default_money_multiplier() -> f64 {
    1.0
}

/// A career record: the skill lists the career phase draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub name: String,
    #[serde(default)]
    pub standard_skills: Vec<String>,
    #[serde(default)]
    pub professional_skills: Vec<String>,
}

/// An equipment price-list entry (cost in silver pieces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDef {
    pub name: String,
    pub cost: f64,
}

impl EquipmentDef {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// The complete rule-data bundle a generation session works from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleData {
    #[serde(default)]
    pub cultures: Vec<Culture>,
    #[serde(default)]
    pub careers: Vec<Career>,
    #[serde(default)]
    pub skills: SkillCatalog,
    #[serde(default)]
    pub equipment: Vec<EquipmentDef>,
    #[serde(default)]
    pub cults: Vec<String>,
}

impl RuleData {
    /// Load rule data from its JSON representation.
    pub fn from_json(json: &str) -> Result<RuleData, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn culture(&self, name: &str) -> Option<&Culture> {
        self.cultures.iter().find(|c| c.name == name)
    }

    pub fn career(&self, name: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.name == name)
    }

    /// Authoring-time consistency check.
    ///
    /// Reports duplicate skill definitions, formulas with unrecognized
    /// terms, culture/career lists naming skills missing from the
    /// catalog, and social-class tables with inverted, overlapping or
    /// gapped rows. The engine tolerates all of these at run time; this
    /// is how authors find them first.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for def in self.skills.all() {
            if !seen.insert(def.name.as_str()) {
                problems.push(format!("skill '{}' is defined more than once", def.name));
            }
            for term in formula::unknown_terms(&def.base) {
                problems.push(format!(
                    "skill '{}': formula '{}' has unrecognized term '{}'",
                    def.name, def.base, term
                ));
            }
        }

        let standard: HashSet<&str> =
            self.skills.standard.iter().map(|d| d.name.as_str()).collect();
        let professional: HashSet<&str> =
            self.skills.professional.iter().map(|d| d.name.as_str()).collect();

        for culture in &self.cultures {
            check_membership(
                &mut problems,
                &format!("culture '{}'", culture.name),
                "standard",
                &culture.standard_skills,
                &standard,
            );
            check_membership(
                &mut problems,
                &format!("culture '{}'", culture.name),
                "professional",
                &culture.professional_skills,
                &professional,
            );
            check_membership(
                &mut problems,
                &format!("culture '{}'", culture.name),
                "combat style",
                &culture.combat_styles,
                &professional,
            );
            validate_social_table(&mut problems, culture);
        }
        for career in &self.careers {
            check_membership(
                &mut problems,
                &format!("career '{}'", career.name),
                "standard",
                &career.standard_skills,
                &standard,
            );
            check_membership(
                &mut problems,
                &format!("career '{}'", career.name),
                "professional",
                &career.professional_skills,
                &professional,
            );
        }

        problems
    }
}

fn check_membership(
    problems: &mut Vec<String>,
    owner: &str,
    list: &str,
    names: &[String],
    catalog: &HashSet<&str>,
) {
    for name in names {
        if !catalog.contains(name.as_str()) {
            problems.push(format!("{owner}: {list} skill '{name}' is not in the catalog"));
        }
    }
}

fn validate_social_table(problems: &mut Vec<String>, culture: &Culture) {
    let mut rows: Vec<&SocialClassRow> = culture.social_class_table.iter().collect();
    rows.sort_by_key(|row| row.min);
    let mut next = 1;
    for row in rows {
        if row.min > row.max {
            problems.push(format!(
                "culture '{}': social-class row '{}' has min {} above max {}",
                culture.name, row.name, row.min, row.max
            ));
            continue;
        }
        if row.min < next {
            problems.push(format!(
                "culture '{}': social-class rows overlap at {}",
                culture.name, row.min
            ));
        } else if row.min > next {
            problems.push(format!(
                "culture '{}': social-class table has a gap at {}",
                culture.name, next
            ));
        }
        next = next.max(row.max.saturating_add(1));
        if !culture.social_classes.iter().any(|c| c == &row.name) {
            problems.push(format!(
                "culture '{}': social class '{}' appears in the table but not the class list",
                culture.name, row.name
            ));
        }
    }
    if !culture.social_class_table.is_empty() && next <= 100 {
        problems.push(format!(
            "culture '{}': social-class table stops at {}",
            culture.name,
            next - 1
        ));
    }
    for class in culture.social_class_modifiers.keys() {
        if !culture.social_classes.iter().any(|c| c == class) {
            problems.push(format!(
                "culture '{}': money modifier for unknown social class '{}'",
                culture.name, class
            ));
        }
    }
}

// ============================================================================
// Built-in catalog
// ============================================================================

lazy_static::lazy_static! {
    /// Built-in rule data: four cultures, four careers and the core skill
    /// catalog. Tests and the demo run against this; hosts with their own
    /// material load it through [`RuleData::from_json`] instead.
    pub static ref BUILTIN_RULES: RuleData = builtin_rules();
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn modifiers(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

fn row(min: u32, max: u32, name: &str) -> SocialClassRow {
    SocialClassRow {
        min,
        max,
        name: name.to_string(),
    }
}

fn builtin_rules() -> RuleData {
    RuleData {
        cultures: vec![barbarian(), civilised(), nomadic(), primitive()],
        careers: vec![warrior(), merchant(), scout(), physician()],
        skills: builtin_skills(),
        equipment: builtin_equipment(),
        cults: strings(&[
            "Earth Mother",
            "Storm Brothers",
            "Sun Dome Temple",
            "River Lords",
            "Cult of the Hunter",
        ]),
    }
}

fn builtin_skills() -> SkillCatalog {
    SkillCatalog {
        standard: vec![
            SkillDef::new("Athletics", "STR+DEX"),
            SkillDef::new("Boating", "STR+CON"),
            SkillDef::new("Brawn", "STR+SIZ"),
            SkillDef::new("Conceal", "DEX+POW"),
            SkillDef::new("Customs", "INTx2"),
            SkillDef::new("Dance", "DEX+CHA"),
            SkillDef::new("Deceit", "INT+CHA"),
            SkillDef::new("Drive", "DEX+POW"),
            SkillDef::new("Endurance", "CONx2"),
            SkillDef::new("Evade", "DEXx2"),
            SkillDef::new("First Aid", "INT+DEX"),
            SkillDef::new("Influence", "CHAx2"),
            SkillDef::new("Insight", "INT+POW"),
            SkillDef::new("Locale", "INTx2"),
            SkillDef::new("Native Tongue", "INT+CHA"),
            SkillDef::new("Perception", "INT+POW"),
            SkillDef::new("Ride", "DEX+POW"),
            SkillDef::new("Sing", "CHA+POW"),
            SkillDef::new("Stealth", "DEX+INT"),
            SkillDef::new("Swim", "STR+CON"),
            SkillDef::new("Unarmed", "STR+DEX"),
            SkillDef::new("Willpower", "POWx2"),
        ],
        professional: vec![
            SkillDef::new("Acrobatics", "STR+DEX"),
            SkillDef::new("Commerce", "INT+CHA"),
            SkillDef::new("Courtesy", "INT+CHA"),
            SkillDef::new("Craft", "DEX+INT"),
            SkillDef::new("Folk Magic", "POW+CHA"),
            SkillDef::new("Healing", "INT+POW"),
            SkillDef::new("Lore", "INTx2"),
            SkillDef::new("Musicianship", "DEX+CHA"),
            SkillDef::new("Navigation", "INT+POW"),
            SkillDef::new("Oratory", "POW+CHA"),
            SkillDef::new("Seamanship", "INT+CON"),
            SkillDef::new("Streetwise", "POW+CHA"),
            SkillDef::new("Survival", "CON+POW"),
            SkillDef::new("Track", "INT+CON"),
            // combat styles
            SkillDef::new("Axe and Shield", "STR+DEX"),
            SkillDef::new("Bow and Knife", "STR+DEX"),
            SkillDef::new("Sling and Staff", "STR+DEX"),
            SkillDef::new("Spear and Shield", "STR+DEX"),
            SkillDef::new("Sword and Shield", "STR+DEX"),
        ],
        magic: vec![
            SkillDef::new("Devotion", "POW+CHA"),
            SkillDef::new("Invocation", "INTx2"),
            SkillDef::new("Trance", "CON+POW"),
        ],
    }
}

fn barbarian() -> Culture {
    Culture {
        name: "Barbarian".to_string(),
        standard_skills: strings(&[
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
        ]),
        professional_skills: strings(&[
            "Craft",
            "Healing",
            "Lore",
            "Musicianship",
            "Navigation",
            "Survival",
            "Track",
        ]),
        combat_styles: strings(&["Axe and Shield", "Spear and Shield", "Bow and Knife"]),
        social_classes: strings(&["Outcast", "Freeman", "Noble"]),
        social_class_table: vec![
            row(1, 15, "Outcast"),
            row(16, 90, "Freeman"),
            row(91, 100, "Noble"),
        ],
        money_multiplier: 50.0,
        social_class_modifiers: modifiers(&[("Outcast", 0.5), ("Freeman", 1.0), ("Noble", 3.0)]),
    }
}

fn civilised() -> Culture {
    Culture {
        name: "Civilised".to_string(),
        standard_skills: strings(&[
            "Conceal",
            "Customs",
            "Deceit",
            "Drive",
            "Influence",
            "Insight",
            "Locale",
            "Native Tongue",
            "Willpower",
        ]),
        professional_skills: strings(&[
            "Commerce",
            "Courtesy",
            "Craft",
            "Lore",
            "Musicianship",
            "Streetwise",
        ]),
        combat_styles: strings(&["Sword and Shield", "Spear and Shield", "Bow and Knife"]),
        social_classes: strings(&["Outcast", "Commoner", "Merchant", "Aristocrat"]),
        social_class_table: vec![
            row(1, 5, "Outcast"),
            row(6, 60, "Commoner"),
            row(61, 95, "Merchant"),
            row(96, 100, "Aristocrat"),
        ],
        money_multiplier: 75.0,
        social_class_modifiers: modifiers(&[
            ("Outcast", 0.25),
            ("Commoner", 1.0),
            ("Merchant", 2.0),
            ("Aristocrat", 5.0),
        ]),
    }
}

fn nomadic() -> Culture {
    Culture {
        name: "Nomadic".to_string(),
        standard_skills: strings(&[
            "Customs",
            "Endurance",
            "First Aid",
            "Locale",
            "Native Tongue",
            "Perception",
            "Ride",
            "Stealth",
        ]),
        professional_skills: strings(&[
            "Craft",
            "Healing",
            "Lore",
            "Navigation",
            "Survival",
            "Track",
        ]),
        combat_styles: strings(&["Bow and Knife", "Spear and Shield", "Sling and Staff"]),
        social_classes: strings(&["Outcast", "Herder", "Khan"]),
        social_class_table: vec![
            row(1, 10, "Outcast"),
            row(11, 85, "Herder"),
            row(86, 100, "Khan"),
        ],
        money_multiplier: 25.0,
        social_class_modifiers: modifiers(&[("Outcast", 0.5), ("Herder", 1.0), ("Khan", 2.5)]),
    }
}

fn primitive() -> Culture {
    Culture {
        name: "Primitive".to_string(),
        standard_skills: strings(&[
            "Athletics",
            "Brawn",
            "Customs",
            "Endurance",
            "Evade",
            "Locale",
            "Native Tongue",
            "Perception",
            "Stealth",
        ]),
        professional_skills: strings(&["Craft", "Healing", "Lore", "Survival", "Track"]),
        combat_styles: strings(&["Spear and Shield", "Sling and Staff", "Bow and Knife"]),
        social_classes: strings(&["Tribesman", "Elder"]),
        social_class_table: vec![row(1, 80, "Tribesman"), row(81, 100, "Elder")],
        money_multiplier: 10.0,
        social_class_modifiers: modifiers(&[("Tribesman", 1.0), ("Elder", 1.5)]),
    }
}

fn warrior() -> Career {
    Career {
        name: "Warrior".to_string(),
        standard_skills: strings(&["Athletics", "Brawn", "Endurance", "Evade", "Unarmed"]),
        professional_skills: strings(&["Craft", "Lore", "Oratory", "Survival"]),
    }
}

fn merchant() -> Career {
    Career {
        name: "Merchant".to_string(),
        standard_skills: strings(&[
            "Boating",
            "Deceit",
            "Drive",
            "Influence",
            "Insight",
            "Locale",
            "Ride",
        ]),
        professional_skills: strings(&[
            "Commerce",
            "Courtesy",
            "Navigation",
            "Seamanship",
            "Streetwise",
        ]),
    }
}

fn scout() -> Career {
    Career {
        name: "Scout".to_string(),
        standard_skills: strings(&[
            "Athletics",
            "Endurance",
            "First Aid",
            "Perception",
            "Ride",
            "Stealth",
            "Swim",
        ]),
        professional_skills: strings(&["Healing", "Lore", "Navigation", "Survival", "Track"]),
    }
}

fn physician() -> Career {
    Career {
        name: "Physician".to_string(),
        standard_skills: strings(&[
            "First Aid",
            "Influence",
            "Insight",
            "Locale",
            "Sing",
            "Willpower",
        ]),
        professional_skills: strings(&["Craft", "Healing", "Lore", "Streetwise"]),
    }
}

fn builtin_equipment() -> Vec<EquipmentDef> {
    vec![
        EquipmentDef::new("Broadsword", 175.0),
        EquipmentDef::new("Battleaxe", 100.0),
        EquipmentDef::new("Spear", 20.0),
        EquipmentDef::new("Dagger", 30.0),
        EquipmentDef::new("Shortbow", 75.0),
        EquipmentDef::new("Arrows (20)", 4.0),
        EquipmentDef::new("Sling", 5.0),
        EquipmentDef::new("Heater Shield", 150.0),
        EquipmentDef::new("Leather Hauberk", 80.0),
        EquipmentDef::new("Chain Shirt", 320.0),
        EquipmentDef::new("Healer's Kit", 25.0),
        EquipmentDef::new("Rations (1 week)", 15.0),
        EquipmentDef::new("Rope (10m)", 10.0),
        EquipmentDef::new("Torch", 0.5),
        EquipmentDef::new("Riding Horse", 500.0),
    ]
}
