//! Characteristics for d100 percentile characters.
//!
//! The seven characteristics (STR, CON, DEX, POW, CHA, INT, SIZ) are the
//! fixed inputs to skill-formula evaluation and the derived tables. The
//! generation engine reads them and never mutates them.

use crate::dice::Roller;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    Strength,
    Constitution,
    Dexterity,
    Power,
    Charisma,
    Intelligence,
    Size,
}

impl Characteristic {
    /// The three-letter key used in skill formulas.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Characteristic::Strength => "STR",
            Characteristic::Constitution => "CON",
            Characteristic::Dexterity => "DEX",
            Characteristic::Power => "POW",
            Characteristic::Charisma => "CHA",
            Characteristic::Intelligence => "INT",
            Characteristic::Size => "SIZ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Characteristic::Strength => "Strength",
            Characteristic::Constitution => "Constitution",
            Characteristic::Dexterity => "Dexterity",
            Characteristic::Power => "Power",
            Characteristic::Charisma => "Charisma",
            Characteristic::Intelligence => "Intelligence",
            Characteristic::Size => "Size",
        }
    }

    /// Look up a characteristic by its formula key (`"STR"`, `"SIZ"`, ...).
    pub fn from_key(key: &str) -> Option<Characteristic> {
        Characteristic::all()
            .into_iter()
            .find(|c| c.abbreviation().eq_ignore_ascii_case(key))
    }

    pub fn all() -> [Characteristic; 7] {
        [
            Characteristic::Strength,
            Characteristic::Constitution,
            Characteristic::Dexterity,
            Characteristic::Power,
            Characteristic::Charisma,
            Characteristic::Intelligence,
            Characteristic::Size,
        ]
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Characteristic values container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristics {
    pub strength: u8,
    pub constitution: u8,
    pub dexterity: u8,
    pub power: u8,
    pub charisma: u8,
    pub intelligence: u8,
    pub size: u8,
}

impl Characteristics {
    /// Values in STR, CON, DEX, POW, CHA, INT, SIZ order.
    pub fn new(str: u8, con: u8, dex: u8, pow: u8, cha: u8, int: u8, siz: u8) -> Self {
        Self {
            strength: str,
            constitution: con,
            dexterity: dex,
            power: pow,
            charisma: cha,
            intelligence: int,
            size: siz,
        }
    }

    pub fn get(&self, characteristic: Characteristic) -> u8 {
        match characteristic {
            Characteristic::Strength => self.strength,
            Characteristic::Constitution => self.constitution,
            Characteristic::Dexterity => self.dexterity,
            Characteristic::Power => self.power,
            Characteristic::Charisma => self.charisma,
            Characteristic::Intelligence => self.intelligence,
            Characteristic::Size => self.size,
        }
    }

    pub fn set(&mut self, characteristic: Characteristic, value: u8) {
        match characteristic {
            Characteristic::Strength => self.strength = value,
            Characteristic::Constitution => self.constitution = value,
            Characteristic::Dexterity => self.dexterity = value,
            Characteristic::Power => self.power = value,
            Characteristic::Charisma => self.charisma = value,
            Characteristic::Intelligence => self.intelligence = value,
            Characteristic::Size => self.size = value,
        }
    }
}

impl Default for Characteristics {
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10, 10)
    }
}

/// Roll a fresh characteristic set.
///
/// STR, CON, DEX, POW and CHA are three d6 each; INT and SIZ are two d6
/// plus 6. Dice are drawn in that order, so a scripted roller needs
/// nineteen faces.
pub fn roll_characteristics(roller: &mut impl Roller) -> Characteristics {
    Characteristics {
        strength: roll_3d6(roller),
        constitution: roll_3d6(roller),
        dexterity: roll_3d6(roller),
        power: roll_3d6(roller),
        charisma: roll_3d6(roller),
        intelligence: roll_2d6_plus_6(roller),
        size: roll_2d6_plus_6(roller),
    }
}

fn roll_3d6(roller: &mut impl Roller) -> u8 {
    (0..3).map(|_| roller.roll(6) as u8).sum::<u8>()
}

fn roll_2d6_plus_6(roller: &mut impl Roller) -> u8 {
    roller.roll(6) as u8 + roller.roll(6) as u8 + 6
}
