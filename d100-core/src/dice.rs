//! Dice rolling for the d100 engine.
//!
//! Supports the `"<count>d<sides>"` notation used by the derived tables,
//! optionally scaled by a `"*<multiplier>"` suffix as in `"4d6*50"`. All
//! randomness flows through the [`Roller`] trait so tests can replay
//! fixed die faces.

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for dice notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Invalid dice notation: {0}")]
    InvalidNotation(String),
    #[error("Die size must be at least 1")]
    InvalidDieSize,
    #[error("No dice specified")]
    NoDice,
}

/// Source of individual die faces.
///
/// Implementations return a uniform value in `1..=sides`. Production code
/// uses [`RngRoller`]; tests use [`crate::testing::ScriptedRoller`].
pub trait Roller {
    fn roll(&mut self, sides: u32) -> u32;
}

/// Roller backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngRoller<R: Rng> {
    rng: R,
}

impl RngRoller<ThreadRng> {
    /// Roller over the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RngRoller<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RngRoller<R> {
    /// Roller over a specific RNG, for seeded runs.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides)
    }
}

/// A parsed dice expression such as `4d6` or `4d6*50`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceExpression {
    pub count: u32,
    pub sides: u32,
    pub multiplier: Option<f64>,
    /// The normalized notation this was parsed from.
    pub notation: String,
}

impl DiceExpression {
    /// Parse `"<count>d<sides>"` with an optional `"*<multiplier>"` suffix.
    ///
    /// The multiplier may be fractional (`"4d6*2.5"`). Anything outside
    /// that shape is an error; there is no `+N` modifier in this system.
    pub fn parse(notation: &str) -> Result<Self, DiceError> {
        let notation = notation.trim().to_lowercase();
        if notation.is_empty() {
            return Err(DiceError::NoDice);
        }

        let (dice_part, multiplier) = match notation.split_once('*') {
            Some((dice, mult)) => {
                let multiplier: f64 = mult
                    .trim()
                    .parse()
                    .map_err(|_| DiceError::InvalidNotation(notation.clone()))?;
                (dice.trim(), Some(multiplier))
            }
            None => (notation.as_str(), None),
        };

        let (count_str, sides_str) = dice_part
            .split_once('d')
            .ok_or_else(|| DiceError::InvalidNotation(notation.clone()))?;

        let count: u32 = count_str
            .trim()
            .parse()
            .map_err(|_| DiceError::InvalidNotation(notation.clone()))?;
        let sides: u32 = sides_str
            .trim()
            .parse()
            .map_err(|_| DiceError::InvalidNotation(notation.clone()))?;

        if count == 0 {
            return Err(DiceError::NoDice);
        }
        if sides == 0 {
            return Err(DiceError::InvalidDieSize);
        }

        Ok(DiceExpression {
            count,
            sides,
            multiplier,
            notation,
        })
    }

    /// Roll the expression: sum `count` faces, then apply the multiplier
    /// (if any) and round to the nearest whole number.
    pub fn roll(&self, roller: &mut impl Roller) -> DiceRoll {
        let rolls: Vec<u32> = (0..self.count).map(|_| roller.roll(self.sides)).collect();
        let sum: u32 = rolls.iter().sum();
        let total = match self.multiplier {
            Some(m) => (sum as f64 * m).round() as i32,
            None => sum as i32,
        };
        DiceRoll { rolls, total }
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiceExpression::parse(s)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

/// Result of rolling a [`DiceExpression`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Individual die faces in roll order.
    pub rolls: Vec<u32>,
    /// Sum of faces, scaled by the multiplier when one is present.
    pub total: i32,
}

/// Parse and roll in one step.
pub fn roll(notation: &str, roller: &mut impl Roller) -> Result<DiceRoll, DiceError> {
    Ok(DiceExpression::parse(notation)?.roll(roller))
}
