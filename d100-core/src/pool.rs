//! Point pools for the allocation phases.
//!
//! Every phase spends from an [`AllocationPool`]: a capacity-bounded
//! budget of points spread across named skills, with a per-skill cap.
//! The bonus phase layers a minimum-spend rule on top, and its size
//! comes from the [`AgeBonus`] bracket table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bonus-phase snap threshold: requested values of 1 to 4 round to 0.
pub const BONUS_MINIMUM_SPEND: i32 = 5;

/// A capacity-bounded budget of skill points spent across named skills.
///
/// All spending goes through [`AllocationPool::try_increment`], which
/// preserves `0 <= spent <= capacity` and keeps every allocation within
/// `0..=per_skill_max`. `spent` is always the sum of the recorded
/// allocations.
#[derive(Debug, Clone)]
pub struct AllocationPool {
    capacity: i32,
    spent: i32,
    per_skill_max: i32,
    minimum_spend: i32,
    allocations: HashMap<String, i32>,
}

impl AllocationPool {
    pub fn new(capacity: i32, per_skill_max: i32) -> Self {
        Self {
            capacity: capacity.max(0),
            spent: 0,
            per_skill_max: per_skill_max.max(0),
            minimum_spend: 0,
            allocations: HashMap::new(),
        }
    }

    /// Snap requests below `minimum` down to zero before clamping. The
    /// bonus phase uses this so tiny allocations neither stick nor
    /// consume points.
    pub fn with_minimum_spend(mut self, minimum: i32) -> Self {
        self.minimum_spend = minimum.max(0);
        self
    }

    /// Request that `skill`'s allocation become `requested`.
    ///
    /// The request is snapped (minimum-spend pools only), clamped into
    /// `0..=per_skill_max`, and the delta against the current allocation
    /// committed only when it fits the remaining capacity. Returns false
    /// and leaves the pool untouched when it does not. Lowering an
    /// allocation always fits.
    pub fn try_increment(&mut self, skill: &str, requested: i32) -> bool {
        let snapped = if requested > 0 && requested < self.minimum_spend {
            0
        } else {
            requested
        };
        let clamped = snapped.clamp(0, self.per_skill_max);
        let delta = clamped - self.allocation(skill);
        if delta > self.remaining() {
            return false;
        }
        if clamped == 0 {
            self.allocations.remove(skill);
        } else {
            self.allocations.insert(skill.to_string(), clamped);
        }
        self.spent += delta;
        true
    }

    /// Remove a skill's allocation, returning its points to the pool.
    /// Returns the refunded amount, 0 when nothing was allocated.
    pub fn refund(&mut self, skill: &str) -> i32 {
        match self.allocations.remove(skill) {
            Some(value) => {
                self.spent -= value;
                value
            }
            None => 0,
        }
    }

    /// Points currently allocated to a skill (0 when unallocated).
    pub fn allocation(&self, skill: &str) -> i32 {
        self.allocations.get(skill).copied().unwrap_or(0)
    }

    /// Committed (skill, value) allocations, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.allocations
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn remaining(&self) -> i32 {
        self.capacity - self.spent
    }

    pub fn spent(&self) -> i32 {
        self.spent
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn per_skill_max(&self) -> i32 {
        self.per_skill_max
    }

    /// True when every point has been spent.
    pub fn fully_spent(&self) -> bool {
        self.remaining() == 0
    }
}

/// Bonus skill points granted by age, with the per-skill increment cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBonus {
    pub pool: i32,
    pub per_skill_max: i32,
}

/// Age brackets in ascending order: (inclusive upper bound, pool, cap).
const AGE_BRACKETS: [(u32, i32, i32); 4] =
    [(16, 100, 10), (27, 150, 15), (43, 200, 20), (64, 250, 25)];

/// Pool and cap for ages above every bracket.
const OLDEST: AgeBonus = AgeBonus {
    pool: 300,
    per_skill_max: 30,
};

impl AgeBonus {
    /// Resolve the bonus pool for a character's age. The first bracket
    /// whose bound the age does not exceed wins; ages beyond the table
    /// use the open-ended last row.
    pub fn for_age(age: u32) -> AgeBonus {
        for (limit, pool, per_skill_max) in AGE_BRACKETS {
            if age <= limit {
                return AgeBonus { pool, per_skill_max };
            }
        }
        OLDEST
    }
}
