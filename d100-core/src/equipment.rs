//! Equipment purchase arithmetic.
//!
//! Review screens edit a name-to-quantity ledger; this module prices it
//! against the rule data's equipment list. Export relies on
//! `remaining = starting silver - spent`.

use crate::data::EquipmentDef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running purchase totals in silver pieces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub spent: f64,
    pub remaining: f64,
}

/// Sum cost times quantity over the ledger against the price list.
///
/// Quantities for names missing from the price list cost nothing; they
/// are authoring errors and get flagged. Overspending is not prevented
/// here, the summary simply goes negative for review to display.
pub fn equipment_budget(
    prices: &[EquipmentDef],
    quantities: &HashMap<String, u32>,
    starting_silver: i32,
) -> BudgetSummary {
    let mut spent = 0.0;
    for (name, &quantity) in quantities {
        if quantity == 0 {
            continue;
        }
        match prices.iter().find(|item| item.name == *name) {
            Some(item) => spent += item.cost * f64::from(quantity),
            None => {
                tracing::warn!(item = %name, "quantity set for an item with no price entry")
            }
        }
    }
    BudgetSummary {
        spent,
        remaining: f64::from(starting_silver) - spent,
    }
}
