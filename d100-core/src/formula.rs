//! Attribute-formula evaluation.
//!
//! Skill base percentages come from expressions like `"STR+DEX"` or
//! `"INTx2"`, evaluated strictly left to right with no operator
//! precedence: `"STR+DEXx2"` means `(STR + DEX) x 2`. Evaluation is
//! total. Unknown keys and malformed terms resolve to 0 so any authored
//! rule data can be processed; [`crate::data::RuleData::validate`]
//! surfaces the typos this policy would otherwise hide.

use crate::characteristics::{Characteristic, Characteristics};

#[derive(Clone, Copy)]
enum Op {
    Add,
    Multiply,
}

impl Op {
    fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Op::Add => lhs + rhs,
            Op::Multiply => lhs * rhs,
        }
    }
}

/// Evaluate a skill formula against a characteristic set.
pub fn evaluate(expression: &str, characteristics: &Characteristics) -> i32 {
    scan(expression)
        .into_iter()
        .fold(0, |total, (op, term)| {
            op.apply(total, term_value(&term, characteristics))
        })
}

/// Split into (operator, term) pairs; the first term carries `Add`.
///
/// An `'x'` is the multiply operator only where the letters before it
/// cannot grow into a characteristic key, so lowercase `"dex"` stays
/// one term.
fn scan(expression: &str) -> Vec<(Op, String)> {
    let mut parts = Vec::new();
    let mut op = Op::Add;
    let mut term = String::new();
    for ch in expression.chars() {
        match ch {
            '+' => {
                parts.push((op, std::mem::take(&mut term)));
                op = Op::Add;
            }
            'x' if !extends_into_key(&term) => {
                parts.push((op, std::mem::take(&mut term)));
                op = Op::Multiply;
            }
            _ => term.push(ch),
        }
    }
    parts.push((op, term));
    parts
}

/// Whether appending an `'x'` keeps the term a prefix of some key.
fn extends_into_key(term: &str) -> bool {
    let term = term.trim_start();
    Characteristic::all().into_iter().any(|c| {
        let key = c.abbreviation();
        key.len() > term.len()
            && key[..term.len()].eq_ignore_ascii_case(term)
            && key.as_bytes()[term.len()].eq_ignore_ascii_case(&b'x')
    })
}

fn term_value(term: &str, characteristics: &Characteristics) -> i32 {
    let term = term.trim();
    if let Some(c) = Characteristic::from_key(term) {
        return characteristics.get(c) as i32;
    }
    term.parse::<i32>().ok().filter(|v| *v >= 0).unwrap_or(0)
}

/// Terms of `expression` that are neither characteristic keys nor
/// non-negative integer literals. Empty output means the formula is
/// well formed; anything else is an authoring mistake that
/// [`evaluate`] will silently score as 0.
pub fn unknown_terms(expression: &str) -> Vec<String> {
    scan(expression)
        .into_iter()
        .map(|(_, term)| term.trim().to_string())
        .filter(|term| {
            Characteristic::from_key(term).is_none()
                && term.parse::<i32>().ok().filter(|v| *v >= 0).is_none()
        })
        .collect()
}
