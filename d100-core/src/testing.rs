//! Testing utilities for the generation engine.
//!
//! [`ScriptedRoller`] replays a fixed sequence of die faces so any
//! dice-driven behavior is exactly reproducible, and [`sample_session`]
//! builds a ready-to-allocate session over the built-in catalog.

use crate::characteristics::Characteristics;
use crate::data::BUILTIN_RULES;
use crate::dice::Roller;
use crate::session::{GenerationSession, SessionConfig};
use std::collections::VecDeque;

/// A die roller that replays a scripted sequence of faces.
///
/// Running out of faces or scripting a face the requested die cannot
/// show are test-authoring mistakes, and both panic loudly.
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    faces: VecDeque<u32>,
}

impl ScriptedRoller {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        let face = self
            .faces
            .pop_front()
            .unwrap_or_else(|| panic!("scripted roller ran out of faces (d{sides} requested)"));
        assert!(
            (1..=sides).contains(&face),
            "scripted face {face} is out of range for a d{sides}"
        );
        face
    }
}

/// A session over the built-in rules with fixed characteristics, age 25,
/// a Civilised culture and a Merchant career, still in the cultural
/// phase.
pub fn sample_session() -> GenerationSession {
    let config = SessionConfig::new("Sample")
        .with_age(25)
        .with_characteristics(Characteristics::new(11, 12, 13, 10, 9, 14, 12))
        .with_culture("Civilised")
        .with_career("Merchant");
    GenerationSession::new(config, &BUILTIN_RULES)
        .expect("built-in rules include the sample culture and career")
}
