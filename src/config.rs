//! Optional question settings.

use serde::Deserialize;

use crate::validation::{DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS};

/// Settings a question can be created with besides its title.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    /// Points awarded for the question, 1 to 100.
    pub points: u32,
    /// How many choice ids may be submitted in one selection.
    pub max_selections: usize,
}

impl QuestionConfig {
    pub fn points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }
}
