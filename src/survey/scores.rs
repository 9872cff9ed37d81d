//! Categorical label to numeric score mapping.
//!
//! DESIGN
//! ======
//! The built-in labels cover the two vocabularies seen in the survey export
//! ("Satisfied"/"Dissatisfied" for care, "Excellent".."Poor" for facility).
//! The facility vocabulary is provisional, so a deployment can replace the
//! whole table with a JSON object of `label -> score` loaded at startup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_LABELS: [(&str, i64); 7] = [
    ("Satisfied", 3),
    ("somewhat satisfied", 2),
    ("Dissatisfied", 1),
    ("Excellent", 3),
    ("Good", 2),
    ("Fair", 1),
    ("Poor", 0),
];

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("read score mapping: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse score mapping: {0}")]
    Json(#[from] serde_json::Error),
    #[error("score mapping is empty")]
    Empty,
}

/// Exact-match lookup from survey label to score.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ScoreMapping {
    labels: HashMap<String, i64>,
}

impl ScoreMapping {
    #[must_use]
    pub fn new(labels: HashMap<String, i64>) -> Self {
        Self { labels }
    }

    /// Load a mapping override from a JSON object file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON object of
    /// integer scores, or contains no labels.
    pub fn from_json_file(path: &Path) -> Result<Self, MappingError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// # Errors
    ///
    /// Returns an error if `raw` is not a non-empty JSON object of integer scores.
    pub fn from_json_str(raw: &str) -> Result<Self, MappingError> {
        let mapping: Self = serde_json::from_str(raw)?;
        if mapping.labels.is_empty() {
            return Err(MappingError::Empty);
        }
        Ok(mapping)
    }

    /// Score for `label`, if it is a known label.
    #[must_use]
    pub fn score(&self, label: &str) -> Option<i64> {
        self.labels.get(label).copied()
    }
}

impl Default for ScoreMapping {
    fn default() -> Self {
        Self::new(
            DEFAULT_LABELS
                .iter()
                .map(|(label, score)| ((*label).to_string(), *score))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "scores_test.rs"]
mod tests;
