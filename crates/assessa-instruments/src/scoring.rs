use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One selectable answer within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOption {
    pub value: u32,
    pub label: String,
    pub description: String,
}

/// A scored domain within an instrument, shown as one wizard step.
///
/// Options are kept in display order (most independent first). Quick notes
/// are keyed by option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub section: Option<String>,
    pub options: Vec<ScoreOption>,
    pub quick_notes: BTreeMap<u32, Vec<String>>,
}

impl Category {
    pub fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            section: None,
            options: Vec::new(),
            quick_notes: BTreeMap::new(),
        }
    }

    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn option(mut self, value: u32, label: &str, description: &str) -> Self {
        self.options.push(ScoreOption {
            value,
            label: label.to_string(),
            description: description.to_string(),
        });
        self
    }

    pub fn quick_notes(mut self, value: u32, notes: &[&str]) -> Self {
        self.quick_notes
            .insert(value, notes.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn option_for(&self, value: u32) -> Option<&ScoreOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Suggested notes for a selected value; empty when none are defined.
    pub fn notes_for(&self, value: u32) -> &[String] {
        self.quick_notes
            .get(&value)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Points awarded for a recorded answer. Values no option offers score 0.
    pub fn score(&self, answer: Option<u32>) -> u32 {
        answer
            .and_then(|v| self.option_for(v))
            .map_or(0, |o| o.value)
    }

    /// Highest score any option in this category awards.
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// A rung of an instrument's interpretation ladder. A total matches the
/// first band (highest `min_score` first) whose threshold it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub min_score: u32,
    pub label: String,
    pub description: Option<String>,
}

impl ScoreBand {
    pub fn new(min_score: u32, label: &str) -> Self {
        Self {
            min_score,
            label: label.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// A named subscore summing every category in the listed sections
/// (e.g. the FIM motor score).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Composite {
    pub id: String,
    pub name: String,
    pub sections: Vec<String>,
}

impl Composite {
    pub fn new(id: &str, name: &str, sections: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A recorded answer that does not fit the instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub category_id: String,
    pub value: u32,
    pub message: String,
}
