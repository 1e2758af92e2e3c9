use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::identification::Identification;

/// Everything a clinician has entered so far in one assessment.
///
/// Answers and notes are keyed by category id and are independent of each
/// other: changing an answer never touches the note for that category.
/// Every update consumes the record and returns the new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRecord {
    pub identification: Identification,
    /// Category id → selected option score.
    #[serde(default)]
    pub answers: BTreeMap<String, u32>,
    /// Category id → free-text clinical note.
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
    /// Notes about the assessment as a whole, shown on the review step.
    #[serde(default)]
    pub additional_notes: String,
}

impl ResponseRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self, category_id: &str) -> Option<u32> {
        self.answers.get(category_id).copied()
    }

    pub fn is_answered(&self, category_id: &str) -> bool {
        self.answers.contains_key(category_id)
    }

    /// The note for a category, or `""` if none was written.
    pub fn note(&self, category_id: &str) -> &str {
        self.notes.get(category_id).map(String::as_str).unwrap_or("")
    }

    pub fn with_identification(mut self, identification: Identification) -> Self {
        self.identification = identification;
        self
    }

    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.identification.patient_name = name.into();
        self
    }

    pub fn with_patient_id(mut self, id: impl Into<String>) -> Self {
        self.identification.patient_id = id.into();
        self
    }

    pub fn with_assessment_date(mut self, date: impl Into<String>) -> Self {
        self.identification.assessment_date = date.into();
        self
    }

    /// Overwrite the selected score for a category.
    pub fn with_answer(mut self, category_id: impl Into<String>, score: u32) -> Self {
        self.answers.insert(category_id.into(), score);
        self
    }

    /// Overwrite a category's note verbatim.
    pub fn with_note(mut self, category_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.notes.insert(category_id.into(), text.into());
        self
    }

    /// Append a note fragment to a category's note.
    ///
    /// The fragment is terminated with a period if it lacks one, then joined
    /// to any existing content with a single space. Appending the same
    /// fragment twice stores it twice.
    pub fn with_appended_note(mut self, category_id: impl Into<String>, fragment: &str) -> Self {
        let sentence = if fragment.ends_with('.') {
            fragment.to_string()
        } else {
            format!("{fragment}.")
        };

        let note = self.notes.entry(category_id.into()).or_default();
        if note.is_empty() {
            *note = sentence;
        } else {
            note.push(' ');
            note.push_str(&sentence);
        }
        self
    }

    /// Reset a category's note to the empty string.
    pub fn with_cleared_note(self, category_id: impl Into<String>) -> Self {
        self.with_note(category_id, String::new())
    }

    pub fn with_additional_notes(mut self, text: impl Into<String>) -> Self {
        self.additional_notes = text.into();
        self
    }
}
