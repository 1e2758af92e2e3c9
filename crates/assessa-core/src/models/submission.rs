use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::identification::Identification;

/// Subtotal for a group of categories (a FIM section, or a composite such
/// as the FIM motor score).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionScore {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
}

/// One category's outcome as shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemResult {
    pub category_id: String,
    pub title: String,
    pub section: Option<String>,
    /// `None` when the category was never answered.
    pub score: Option<u32>,
    /// Label of the selected option, e.g. "Needs Help".
    pub label: Option<String>,
    pub note: String,
}

/// The finished assessment handed to the presentation layer.
///
/// Nothing is stored; building one is a pure computation over a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub instrument_id: String,
    pub instrument_name: String,
    pub identification: Identification,
    pub items: Vec<ItemResult>,
    pub total_score: u32,
    pub max_score: u32,
    pub interpretation: String,
    pub interpretation_detail: Option<String>,
    pub section_scores: Vec<SectionScore>,
    pub composite_scores: Vec<SectionScore>,
    pub additional_notes: String,
    /// False if any category was left unanswered.
    pub complete: bool,
}

impl Submission {
    pub fn item(&self, category_id: &str) -> Option<&ItemResult> {
        self.items.iter().find(|i| i.category_id == category_id)
    }

    /// Short summary in the form `"<name> Score: <total>/<max>"`.
    pub fn headline(&self) -> String {
        format!(
            "{} Score: {}/{}",
            self.instrument_name, self.total_score, self.max_score
        )
    }
}
