//! assessa-instruments
//!
//! Functional assessment instrument definitions. Pure data plus scoring:
//! the categories, options, quick notes and interpretation bands for each
//! supported instrument, and the arithmetic that turns a response record
//! into a total score.

pub mod definition;
pub mod error;
pub mod instruments;
pub mod scoring;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use assessa_core::models::response::ResponseRecord;
use assessa_core::models::submission::{ItemResult, SectionScore, Submission};
use scoring::{Category, Composite, ScoreBand, ValidationError};

/// Trait implemented by each functional assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "barthel", "fim").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Barthel Index").
    fn name(&self) -> &str;

    /// Categories in wizard step order.
    fn categories(&self) -> &[Category];

    /// Interpretation ladder, highest threshold first.
    fn bands(&self) -> &[ScoreBand];

    /// Named subscores over groups of sections. Most instruments have none.
    fn composites(&self) -> &[Composite] {
        &[]
    }

    fn category(&self, id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == id)
    }

    /// Sum of every category's highest option.
    fn max_score(&self) -> u32 {
        self.categories()
            .iter()
            .fold(0u32, |sum, c| sum.saturating_add(c.max_score()))
    }

    /// Sum of the recorded answers. Unanswered categories, and answers no
    /// option offers, count as zero.
    fn total_score(&self, record: &ResponseRecord) -> u32 {
        self.categories()
            .iter()
            .fold(0u32, |sum, c| sum.saturating_add(c.score(record.answer(&c.id))))
    }

    /// First band whose threshold `total` reaches.
    fn band_for(&self, total: u32) -> Option<&ScoreBand> {
        self.bands().iter().find(|b| total >= b.min_score)
    }

    fn interpret(&self, total: u32) -> &str {
        self.band_for(total)
            .map(|b| b.label.as_str())
            .unwrap_or_default()
    }

    /// Subtotals per section, in the order sections first appear.
    fn section_scores(&self, record: &ResponseRecord) -> Vec<SectionScore> {
        let mut sections: Vec<SectionScore> = Vec::new();
        for category in self.categories() {
            let Some(section) = &category.section else {
                continue;
            };
            let score = category.score(record.answer(&category.id));
            match sections.iter_mut().find(|s| &s.name == section) {
                Some(entry) => {
                    entry.score = entry.score.saturating_add(score);
                    entry.max_score = entry.max_score.saturating_add(category.max_score());
                }
                None => sections.push(SectionScore {
                    name: section.clone(),
                    score,
                    max_score: category.max_score(),
                }),
            }
        }
        sections
    }

    fn composite_scores(&self, record: &ResponseRecord) -> Vec<SectionScore> {
        self.composites()
            .iter()
            .map(|composite| {
                let members = self.categories().iter().filter(|c| {
                    c.section
                        .as_ref()
                        .is_some_and(|s| composite.sections.contains(s))
                });
                let (score, max_score) = members.fold((0u32, 0u32), |(score, max), c| {
                    (
                        score.saturating_add(c.score(record.answer(&c.id))),
                        max.saturating_add(c.max_score()),
                    )
                });
                SectionScore {
                    name: composite.name.clone(),
                    score,
                    max_score,
                }
            })
            .collect()
    }

    /// Check recorded answers against this instrument's options.
    fn validate_record(&self, record: &ResponseRecord) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (category_id, &value) in &record.answers {
            match self.category(category_id) {
                None => errors.push(ValidationError {
                    category_id: category_id.clone(),
                    value,
                    message: format!("{}: unknown category '{}'", self.name(), category_id),
                }),
                Some(category) if category.option_for(value).is_none() => {
                    errors.push(ValidationError {
                        category_id: category_id.clone(),
                        value,
                        message: format!(
                            "{}: {} has no option scored {}",
                            self.name(),
                            category.title,
                            value,
                        ),
                    })
                }
                Some(_) => {}
            }
        }
        errors
    }

    /// Reduce a record into the finished result shown on the review step.
    fn submission(&self, record: &ResponseRecord) -> Submission {
        let items: Vec<ItemResult> = self
            .categories()
            .iter()
            .map(|category| {
                let score = record.answer(&category.id);
                ItemResult {
                    category_id: category.id.clone(),
                    title: category.title.clone(),
                    section: category.section.clone(),
                    score,
                    label: score
                        .and_then(|v| category.option_for(v))
                        .map(|o| o.label.clone()),
                    note: record.note(&category.id).to_string(),
                }
            })
            .collect();

        let total = self.total_score(record);
        let band = self.band_for(total);
        Submission {
            instrument_id: self.id().to_string(),
            instrument_name: self.name().to_string(),
            identification: record.identification.clone(),
            complete: items.iter().all(|i| i.score.is_some()),
            items,
            total_score: total,
            max_score: self.max_score(),
            interpretation: band.map(|b| b.label.clone()).unwrap_or_default(),
            interpretation_detail: band.and_then(|b| b.description.clone()),
            section_scores: self.section_scores(record),
            composite_scores: self.composite_scores(record),
            additional_notes: record.additional_notes.clone(),
        }
    }
}

/// The built-in instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    KatzAdl,
    Barthel,
    Fim,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 3] = [Self::KatzAdl, Self::Barthel, Self::Fim];

    pub fn id(self) -> &'static str {
        match self {
            Self::KatzAdl => "katz_adl",
            Self::Barthel => "barthel",
            Self::Fim => "fim",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn instrument(self) -> Arc<dyn Instrument> {
        match self {
            Self::KatzAdl => Arc::new(instruments::katz_adl::KatzAdl),
            Self::Barthel => Arc::new(instruments::barthel::Barthel),
            Self::Fim => Arc::new(instruments::fim::Fim),
        }
    }
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Arc<dyn Instrument>> {
    InstrumentKind::ALL.into_iter().map(InstrumentKind::instrument).collect()
}

/// Look up a built-in instrument by ID.
pub fn get_instrument(id: &str) -> Option<Arc<dyn Instrument>> {
    InstrumentKind::from_id(id).map(InstrumentKind::instrument)
}
