use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use assessa_core::models::identification::Identification;
use assessa_core::models::response::ResponseRecord;
use assessa_core::models::submission::Submission;
use assessa_instruments::scoring::Category;
use assessa_instruments::{Instrument, InstrumentKind};

use crate::error::WizardError;
use crate::navigator::{Navigator, Step};

/// Where the clinician is, in a form ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub step: Step,
    pub current_step: usize,
    pub total_steps: usize,
    pub category_count: usize,
    pub section: Option<String>,
    pub category_title: Option<String>,
    /// Label of the option chosen for the current category.
    pub selected_label: Option<String>,
    /// Quick notes offered for the current selection.
    pub quick_notes: Vec<String>,
    pub can_advance: bool,
}

impl Progress {
    /// Heading text such as `"Self-Care - Step 3 of 18"`.
    pub fn label(&self) -> String {
        match self.step {
            Step::Identification => "Patient Information".to_string(),
            Step::Review => "Review".to_string(),
            Step::Category(index) => {
                let position = format!("Step {} of {}", index + 1, self.category_count);
                match &self.section {
                    Some(section) => format!("{section} - {position}"),
                    None => position,
                }
            }
        }
    }
}

/// Everything the presentation layer needs to re-render after a change.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionView {
    pub instrument_id: String,
    pub instrument_name: String,
    pub navigator: Navigator,
    pub record: ResponseRecord,
    pub progress: Progress,
}

/// One clinician working through one instrument.
///
/// The session owns the only copy of the response record. Every edit
/// replaces the record with an updated value; navigation only moves the
/// step and never touches answers or notes.
pub struct AssessmentSession {
    instrument: Arc<dyn Instrument>,
    navigator: Navigator,
    record: ResponseRecord,
}

impl AssessmentSession {
    pub fn new(instrument: Arc<dyn Instrument>) -> Self {
        info!(
            instrument_id = instrument.id(),
            categories = instrument.categories().len(),
            "starting assessment"
        );
        Self {
            navigator: Navigator::new(instrument.categories().len()),
            instrument,
            record: ResponseRecord::new(),
        }
    }

    /// Start a fresh session for a built-in instrument.
    pub fn start(kind: InstrumentKind) -> Self {
        Self::new(kind.instrument())
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn record(&self) -> &ResponseRecord {
        &self.record
    }

    pub fn into_record(self) -> ResponseRecord {
        self.record
    }

    /// The category shown on the current step, if it is a category step.
    pub fn current_category(&self) -> Option<&Category> {
        match self.navigator.step() {
            Step::Category(index) => self.instrument.categories().get(index),
            _ => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.navigator
            .can_advance(self.instrument.as_ref(), &self.record)
    }

    /// Move forward if the current step is complete. Returns whether the
    /// step changed.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            debug!(step = self.navigator.current_step(), "advance blocked");
            return false;
        }
        self.navigator.advance()
    }

    pub fn previous(&mut self) -> bool {
        self.navigator.retreat()
    }

    fn update(&mut self, edit: impl FnOnce(ResponseRecord) -> ResponseRecord) {
        let record = std::mem::take(&mut self.record);
        self.record = edit(record);
    }

    fn category(&self, category_id: &str) -> Result<&Category, WizardError> {
        self.instrument
            .category(category_id)
            .ok_or_else(|| WizardError::UnknownCategory {
                instrument_id: self.instrument.id().to_string(),
                category_id: category_id.to_string(),
            })
    }

    pub fn set_identification(&mut self, identification: Identification) {
        self.update(|r| r.with_identification(identification));
    }

    pub fn set_patient_name(&mut self, name: impl Into<String>) {
        self.update(|r| r.with_patient_name(name));
    }

    pub fn set_patient_id(&mut self, id: impl Into<String>) {
        self.update(|r| r.with_patient_id(id));
    }

    pub fn set_assessment_date(&mut self, date: impl Into<String>) {
        self.update(|r| r.with_assessment_date(date));
    }

    /// Record the selected option for a category. The category's note is
    /// left as it is.
    pub fn set_answer(&mut self, category_id: &str, value: u32) -> Result<(), WizardError> {
        let category = self.category(category_id)?;
        if category.option_for(value).is_none() {
            return Err(WizardError::UnknownOption {
                category_id: category_id.to_string(),
                value,
            });
        }
        debug!(category_id, value, "answer selected");
        self.update(|r| r.with_answer(category_id, value));
        Ok(())
    }

    /// Select an option for the category on the current step.
    pub fn select(&mut self, value: u32) -> Result<(), WizardError> {
        let category_id = self
            .current_category()
            .map(|c| c.id.clone())
            .ok_or(WizardError::NotOnCategoryStep)?;
        self.set_answer(&category_id, value)
    }

    pub fn set_note(
        &mut self,
        category_id: &str,
        text: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.category(category_id)?;
        self.update(|r| r.with_note(category_id, text));
        Ok(())
    }

    pub fn clear_note(&mut self, category_id: &str) -> Result<(), WizardError> {
        self.category(category_id)?;
        self.update(|r| r.with_cleared_note(category_id));
        Ok(())
    }

    /// Quick notes offered for the category's current answer; empty until
    /// an answer is selected.
    pub fn quick_notes(&self, category_id: &str) -> &[String] {
        match (
            self.instrument.category(category_id),
            self.record.answer(category_id),
        ) {
            (Some(category), Some(value)) => category.notes_for(value),
            _ => &[],
        }
    }

    /// Append the `index`th quick note for the selected answer to the
    /// category's note. Clicking the same note twice appends it twice.
    pub fn append_quick_note(
        &mut self,
        category_id: &str,
        index: usize,
    ) -> Result<(), WizardError> {
        let category = self.category(category_id)?;
        let value = self
            .record
            .answer(category_id)
            .ok_or_else(|| WizardError::NoSelection(category_id.to_string()))?;
        let note = category
            .notes_for(value)
            .get(index)
            .cloned()
            .ok_or_else(|| WizardError::QuickNoteOutOfRange {
                category_id: category_id.to_string(),
                index,
            })?;
        debug!(category_id, index, "quick note appended");
        self.update(|r| r.with_appended_note(category_id, &note));
        Ok(())
    }

    pub fn set_additional_notes(&mut self, text: impl Into<String>) {
        self.update(|r| r.with_additional_notes(text));
    }

    pub fn progress(&self) -> Progress {
        let category = self.current_category();
        let selected = category.and_then(|c| {
            self.record
                .answer(&c.id)
                .and_then(|v| c.option_for(v))
                .map(|o| (o.label.clone(), c.notes_for(o.value).to_vec()))
        });
        let (selected_label, quick_notes) = match selected {
            Some((label, notes)) => (Some(label), notes),
            None => (None, Vec::new()),
        };

        Progress {
            step: self.navigator.step(),
            current_step: self.navigator.current_step(),
            total_steps: self.navigator.review_step() + 1,
            category_count: self.navigator.category_count(),
            section: category.and_then(|c| c.section.clone()),
            category_title: category.map(|c| c.title.clone()),
            selected_label,
            quick_notes,
            can_advance: self.can_advance(),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            instrument_id: self.instrument.id().to_string(),
            instrument_name: self.instrument.name().to_string(),
            navigator: self.navigator,
            record: self.record.clone(),
            progress: self.progress(),
        }
    }

    /// Score the record. Callable from any step; unanswered categories
    /// count as zero and mark the submission incomplete.
    pub fn submit(&self) -> Submission {
        if !self.navigator.is_at_review() {
            warn!(
                step = self.navigator.current_step(),
                "submitting before the review step"
            );
        }
        let submission = self.instrument.submission(&self.record);
        info!(
            instrument_id = %submission.instrument_id,
            total = submission.total_score,
            max = submission.max_score,
            complete = submission.complete,
            "assessment submitted"
        );
        submission
    }
}
