use serde::{Deserialize, Deserializer, Serialize, de};
use ts_rs::TS;
use tracing::debug;

use assessa_core::models::response::ResponseRecord;
use assessa_instruments::Instrument;

/// What the wizard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    Identification,
    /// Zero-based index into the instrument's categories.
    Category(usize),
    Review,
}

/// Linear position over `0..=category_count + 1`.
///
/// Step 0 is identification, steps `1..=category_count` are one category
/// each, and the last step is review. Moving past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Navigator {
    current_step: usize,
    category_count: usize,
}

/// Unchecked wire form of a [`Navigator`].
#[derive(Deserialize)]
struct NavigatorState {
    current_step: usize,
    category_count: usize,
}

impl<'de> Deserialize<'de> for Navigator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = NavigatorState::deserialize(deserializer)?;
        let Some(review_step) = state.category_count.checked_add(1) else {
            return Err(de::Error::custom("category count is too large"));
        };
        if state.current_step > review_step {
            return Err(de::Error::custom(format!(
                "step {} is past review step {review_step}",
                state.current_step
            )));
        }
        Ok(Self {
            current_step: state.current_step,
            category_count: state.category_count,
        })
    }
}

impl Navigator {
    pub fn new(category_count: usize) -> Self {
        Self {
            current_step: 0,
            category_count,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    pub fn review_step(&self) -> usize {
        self.category_count + 1
    }

    pub fn step(&self) -> Step {
        match self.current_step {
            0 => Step::Identification,
            n if n <= self.category_count => Step::Category(n - 1),
            _ => Step::Review,
        }
    }

    pub fn is_at_review(&self) -> bool {
        self.current_step == self.review_step()
    }

    /// Whether the current step has what it needs to move forward.
    pub fn can_advance(&self, instrument: &dyn Instrument, record: &ResponseRecord) -> bool {
        match self.step() {
            Step::Identification => record.identification.is_complete(),
            Step::Category(index) => instrument
                .categories()
                .get(index)
                .is_some_and(|c| record.is_answered(&c.id)),
            Step::Review => true,
        }
    }

    /// Move one step forward. Returns false when already at review.
    pub fn advance(&mut self) -> bool {
        if self.current_step < self.review_step() {
            self.current_step += 1;
            debug!(step = self.current_step, "advanced");
            true
        } else {
            false
        }
    }

    /// Move one step back. Returns false when already at identification.
    pub fn retreat(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            debug!(step = self.current_step, "retreated");
            true
        } else {
            false
        }
    }
}
