use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("malformed definition document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("instrument '{0}' defines no categories")]
    NoCategories(String),

    #[error("duplicate category '{category_id}' in instrument '{instrument_id}'")]
    DuplicateCategory {
        instrument_id: String,
        category_id: String,
    },

    #[error("category '{0}' defines no options")]
    NoOptions(String),

    #[error("category '{category_id}': option value '{token}' is not a whole number")]
    InvalidScoreToken { category_id: String, token: String },

    #[error("category '{category_id}': option value {value} appears more than once")]
    DuplicateOption { category_id: String, value: u32 },

    #[error("category '{category_id}': quick notes keyed by '{key}' match no option")]
    OrphanQuickNotes { category_id: String, key: String },

    #[error("instrument '{0}': maximum total score does not fit in 32 bits")]
    ScoreOverflow(String),

    #[error("instrument '{0}': bands must descend strictly and end at 0")]
    BandOrder(String),

    #[error("composite '{composite_id}' names unknown section '{section}'")]
    UnknownSection {
        composite_id: String,
        section: String,
    },
}
