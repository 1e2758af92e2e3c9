use thiserror::Error;

use assessa_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("instrument '{instrument_id}' has no category '{category_id}'")]
    UnknownCategory {
        instrument_id: String,
        category_id: String,
    },

    #[error("category '{category_id}' has no option scored {value}")]
    UnknownOption { category_id: String, value: u32 },

    #[error("category '{0}' has no selected answer")]
    NoSelection(String),

    #[error("category '{category_id}' has no quick note at index {index}")]
    QuickNoteOutOfRange { category_id: String, index: usize },

    #[error("not on a category step")]
    NotOnCategoryStep,

    #[error("instrument '{0}' is registered more than once")]
    DuplicateInstrument(String),

    #[error("instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u64, supported: u32 },

    #[error("config is not a JSON object")]
    ConfigShape,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
