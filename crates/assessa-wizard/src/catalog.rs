use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use assessa_instruments::Instrument;
use assessa_instruments::definition::CustomInstrument;
use assessa_instruments::error::InstrumentError;

use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::session::AssessmentSession;

/// Dashboard listing entry for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
    pub category_count: usize,
    pub max_score: u32,
}

/// The instruments a clinician can start, in display order.
pub struct Catalog {
    instruments: Vec<Arc<dyn Instrument>>,
}

impl Catalog {
    /// Every built-in instrument.
    pub fn builtin() -> Self {
        Self {
            instruments: assessa_instruments::all_instruments(),
        }
    }

    pub fn from_config(config: &WizardConfig) -> Result<Self, WizardError> {
        let mut instruments: Vec<Arc<dyn Instrument>> = Vec::new();

        for id in &config.instruments {
            let instrument = assessa_instruments::get_instrument(id)
                .ok_or_else(|| InstrumentError::UnknownInstrument(id.clone()))?;
            push_unique(&mut instruments, instrument)?;
        }
        for doc in &config.custom_definitions {
            let instrument = CustomInstrument::from_document(doc.clone())?;
            push_unique(&mut instruments, Arc::new(instrument))?;
        }

        info!(count = instruments.len(), "catalog built");
        Ok(Self { instruments })
    }

    pub fn instruments(&self) -> &[Arc<dyn Instrument>] {
        &self.instruments
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Instrument>> {
        self.instruments.iter().find(|i| i.id() == id).cloned()
    }

    pub fn summaries(&self) -> Vec<InstrumentSummary> {
        self.instruments
            .iter()
            .map(|i| InstrumentSummary {
                id: i.id().to_string(),
                name: i.name().to_string(),
                category_count: i.categories().len(),
                max_score: i.max_score(),
            })
            .collect()
    }

    /// Begin a new assessment with an empty record.
    pub fn start(&self, id: &str) -> Result<AssessmentSession, WizardError> {
        let instrument = self
            .get(id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?;
        Ok(AssessmentSession::new(instrument))
    }
}

fn push_unique(
    instruments: &mut Vec<Arc<dyn Instrument>>,
    instrument: Arc<dyn Instrument>,
) -> Result<(), WizardError> {
    if instruments.iter().any(|i| i.id() == instrument.id()) {
        return Err(WizardError::DuplicateInstrument(instrument.id().to_string()));
    }
    instruments.push(instrument);
    Ok(())
}
