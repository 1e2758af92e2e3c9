//! Data-driven instruments loaded from JSON.
//!
//! A definition document mirrors the shape front-end forms use for their
//! category tables: option values and quick-note keys may be string tokens
//! (`"10"`) or numbers. Tokens are parsed once here; the resulting
//! [`CustomInstrument`] only ever sees integers.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Instrument;
use crate::error::InstrumentError;
use crate::scoring::{Category, Composite, ScoreBand, ScoreOption};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionDocument {
    pub id: String,
    pub name: String,
    pub categories: Vec<CategoryDocument>,
    pub bands: Vec<BandDocument>,
    #[serde(default)]
    pub composites: Vec<Composite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub section: Option<String>,
    pub options: Vec<OptionDocument>,
    #[serde(default)]
    pub quick_notes: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDocument {
    pub value: ScoreToken,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDocument {
    pub min_score: u32,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An option score as written in a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreToken {
    Number(u32),
    Text(String),
}

impl ScoreToken {
    fn parse(&self, category_id: &str) -> Result<u32, InstrumentError> {
        match self {
            ScoreToken::Number(n) => Ok(*n),
            ScoreToken::Text(s) => parse_token(category_id, s),
        }
    }
}

fn parse_token(category_id: &str, token: &str) -> Result<u32, InstrumentError> {
    token
        .trim()
        .parse()
        .map_err(|_| InstrumentError::InvalidScoreToken {
            category_id: category_id.to_string(),
            token: token.to_string(),
        })
}

/// An instrument built from a [`DefinitionDocument`].
#[derive(Debug, Clone)]
pub struct CustomInstrument {
    id: String,
    name: String,
    categories: Vec<Category>,
    bands: Vec<ScoreBand>,
    composites: Vec<Composite>,
}

impl CustomInstrument {
    pub fn from_document(doc: DefinitionDocument) -> Result<Self, InstrumentError> {
        if doc.categories.is_empty() {
            return Err(InstrumentError::NoCategories(doc.id));
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(doc.categories.len());
        for raw in doc.categories {
            if !seen.insert(raw.id.clone()) {
                return Err(InstrumentError::DuplicateCategory {
                    instrument_id: doc.id,
                    category_id: raw.id,
                });
            }
            categories.push(build_category(raw)?);
        }

        let fits = categories
            .iter()
            .try_fold(0u32, |sum, c| sum.checked_add(c.max_score()))
            .is_some();
        if !fits {
            return Err(InstrumentError::ScoreOverflow(doc.id));
        }

        let bands: Vec<ScoreBand> = doc
            .bands
            .into_iter()
            .map(|b| ScoreBand {
                min_score: b.min_score,
                label: b.label,
                description: b.description,
            })
            .collect();
        let descending = bands.windows(2).all(|w| w[0].min_score > w[1].min_score);
        if bands.last().is_none_or(|b| b.min_score != 0) || !descending {
            return Err(InstrumentError::BandOrder(doc.id));
        }

        for composite in &doc.composites {
            for section in &composite.sections {
                if !categories.iter().any(|c| c.section.as_ref() == Some(section)) {
                    return Err(InstrumentError::UnknownSection {
                        composite_id: composite.id.clone(),
                        section: section.clone(),
                    });
                }
            }
        }

        debug!(instrument_id = %doc.id, categories = categories.len(), "loaded custom instrument");
        Ok(Self {
            id: doc.id,
            name: doc.name,
            categories,
            bands,
            composites: doc.composites,
        })
    }
}

fn build_category(raw: CategoryDocument) -> Result<Category, InstrumentError> {
    if raw.options.is_empty() {
        return Err(InstrumentError::NoOptions(raw.id));
    }

    let mut options = Vec::with_capacity(raw.options.len());
    for option in raw.options {
        let value = option.value.parse(&raw.id)?;
        if options.iter().any(|o: &ScoreOption| o.value == value) {
            return Err(InstrumentError::DuplicateOption {
                category_id: raw.id,
                value,
            });
        }
        options.push(ScoreOption {
            value,
            label: option.label,
            description: option.description,
        });
    }

    let mut quick_notes = BTreeMap::new();
    for (key, notes) in raw.quick_notes {
        let value = parse_token(&raw.id, &key)?;
        if !options.iter().any(|o| o.value == value) {
            return Err(InstrumentError::OrphanQuickNotes {
                category_id: raw.id,
                key,
            });
        }
        quick_notes.insert(value, notes);
    }

    Ok(Category {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        section: raw.section,
        options,
        quick_notes,
    })
}

/// Parse and validate a JSON definition document.
pub fn load_definition(json: &str) -> Result<CustomInstrument, InstrumentError> {
    let doc: DefinitionDocument = serde_json::from_str(json)?;
    CustomInstrument::from_document(doc)
}

impl Instrument for CustomInstrument {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn bands(&self) -> &[ScoreBand] {
        &self.bands
    }

    fn composites(&self) -> &[Composite] {
        &self.composites
    }
}
