use std::path::Path;

use serde::{Deserialize, Serialize};

use assessa_instruments::InstrumentKind;
use assessa_instruments::definition::DefinitionDocument;

use crate::error::WizardError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Which instruments a deployment offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// IDs of built-in instruments to offer, in dashboard order.
    pub instruments: Vec<String>,
    /// Extra instruments defined as data.
    #[serde(default)]
    pub custom_definitions: Vec<DefinitionDocument>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            instruments: builtin_ids(),
            custom_definitions: Vec::new(),
        }
    }
}

fn builtin_ids() -> Vec<String> {
    InstrumentKind::ALL
        .iter()
        .map(|k| k.id().to_string())
        .collect()
}

/// Parse a config document, migrating older versions first.
pub fn parse_config(contents: &str) -> Result<WizardConfig, WizardError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version =
        u32::try_from(raw_version).map_err(|_| WizardError::UnsupportedConfigVersion {
            found: raw_version,
            supported: CURRENT_VERSION,
        })?;

    let migrated = migrate(json, on_disk_version)?;
    let config: WizardConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<WizardConfig, WizardError> {
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::info!(
        path = %path.display(),
        instruments = config.instruments.len(),
        custom = config.custom_definitions.len(),
        "config loaded"
    );
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, WizardError> {
    if from_version > CURRENT_VERSION {
        return Err(WizardError::UnsupportedConfigVersion {
            found: from_version.into(),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `instruments` became required; unversioned configs offered
    // every built-in.
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(WizardError::ConfigShape)?;
        obj.entry("instruments")
            .or_insert_with(|| serde_json::json!(builtin_ids()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (backfilled instruments)");
    }

    Ok(json)
}
