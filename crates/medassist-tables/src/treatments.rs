//! The treatment table.
//!
//! Maps a normalized disease name to a free-text treatment summary. Unlike
//! the symptom table there is no fallback: an unknown disease is reported
//! as `MedAssistError::NotFound`.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    lookup::{QueryResult, TreatmentEntry},
};
use medassist_core::{engine::normalize_disease, traits::LookupTable};

use crate::config::{read_table_file, TreatmentTableConfig};

/// An immutable disease → treatment table.
#[derive(Debug)]
pub struct TreatmentTable {
    entries: HashMap<String, TreatmentEntry>,
}

impl TreatmentTable {
    /// Parse `s` as a TOML treatment table.
    pub fn from_toml_str(s: &str) -> MedAssistResult<Self> {
        let config: TreatmentTableConfig =
            toml::from_str(s).map_err(|e| MedAssistError::ConfigError {
                reason: format!("failed to parse treatment table TOML: {}", e),
            })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a treatment table.
    pub fn from_file(path: &Path) -> MedAssistResult<Self> {
        let contents = read_table_file(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate `config` and index its entries by disease name.
    ///
    /// Disease names must be unique and already normalized; treatment text
    /// must not be empty.
    pub fn from_config(config: TreatmentTableConfig) -> MedAssistResult<Self> {
        let mut entries = HashMap::with_capacity(config.entries.len());
        for entry in config.entries {
            if entry.disease.is_empty() || normalize_disease(&entry.disease) != entry.disease {
                return Err(MedAssistError::ConfigError {
                    reason: format!(
                        "disease '{}' is not normalized (expected '{}')",
                        entry.disease,
                        normalize_disease(&entry.disease)
                    ),
                });
            }
            if entry.treatment.trim().is_empty() {
                return Err(MedAssistError::ConfigError {
                    reason: format!("disease '{}' has an empty treatment", entry.disease),
                });
            }
            if entries.contains_key(&entry.disease) {
                return Err(MedAssistError::ConfigError {
                    reason: format!("duplicate disease '{}'", entry.disease),
                });
            }
            entries.insert(entry.disease.clone(), entry);
        }

        info!(entries = entries.len(), "treatment table loaded");

        Ok(Self { entries })
    }

    pub fn get(&self, disease: &str) -> Option<&TreatmentEntry> {
        self.entries.get(disease)
    }

    /// All disease names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LookupTable for TreatmentTable {
    fn name(&self) -> &str {
        "treatments"
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_disease(raw)
    }

    fn lookup(&self, key: &str) -> Option<QueryResult> {
        self.entries
            .get(key)
            .map(|entry| QueryResult::ok(None, vec![entry.treatment.clone()]))
    }

    fn on_miss(&self, key: &str) -> MedAssistResult<QueryResult> {
        warn!(disease = %key, "no treatment information for disease");
        Err(MedAssistError::NotFound {
            key: key.to_string(),
        })
    }
}
