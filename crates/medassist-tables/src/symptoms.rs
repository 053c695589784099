//! The symptom table.
//!
//! Maps a normalized, comma-joined symptom list to a confidence value and
//! candidate conditions. A miss is not an error: the table answers with its
//! low-confidence fallback instead.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    lookup::{QueryResult, SymptomEntry},
};
use medassist_core::{engine::normalize_symptoms, traits::LookupTable};

use crate::config::{read_table_file, FallbackConfig, SymptomTableConfig};

/// An immutable symptom table.
///
/// Construct via `from_toml_str`, `from_file`, or `from_config`. There is
/// no insertion API; the table is fixed once built.
#[derive(Debug)]
pub struct SymptomTable {
    entries: HashMap<String, SymptomEntry>,
    fallback: FallbackConfig,
}

impl SymptomTable {
    /// Parse `s` as a TOML symptom table.
    ///
    /// Returns `MedAssistError::ConfigError` if the TOML is malformed or any
    /// entry fails validation.
    pub fn from_toml_str(s: &str) -> MedAssistResult<Self> {
        let config: SymptomTableConfig =
            toml::from_str(s).map_err(|e| MedAssistError::ConfigError {
                reason: format!("failed to parse symptom table TOML: {}", e),
            })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a symptom table.
    pub fn from_file(path: &Path) -> MedAssistResult<Self> {
        let contents = read_table_file(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate `config` and index its entries by key.
    ///
    /// Every key must already be in normalized form, otherwise no input
    /// could ever reach it. Keys must be unique, confidences must lie in
    /// `[0, 1]`, and every entry needs at least one non-empty condition.
    pub fn from_config(config: SymptomTableConfig) -> MedAssistResult<Self> {
        check_confidence("fallback", config.fallback.confidence)?;
        if config.fallback.recommendation.trim().is_empty() {
            return Err(config_error("fallback recommendation is empty".to_string()));
        }

        let mut entries = HashMap::with_capacity(config.entries.len());
        for entry in config.entries {
            if entry.key.is_empty() || normalize_symptoms(&entry.key) != entry.key {
                return Err(config_error(format!(
                    "symptom key '{}' is not normalized (expected '{}')",
                    entry.key,
                    normalize_symptoms(&entry.key)
                )));
            }
            check_confidence(&entry.key, entry.confidence)?;
            if entry.conditions.is_empty() || entry.conditions.iter().any(|c| c.trim().is_empty()) {
                return Err(config_error(format!(
                    "symptom key '{}' must list at least one non-empty condition",
                    entry.key
                )));
            }
            if entries.contains_key(&entry.key) {
                return Err(config_error(format!("duplicate symptom key '{}'", entry.key)));
            }
            entries.insert(entry.key.clone(), entry);
        }

        info!(entries = entries.len(), "symptom table loaded");

        Ok(Self {
            entries,
            fallback: config.fallback,
        })
    }

    /// The stored entry for a normalized key.
    pub fn get(&self, key: &str) -> Option<&SymptomEntry> {
        self.entries.get(key)
    }

    /// All keys, sorted.
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

    pub fn fallback(&self) -> &FallbackConfig {
        &self.fallback
    }
}

impl LookupTable for SymptomTable {
    fn name(&self) -> &str {
        "symptoms"
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_symptoms(raw)
    }

    fn lookup(&self, key: &str) -> Option<QueryResult> {
        self.entries
            .get(key)
            .map(|entry| QueryResult::ok(Some(entry.confidence), entry.conditions.clone()))
    }

    /// A miss answers with the fallback recommendation at fallback
    /// confidence. Never an error.
    fn on_miss(&self, key: &str) -> MedAssistResult<QueryResult> {
        debug!(key = %key, "no symptom match, using fallback");
        Ok(QueryResult::ok(
            Some(self.fallback.confidence),
            vec![self.fallback.recommendation.clone()],
        ))
    }
}

fn check_confidence(what: &str, confidence: f64) -> MedAssistResult<()> {
    if (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        Err(config_error(format!(
            "confidence {} for '{}' is outside [0, 1]",
            confidence, what
        )))
    }
}

fn config_error(reason: String) -> MedAssistError {
    MedAssistError::ConfigError { reason }
}
