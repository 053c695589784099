//! Table file schemas.
//!
//! A table file is a TOML document holding an `entries` array and, for the
//! symptom table, an optional `[fallback]` section.
//!
//! Example symptom table:
//! ```toml
//! [fallback]
//! confidence = 0.6
//! recommendation = "Please consult a healthcare professional for accurate diagnosis"
//!
//! [[entries]]
//! key = "fever,cough,fatigue"
//! confidence = 0.85
//! conditions = ["COVID-19", "Flu", "Common Cold"]
//! ```

use std::path::Path;

use serde::Deserialize;

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    lookup::{SymptomEntry, TreatmentEntry},
};

/// Confidence reported when no symptom entry matches.
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.6;

/// Recommendation reported when no symptom entry matches.
pub const DEFAULT_FALLBACK_RECOMMENDATION: &str =
    "Please consult a healthcare professional for accurate diagnosis";

/// The answer substituted for a symptom-table miss.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    #[serde(default = "default_recommendation")]
    pub recommendation: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_FALLBACK_CONFIDENCE,
            recommendation: DEFAULT_FALLBACK_RECOMMENDATION.to_string(),
        }
    }
}

fn default_confidence() -> f64 {
    DEFAULT_FALLBACK_CONFIDENCE
}

fn default_recommendation() -> String {
    DEFAULT_FALLBACK_RECOMMENDATION.to_string()
}

/// Top-level structure of a symptom table file.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomTableConfig {
    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub entries: Vec<SymptomEntry>,
}

/// Top-level structure of a treatment table file.
#[derive(Debug, Clone, Deserialize)]
pub struct TreatmentTableConfig {
    #[serde(default)]
    pub entries: Vec<TreatmentEntry>,
}

/// Read a table file, mapping I/O failures to `ConfigError`.
pub(crate) fn read_table_file(path: &Path) -> MedAssistResult<String> {
    std::fs::read_to_string(path).map_err(|e| MedAssistError::ConfigError {
        reason: format!("failed to read table file '{}': {}", path.display(), e),
    })
}
