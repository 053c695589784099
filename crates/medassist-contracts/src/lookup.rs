//! Lookup table entries and the query result contract.
//!
//! `QueryResult` is the single shape every lookup answers with, whether it
//! hit the table, fell back, or rejected the input.

use serde::{Deserialize, Serialize};

/// Outcome class of a lookup, serialized as `"ok"`, `"not_found"` or
/// `"invalid_input"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Ok,
    NotFound,
    InvalidInput,
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::NotFound => write!(f, "not_found"),
            Self::InvalidInput => write!(f, "invalid_input"),
        }
    }
}

/// The answer to one lookup.
///
/// `confidence` is only present for symptom-table answers with `Ok` status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub status: QueryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub recommendations: Vec<String>,
}

impl QueryResult {
    /// A successful answer.
    pub fn ok(confidence: Option<f64>, recommendations: Vec<String>) -> Self {
        Self {
            status: QueryStatus::Ok,
            confidence,
            recommendations,
        }
    }

    /// No entry for the key and no fallback.
    pub fn not_found() -> Self {
        Self {
            status: QueryStatus::NotFound,
            confidence: None,
            recommendations: Vec::new(),
        }
    }

    /// The input was rejected before lookup.
    pub fn invalid_input() -> Self {
        Self {
            status: QueryStatus::InvalidInput,
            confidence: None,
            recommendations: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == QueryStatus::Ok
    }
}

/// One row of the symptom table.
///
/// `key` is a comma-joined symptom list in normalized form (lowercase, no
/// whitespace), e.g. `"fever,cough,fatigue"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub key: String,
    /// Confidence in `[0, 1]` that one of `conditions` applies.
    pub confidence: f64,
    /// Candidate conditions, most likely first.
    pub conditions: Vec<String>,
}

/// One row of the treatment table.
///
/// `disease` is the normalized disease name (lowercase, trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentEntry {
    pub disease: String,
    /// Free-text description of symptoms and treatment.
    pub treatment: String,
}
