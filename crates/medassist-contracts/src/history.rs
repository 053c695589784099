//! Medical history record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a medical-history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub uuid::Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Condition,
    Medication,
    Allergy,
    Procedure,
}

impl RecordType {
    /// Label used when listing records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Condition => "Medical Condition",
            Self::Medication => "Medication",
            Self::Allergy => "Allergy",
            Self::Procedure => "Medical Procedure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Resolved,
}

/// Form contents for a new record, before validation.
///
/// `severity` and `status` only apply to conditions; `dosage` and
/// `frequency` only apply to medications. The history store drops them for
/// other record types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub record_type: RecordType,
    pub title: String,
    pub description: String,
    pub severity: Option<Severity>,
    pub status: Option<RecordStatus>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub doctor: Option<String>,
}

impl RecordDraft {
    /// A blank draft with the form defaults: mild, active.
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            title: String::new(),
            description: String::new(),
            severity: Some(Severity::Mild),
            status: Some(RecordStatus::Active),
            dosage: None,
            frequency: None,
            doctor: None,
        }
    }
}

/// A stored medical-history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub record_type: RecordType,
    pub title: String,
    pub description: String,
    pub severity: Option<Severity>,
    pub status: Option<RecordStatus>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub doctor: Option<String>,
}
