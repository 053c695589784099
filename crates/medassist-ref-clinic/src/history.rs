//! The patient's medical history.
//!
//! Records are kept in the order they were added. Fields that do not apply
//! to a record's type are dropped on insert: severity and status belong to
//! conditions, dosage and frequency to medications.

use chrono::NaiveDate;
use tracing::info;

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    history::{MedicalRecord, RecordDraft, RecordId, RecordType},
};

#[derive(Debug, Default)]
pub struct MedicalHistory {
    records: Vec<MedicalRecord>,
}

impl MedicalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` and store it as a record dated `date`.
    ///
    /// Returns `MedAssistError::Validation` if the title or description is
    /// blank.
    pub fn add(&mut self, draft: RecordDraft, date: NaiveDate) -> MedAssistResult<MedicalRecord> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(MedAssistError::Validation {
                reason: "please fill in all required fields".to_string(),
            });
        }

        let is_condition = draft.record_type == RecordType::Condition;
        let is_medication = draft.record_type == RecordType::Medication;

        let record = MedicalRecord {
            id: RecordId::new(),
            date,
            record_type: draft.record_type,
            title: title.to_string(),
            description: description.to_string(),
            severity: draft.severity.filter(|_| is_condition),
            status: draft.status.filter(|_| is_condition),
            dosage: non_blank(draft.dosage).filter(|_| is_medication),
            frequency: non_blank(draft.frequency).filter(|_| is_medication),
            doctor: non_blank(draft.doctor),
        };

        info!(
            record_id = %record.id,
            record_type = record.record_type.label(),
            "medical record added"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove a record and return it.
    pub fn delete(&mut self, id: RecordId) -> MedAssistResult<MedicalRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MedAssistError::RecordNotFound { id: id.to_string() })?;

        info!(record_id = %id, "medical record deleted");
        Ok(self.records.remove(index))
    }

    pub fn list(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn by_type(&self, record_type: RecordType) -> Vec<&MedicalRecord> {
        self.records
            .iter()
            .filter(|r| r.record_type == record_type)
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
