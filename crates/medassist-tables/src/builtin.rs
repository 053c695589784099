//! The tables shipped with the crate.
//!
//! Both are embedded at compile time and parsed at most once per process.
//! Every caller after the first receives the same `&'static` table.

use std::sync::OnceLock;

use medassist_contracts::error::MedAssistResult;

use crate::{symptoms::SymptomTable, treatments::TreatmentTable};

const SYMPTOM_TABLE: &str = include_str!("../tables/symptoms.toml");
const TREATMENT_TABLE: &str = include_str!("../tables/treatments.toml");

static SYMPTOMS: OnceLock<MedAssistResult<SymptomTable>> = OnceLock::new();
static TREATMENTS: OnceLock<MedAssistResult<TreatmentTable>> = OnceLock::new();

/// The built-in symptom table.
pub fn builtin_symptom_table() -> MedAssistResult<&'static SymptomTable> {
    SYMPTOMS
        .get_or_init(|| SymptomTable::from_toml_str(SYMPTOM_TABLE))
        .as_ref()
        .map_err(Clone::clone)
}

/// The built-in treatment table.
pub fn builtin_treatment_table() -> MedAssistResult<&'static TreatmentTable> {
    TREATMENTS
        .get_or_init(|| TreatmentTable::from_toml_str(TREATMENT_TABLE))
        .as_ref()
        .map_err(Clone::clone)
}
