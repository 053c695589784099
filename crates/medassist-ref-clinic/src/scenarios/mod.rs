//! Walkthrough scenarios for the demo CLI.
//!
//! Each scenario drives real MedAssist components with fixed inputs and
//! prints what a patient would see on the corresponding dashboard page.

pub mod clinic_visit;
pub mod symptom_check;
pub mod treatment_lookup;
