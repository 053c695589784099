//! # medassist-tables
//!
//! TOML-backed lookup tables for the MedAssist lookup engine.
//!
//! ## Overview
//!
//! This crate provides [`SymptomTable`] and [`TreatmentTable`], both of
//! which implement the [`LookupTable`](medassist_core::traits::LookupTable)
//! trait. Tables are declared in TOML, validated once when loaded, and never
//! change afterwards.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medassist_core::engine::respond;
//! use medassist_tables::builtin_symptom_table;
//!
//! let table = builtin_symptom_table()?;
//! let result = respond("fever, cough, fatigue", table);
//! ```
//!
//! ## Miss policy
//!
//! The two tables deliberately disagree on what a miss means. The symptom
//! table answers with a low-confidence "consult a professional" fallback;
//! the treatment table reports `NotFound`.

pub mod builtin;
pub mod config;
pub mod symptoms;
pub mod treatments;

pub use builtin::{builtin_symptom_table, builtin_treatment_table};
pub use config::{FallbackConfig, SymptomTableConfig, TreatmentTableConfig};
pub use symptoms::SymptomTable;
pub use treatments::TreatmentTable;

// ── Tests ─────────────────────────────────────────────────────────────────────
