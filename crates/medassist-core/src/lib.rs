//! # medassist-core
//!
//! The lookup engine behind the symptom and treatment views.
//!
//! This crate provides:
//! - The `LookupTable` trait implemented by every static table
//! - `engine::query` and `engine::respond`, which validate and normalize the
//!   raw input before an exact-match lookup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medassist_core::engine::respond;
//!
//! let result = respond("Fever, Cough, Fatigue", symptom_table);
//! ```

pub mod engine;
pub mod traits;

pub use engine::{normalize_disease, normalize_symptoms, query, respond};
pub use traits::LookupTable;
