//! Scenario 2: Treatment Lookup
//!
//! Looks up a known disease and an unknown one. The unknown disease is
//! reported as "no information available" rather than a generic fallback.

use medassist_contracts::{
    error::MedAssistResult,
    lookup::{QueryResult, QueryStatus},
};
use medassist_core::engine::respond;
use medassist_tables::TreatmentTable;

pub const SAMPLE_INPUTS: [&str; 2] = ["Flu", "unknown disease xyz"];

/// Run every sample input and return the answers in order.
pub fn evaluate(table: &TreatmentTable) -> Vec<(&'static str, QueryResult)> {
    SAMPLE_INPUTS
        .iter()
        .map(|input| (*input, respond(input, table)))
        .collect()
}

/// Run Scenario 2 and print each answer.
pub fn run_scenario(table: &TreatmentTable) -> MedAssistResult<()> {
    println!("=== Scenario 2: Treatment Lookup ===");
    println!();

    for (input, result) in evaluate(table) {
        println!("  Disease:    {}", input);
        match result.status {
            QueryStatus::Ok => {
                for text in &result.recommendations {
                    println!("  Guidance:   {}", text);
                }
            }
            QueryStatus::NotFound => println!("  Guidance:   no information available"),
            QueryStatus::InvalidInput => println!("  Guidance:   please enter a disease name"),
        }
        println!();
    }

    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
