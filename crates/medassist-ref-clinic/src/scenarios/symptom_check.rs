//! Scenario 1: Symptom Check
//!
//! Runs three inputs through the symptom table:
//!   1. An exact match (`Fever, Cough, Fatigue`, mixed case and spacing)
//!   2. An unknown combination (`sore throat`) → low-confidence fallback
//!   3. Whitespace-only input → rejected before lookup

use medassist_contracts::{error::MedAssistResult, lookup::QueryResult};
use medassist_core::engine::respond;
use medassist_tables::SymptomTable;

/// The inputs this scenario walks through, in order.
pub const SAMPLE_INPUTS: [&str; 3] = ["Fever, Cough, Fatigue", "sore throat", "   "];

/// Run every sample input and return the answers in order.
pub fn evaluate(table: &SymptomTable) -> Vec<(&'static str, QueryResult)> {
    SAMPLE_INPUTS
        .iter()
        .map(|input| (*input, respond(input, table)))
        .collect()
}

/// Run Scenario 1 and print each answer.
pub fn run_scenario(table: &SymptomTable) -> MedAssistResult<()> {
    println!("=== Scenario 1: Symptom Check ===");
    println!();

    for (input, result) in evaluate(table) {
        println!("  Input:           {:?}", input);
        println!("  Status:          {}", result.status);
        if let Some(confidence) = result.confidence {
            println!("  Confidence:      {:.0}%", confidence * 100.0);
        }
        for recommendation in &result.recommendations {
            println!("  Possible cause:  {}", recommendation);
        }
        println!();
    }

    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
