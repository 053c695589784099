//! MedAssist — Demo CLI
//!
//! Queries the symptom and treatment tables and runs the clinic walkthrough.
//! The built-in tables are used unless a TOML table file is given.
//!
//! Usage:
//!   cargo run -p demo -- diagnose "fever, cough, fatigue"
//!   cargo run -p demo -- --json treatment flu
//!   cargo run -p demo -- --symptom-table my-symptoms.toml tables
//!   cargo run -p demo -- run-all

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    lookup::{QueryResult, QueryStatus},
};
use medassist_core::engine::respond;
use medassist_ref_clinic::scenarios::{clinic_visit, symptom_check, treatment_lookup};
use medassist_tables::{
    builtin_symptom_table, builtin_treatment_table, SymptomTable, TreatmentTable,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MedAssist — symptom and treatment lookup demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MedAssist lookup engine demo",
    long_about = "Looks up symptom combinations and diseases in static tables and runs\n\
                  an in-memory clinic walkthrough. Not a diagnostic tool."
)]
struct Cli {
    /// Load the symptom table from this TOML file instead of the built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    symptom_table: Option<PathBuf>,

    /// Load the treatment table from this TOML file instead of the built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    treatment_table: Option<PathBuf>,

    /// Print lookup results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a comma-separated symptom list, e.g. "fever, cough, fatigue".
    Diagnose { symptoms: String },
    /// Look up the treatment summary for a disease, e.g. "flu".
    Treatment { disease: String },
    /// List the keys of both tables.
    Tables,
    /// Book appointments, edit history, and log feedback on in-memory state.
    ClinicWalkthrough,
    /// Run every scenario in sequence.
    RunAll,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> MedAssistResult<()> {
    let loaded_symptoms;
    let symptoms: &SymptomTable = match &cli.symptom_table {
        Some(path) => {
            debug!(path = %path.display(), "loading symptom table from file");
            loaded_symptoms = SymptomTable::from_file(path)?;
            &loaded_symptoms
        }
        None => builtin_symptom_table()?,
    };

    let loaded_treatments;
    let treatments: &TreatmentTable = match &cli.treatment_table {
        Some(path) => {
            debug!(path = %path.display(), "loading treatment table from file");
            loaded_treatments = TreatmentTable::from_file(path)?;
            &loaded_treatments
        }
        None => builtin_treatment_table()?,
    };

    match &cli.command {
        Command::Diagnose { symptoms: input } => print_result(&respond(input, symptoms), cli.json),
        Command::Treatment { disease } => print_result(&respond(disease, treatments), cli.json),
        Command::Tables => {
            print_tables(symptoms, treatments);
            Ok(())
        }
        Command::ClinicWalkthrough => clinic_visit::run_scenario(),
        Command::RunAll => {
            print_banner();
            symptom_check::run_scenario(symptoms)?;
            treatment_lookup::run_scenario(treatments)?;
            clinic_visit::run_scenario()?;
            println!("All scenarios completed successfully.");
            Ok(())
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_result(result: &QueryResult, json: bool) -> MedAssistResult<()> {
    if json {
        println!("{}", render_json(result)?);
        return Ok(());
    }

    match result.status {
        QueryStatus::Ok => {
            if let Some(confidence) = result.confidence {
                println!("Confidence: {:.0}%", confidence * 100.0);
            }
            for recommendation in &result.recommendations {
                println!("  - {}", recommendation);
            }
        }
        QueryStatus::NotFound => println!("No information available."),
        QueryStatus::InvalidInput => println!("Please describe your symptoms or condition first."),
    }
    Ok(())
}

fn render_json(result: &QueryResult) -> MedAssistResult<String> {
    serde_json::to_string_pretty(result).map_err(encode_error)
}

fn encode_error(e: serde_json::Error) -> MedAssistError {
    MedAssistError::Output {
        reason: format!("failed to encode result as JSON: {}", e),
    }
}

fn print_tables(symptoms: &SymptomTable, treatments: &TreatmentTable) {
    println!("Symptom keys ({}):", symptoms.len());
    for key in symptoms.keys() {
        println!("  {}", key);
    }
    println!(
        "  (no match → {:.0}%: {})",
        symptoms.fallback().confidence * 100.0,
        symptoms.fallback().recommendation
    );
    println!();
    println!("Diseases ({}):", treatments.len());
    for key in treatments.keys() {
        println!("  {}", key);
    }
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("MedAssist — Symptom & Treatment Lookup");
    println!("======================================");
    println!();
    println!("Every lookup follows the same pipeline:");
    println!("  [1] Reject input that is empty after trimming");
    println!("  [2] Normalize (symptoms: lowercase, strip whitespace; diseases: lowercase, trim)");
    println!("  [3] Exact-match the normalized key");
    println!("  [4] On a miss: symptoms fall back to a low-confidence referral, diseases report not found");
    println!();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
