//! Scenario 3: Clinic Visit
//!
//! Walks one patient through the non-lookup parts of the dashboard:
//!   1. Book two appointments, then try to double-book a doctor
//!   2. Cancel one appointment and list what is still upcoming
//!   3. Add a condition and a medication to the medical history
//!   4. Log a progress update and rate the treatment

use chrono::{Duration, Local, NaiveDate};

use medassist_contracts::{
    appointment::AppointmentRequest,
    error::MedAssistResult,
    history::{RecordDraft, RecordType, Severity},
};

use crate::{
    appointments::AppointmentBook,
    history::MedicalHistory,
    mock_data::{doctors, TIME_SLOTS},
    progress::{FeedbackLog, ProgressLog},
};

/// Everything the walkthrough leaves behind, for inspection by callers.
#[derive(Debug, Default)]
pub struct ClinicState {
    pub book: AppointmentBook,
    pub history: MedicalHistory,
    pub progress: ProgressLog,
    pub feedback: FeedbackLog,
}

/// Run the walkthrough against fresh state, treating `today` as the
/// current date.
pub fn walkthrough(today: NaiveDate) -> MedAssistResult<ClinicState> {
    let mut state = ClinicState::default();
    let roster = doctors();
    let tomorrow = today + Duration::days(1);

    println!("  Roster:");
    for doctor in &roster {
        println!("    {} - {}", doctor.name, doctor.specialty);
    }
    println!("  Slots: {}", TIME_SLOTS.join(", "));
    println!();

    // ── Appointments ──────────────────────────────────────────────────────────

    let checkup = state.book.schedule(AppointmentRequest {
        date: tomorrow,
        time: TIME_SLOTS[0].to_string(),
        doctor: roster[0].name.clone(),
        reason: "Follow-up on persistent cough".to_string(),
    })?;
    println!("  Booked:    {} at {} with {}", checkup.date, checkup.time, checkup.doctor);

    let cardiology = state.book.schedule(AppointmentRequest {
        date: tomorrow,
        time: TIME_SLOTS[3].to_string(),
        doctor: roster[1].name.clone(),
        reason: "Blood pressure review".to_string(),
    })?;
    println!(
        "  Booked:    {} at {} with {}",
        cardiology.date, cardiology.time, cardiology.doctor
    );

    let clash = state.book.schedule(AppointmentRequest {
        date: tomorrow,
        time: TIME_SLOTS[0].to_string(),
        doctor: roster[0].name.clone(),
        reason: "Second opinion".to_string(),
    });
    if let Err(e) = clash {
        println!("  Rejected:  {}", e);
    }

    let cancelled = state.book.cancel(cardiology.id)?;
    println!("  {}: {} with {}", cancelled.status, cancelled.date, cancelled.doctor);

    for appt in state.book.upcoming(today) {
        println!("  Upcoming:  {} at {} with {} ({})", appt.date, appt.time, appt.doctor, appt.reason);
    }
    println!();

    // ── Medical history ───────────────────────────────────────────────────────

    let condition = state.history.add(
        RecordDraft {
            title: "Hypertension".to_string(),
            description: "Essential hypertension, diet-controlled".to_string(),
            severity: Some(Severity::Moderate),
            ..RecordDraft::new(RecordType::Condition)
        },
        today,
    )?;
    let medication = state.history.add(
        RecordDraft {
            title: "Lisinopril".to_string(),
            description: "ACE inhibitor".to_string(),
            dosage: Some("10 mg".to_string()),
            frequency: Some("once daily".to_string()),
            doctor: Some(roster[1].name.clone()),
            ..RecordDraft::new(RecordType::Medication)
        },
        today,
    )?;
    for record in [&condition, &medication] {
        println!("  Record:    [{}] {} ({})", record.record_type.label(), record.title, record.date);
    }
    println!();

    // ── Progress and feedback ─────────────────────────────────────────────────

    let update = state.progress.update("Cough is easing, no fever since Tuesday", today)?;
    println!("  Progress:  {}", update.text);

    let feedback = state.feedback.submit(4, "Rest and fluids helped")?;
    println!("  Feedback:  {}", feedback.rating.label());
    println!();

    Ok(state)
}

/// Run Scenario 3 against today's date.
pub fn run_scenario() -> MedAssistResult<()> {
    println!("=== Scenario 3: Clinic Visit ===");
    println!();

    walkthrough(Local::now().date_naive())?;

    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}
