//! The clinic's fixed roster and bookable time slots.
//!
//! All data in this module is hardcoded and fictional.

use medassist_contracts::appointment::Doctor;

/// Bookable slots, in the order they occur during the day.
pub const TIME_SLOTS: [&str; 6] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM", "04:00 PM",
];

const ROSTER: [(&str, &str, &str); 5] = [
    ("1", "Dr. Sarah Johnson", "General Medicine"),
    ("2", "Dr. Michael Chen", "Cardiology"),
    ("3", "Dr. Emily Brown", "Pediatrics"),
    ("4", "Dr. James Wilson", "Neurology"),
    ("5", "Dr. Lisa Martinez", "Dermatology"),
];

/// Every doctor patients can book.
pub fn doctors() -> Vec<Doctor> {
    ROSTER
        .iter()
        .map(|(id, name, specialty)| Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        })
        .collect()
}

/// Look a doctor up by display name.
pub fn find_doctor(name: &str) -> Option<Doctor> {
    doctors().into_iter().find(|d| d.name == name)
}

/// Position of `time` within the day, or `None` if it is not a slot.
pub fn slot_index(time: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|slot| *slot == time)
}
