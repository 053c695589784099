//! The appointment book.
//!
//! Holds every appointment booked during the session, in booking order.
//! Appointments start `Scheduled` and can move once, to either `Cancelled`
//! or `Completed`.

use chrono::NaiveDate;
use tracing::{info, warn};

use medassist_contracts::{
    appointment::{Appointment, AppointmentId, AppointmentRequest, AppointmentStatus},
    error::{MedAssistError, MedAssistResult},
};

use crate::mock_data::{find_doctor, slot_index};

#[derive(Debug, Default)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book a new appointment.
    ///
    /// # Errors
    ///
    /// - `Validation` if the time, doctor, or reason is blank
    /// - `UnknownDoctor` if the doctor is not on the roster
    /// - `UnavailableSlot` if the time is not a bookable slot
    /// - `SlotTaken` if the doctor already has a scheduled appointment then
    pub fn schedule(&mut self, request: AppointmentRequest) -> MedAssistResult<Appointment> {
        let time = request.time.trim().to_string();
        let doctor = request.doctor.trim().to_string();
        let reason = request.reason.trim().to_string();
        let date = request.date;
        if time.is_empty() || doctor.is_empty() || reason.is_empty() {
            return Err(MedAssistError::Validation {
                reason: "please fill in all fields".to_string(),
            });
        }

        if find_doctor(&doctor).is_none() {
            return Err(MedAssistError::UnknownDoctor { doctor });
        }

        if slot_index(&time).is_none() {
            return Err(MedAssistError::UnavailableSlot { time });
        }

        let taken = self.appointments.iter().any(|a| {
            a.status == AppointmentStatus::Scheduled
                && a.doctor == doctor
                && a.date == date
                && a.time == time
        });
        if taken {
            warn!(
                doctor = %doctor,
                date = %date,
                time = %time,
                "double booking rejected"
            );
            return Err(MedAssistError::SlotTaken {
                doctor,
                date: date.to_string(),
                time,
            });
        }

        let appointment = Appointment {
            id: AppointmentId::new(),
            date,
            time,
            doctor,
            reason,
            status: AppointmentStatus::Scheduled,
        };

        info!(
            appointment_id = %appointment.id,
            doctor = %appointment.doctor,
            date = %appointment.date,
            time = %appointment.time,
            "appointment scheduled"
        );

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Cancel a scheduled appointment.
    pub fn cancel(&mut self, id: AppointmentId) -> MedAssistResult<Appointment> {
        self.transition(id, AppointmentStatus::Cancelled)
    }

    /// Mark a scheduled appointment as attended.
    pub fn complete(&mut self, id: AppointmentId) -> MedAssistResult<Appointment> {
        self.transition(id, AppointmentStatus::Completed)
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// All appointments in booking order, whatever their status.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Scheduled appointments on or after `from`, earliest first.
    pub fn upcoming(&self, from: NaiveDate) -> Vec<&Appointment> {
        let mut upcoming: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled && a.date >= from)
            .collect();
        upcoming.sort_by_key(|a| (a.date, slot_index(&a.time)));
        upcoming
    }

    fn transition(
        &mut self,
        id: AppointmentId,
        to: AppointmentStatus,
    ) -> MedAssistResult<Appointment> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| MedAssistError::AppointmentNotFound { id: id.to_string() })?;

        if appointment.status != AppointmentStatus::Scheduled {
            return Err(MedAssistError::InvalidTransition {
                id: id.to_string(),
                from: appointment.status.to_string(),
                to: to.to_string(),
            });
        }

        appointment.status = to;
        info!(appointment_id = %id, status = %to, "appointment status changed");
        Ok(appointment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn request(doctor: &str, day: u32, time: &str) -> AppointmentRequest {
        AppointmentRequest {
            date: date(day),
            time: time.to_string(),
            doctor: doctor.to_string(),
            reason: "Persistent cough".to_string(),
        }
    }

    #[test]
    fn test_schedule_starts_scheduled() {
        let mut book = AppointmentBook::new();
        let appt = book.schedule(request("Dr. Sarah Johnson", 2, "09:00 AM")).unwrap();

        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(book.list().len(), 1);
        assert_eq!(book.get(appt.id), Some(&appt));
    }

    #[test]
    fn test_schedule_trims_reason() {
        let mut book = AppointmentBook::new();
        let mut req = request("Dr. Sarah Johnson", 2, "09:00 AM");
        req.reason = "  Annual checkup \n".to_string();

        let appt = book.schedule(req).unwrap();
        assert_eq!(appt.reason, "Annual checkup");
    }

    #[test]
    fn test_padded_doctor_and_time_are_trimmed() {
        let mut book = AppointmentBook::new();
        let appt = book
            .schedule(request(" Dr. Sarah Johnson ", 2, " 09:00 AM\t"))
            .unwrap();

        assert_eq!(appt.doctor, "Dr. Sarah Johnson");
        assert_eq!(appt.time, "09:00 AM");

        // The trimmed booking occupies the slot for the unpadded request too.
        assert!(matches!(
            book.schedule(request("Dr. Sarah Johnson", 2, "09:00 AM")),
            Err(MedAssistError::SlotTaken { .. })
        ));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut book = AppointmentBook::new();

        let mut blank_reason = request("Dr. Sarah Johnson", 2, "09:00 AM");
        blank_reason.reason = "   ".to_string();
        assert!(matches!(
            book.schedule(blank_reason),
            Err(MedAssistError::Validation { .. })
        ));

        assert!(matches!(
            book.schedule(request("", 2, "09:00 AM")),
            Err(MedAssistError::Validation { .. })
        ));
        assert!(matches!(
            book.schedule(request("Dr. Sarah Johnson", 2, "")),
            Err(MedAssistError::Validation { .. })
        ));
        assert!(book.list().is_empty());
    }

    #[test]
    fn test_unknown_doctor_and_slot_rejected() {
        let mut book = AppointmentBook::new();

        match book.schedule(request("Dr. Nobody", 2, "09:00 AM")) {
            Err(MedAssistError::UnknownDoctor { doctor }) => assert_eq!(doctor, "Dr. Nobody"),
            other => panic!("expected UnknownDoctor, got {:?}", other),
        }

        match book.schedule(request("Dr. Sarah Johnson", 2, "12:30 PM")) {
            Err(MedAssistError::UnavailableSlot { time }) => assert_eq!(time, "12:30 PM"),
            other => panic!("expected UnavailableSlot, got {:?}", other),
        }
    }

    #[test]
    fn test_double_booking_rejected_until_cancelled() {
        let mut book = AppointmentBook::new();
        let first = book.schedule(request("Dr. Michael Chen", 5, "10:00 AM")).unwrap();

        assert!(matches!(
            book.schedule(request("Dr. Michael Chen", 5, "10:00 AM")),
            Err(MedAssistError::SlotTaken { .. })
        ));

        // Another doctor at the same time is fine.
        book.schedule(request("Dr. Emily Brown", 5, "10:00 AM")).unwrap();

        book.cancel(first.id).unwrap();
        book.schedule(request("Dr. Michael Chen", 5, "10:00 AM")).unwrap();
        assert_eq!(book.list().len(), 3);
    }

    #[test]
    fn test_cancel_and_complete_only_from_scheduled() {
        let mut book = AppointmentBook::new();
        let appt = book.schedule(request("Dr. James Wilson", 3, "02:00 PM")).unwrap();

        let cancelled = book.cancel(appt.id).unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

        match book.complete(appt.id) {
            Err(MedAssistError::InvalidTransition { from, to, .. }) => {
                assert_eq!(from, "Cancelled");
                assert_eq!(to, "Completed");
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
        assert!(book.cancel(appt.id).is_err());
    }

    #[test]
    fn test_unknown_id_not_found() {
        let mut book = AppointmentBook::new();
        assert!(matches!(
            book.cancel(AppointmentId::new()),
            Err(MedAssistError::AppointmentNotFound { .. })
        ));
    }

    #[test]
    fn test_upcoming_sorted_by_date_then_slot() {
        let mut book = AppointmentBook::new();
        let late = book.schedule(request("Dr. Lisa Martinez", 9, "09:00 AM")).unwrap();
        let afternoon = book.schedule(request("Dr. Lisa Martinez", 4, "02:00 PM")).unwrap();
        let morning = book.schedule(request("Dr. Sarah Johnson", 4, "11:00 AM")).unwrap();
        let past = book.schedule(request("Dr. Sarah Johnson", 1, "09:00 AM")).unwrap();
        let done = book.schedule(request("Dr. Michael Chen", 6, "03:00 PM")).unwrap();
        book.complete(done.id).unwrap();

        let ids: Vec<AppointmentId> = book.upcoming(date(2)).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![morning.id, afternoon.id, late.id]);
        assert!(!ids.contains(&past.id));
    }
}
