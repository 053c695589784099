//! # medassist-contracts
//!
//! Shared types, the lookup query contract, and the error type for the
//! MedAssist workspace.
//!
//! Every other crate imports from here. The crate holds data definitions,
//! the error type, and the value checks those types enforce on
//! construction (such as the 1-5 feedback rating).

pub mod appointment;
pub mod error;
pub mod history;
pub mod lookup;
pub mod treatment;

#[cfg(test)]
mod tests {
    use super::*;
    use appointment::{AppointmentId, AppointmentStatus};
    use error::MedAssistError;
    use lookup::{QueryResult, QueryStatus};
    use treatment::{EffectivenessRating, Feedback};

    // ── QueryResult wire shape ───────────────────────────────────────────────

    #[test]
    fn query_result_ok_serializes_with_confidence() {
        let result = QueryResult::ok(
            Some(0.85),
            vec!["COVID-19".to_string(), "Flu".to_string()],
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "ok");
        assert_eq!(json["confidence"], 0.85);
        assert_eq!(json["recommendations"][1], "Flu");
    }

    #[test]
    fn query_result_omits_absent_confidence() {
        let json = serde_json::to_value(QueryResult::not_found()).unwrap();

        assert_eq!(json["status"], "not_found");
        assert!(json.get("confidence").is_none());
        assert_eq!(json["recommendations"], serde_json::json!([]));
    }

    #[test]
    fn query_status_invalid_input_uses_snake_case() {
        let json = serde_json::to_string(&QueryStatus::InvalidInput).unwrap();
        assert_eq!(json, "\"invalid_input\"");
        assert_eq!(QueryStatus::InvalidInput.to_string(), "invalid_input");
    }

    #[test]
    fn query_result_deserializes_without_confidence() {
        let decoded: QueryResult =
            serde_json::from_str(r#"{"status":"ok","recommendations":["rest"]}"#).unwrap();
        assert!(decoded.is_ok());
        assert_eq!(decoded.confidence, None);
    }

    // ── Appointment ids ──────────────────────────────────────────────────────

    #[test]
    fn appointment_id_new_produces_unique_values() {
        let unique: std::collections::HashSet<AppointmentId> =
            (0..50).map(|_| AppointmentId::new()).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn appointment_status_serializes_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }

    // ── EffectivenessRating ──────────────────────────────────────────────────

    #[test]
    fn rating_accepts_one_through_five() {
        for value in 1..=5u8 {
            assert_eq!(EffectivenessRating::from_value(value).unwrap().value(), value);
        }
        assert_eq!(EffectivenessRating::VeryEffective.label(), "Very Effective");
    }

    #[test]
    fn rating_rejects_out_of_scale_values() {
        assert_eq!(
            EffectivenessRating::from_value(0),
            Err(MedAssistError::InvalidRating { value: 0 })
        );
        assert!(EffectivenessRating::from_value(6).is_err());
    }

    #[test]
    fn feedback_rejects_bad_rating_on_deserialize() {
        let bad: Result<Feedback, _> = serde_json::from_str(r#"{"rating":9}"#);
        assert!(bad.is_err());

        let good: Feedback = serde_json::from_str(r#"{"rating":3}"#).unwrap();
        assert_eq!(good.rating, EffectivenessRating::ModeratelyEffective);
        assert_eq!(good.comments, None);
    }

    // ── MedAssistError display messages ──────────────────────────────────────

    #[test]
    fn error_validation_display() {
        let err = MedAssistError::Validation {
            reason: "input is empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("input is empty"));
    }

    #[test]
    fn error_not_found_display() {
        let err = MedAssistError::NotFound {
            key: "unknown disease xyz".to_string(),
        };
        assert!(err.to_string().contains("no information available"));
        assert!(err.to_string().contains("unknown disease xyz"));
    }

    #[test]
    fn error_slot_taken_display() {
        let err = MedAssistError::SlotTaken {
            doctor: "Dr. Michael Chen".to_string(),
            date: "2026-03-02".to_string(),
            time: "10:00 AM".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Dr. Michael Chen"));
        assert!(msg.contains("2026-03-02"));
        assert!(msg.contains("10:00 AM"));
    }

    #[test]
    fn error_output_display() {
        let err = MedAssistError::Output {
            reason: "stdout closed".to_string(),
        };
        assert!(err.to_string().contains("failed to encode output"));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn error_invalid_transition_display() {
        let err = MedAssistError::InvalidTransition {
            id: "abc".to_string(),
            from: "Cancelled".to_string(),
            to: "Completed".to_string(),
        };
        assert!(err.to_string().contains("cannot move from Cancelled to Completed"));
    }
}
