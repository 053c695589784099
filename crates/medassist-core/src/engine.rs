//! The lookup engine.
//!
//! Every query follows the same pipeline:
//!
//!   Validate → Normalize → Exact-match lookup → (miss) table-specific policy
//!
//! Empty or whitespace-only input is rejected before the table is touched.
//! Matching is character-for-character on the normalized key: no partial
//! matching, stemming, synonyms, or symptom-set comparison. A symptom list
//! entered in a different order than the stored key is a miss.

use tracing::{debug, warn};

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    lookup::QueryResult,
};

use crate::traits::LookupTable;

/// Normalize a comma-joined symptom list: lowercase, then drop every
/// whitespace character. Commas and ordering are preserved.
///
/// `"Fever, Cough, Fatigue"` → `"fever,cough,fatigue"`
pub fn normalize_symptoms(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Normalize a disease name: lowercase and trim. Inner spaces are kept
/// because disease names such as `"common cold"` contain them.
pub fn normalize_disease(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Answer `raw_input` from `table`.
///
/// # Errors
///
/// - `MedAssistError::Validation` if the input is empty after trimming. The
///   table is never consulted in that case.
/// - Whatever the table's `on_miss` returns for an unknown key
///   (`MedAssistError::NotFound` for the treatment table).
pub fn query<T: LookupTable + ?Sized>(raw_input: &str, table: &T) -> MedAssistResult<QueryResult> {
    if raw_input.trim().is_empty() {
        warn!(table = %table.name(), "rejected empty lookup input");
        return Err(MedAssistError::Validation {
            reason: "please describe your symptoms or condition first".to_string(),
        });
    }

    let key = table.normalize(raw_input);

    match table.lookup(&key) {
        Some(result) => {
            debug!(table = %table.name(), key = %key, "lookup hit");
            Ok(result)
        }
        None => {
            debug!(table = %table.name(), key = %key, "lookup miss");
            table.on_miss(&key)
        }
    }
}

/// Answer `raw_input` from `table`, folding errors into the status field.
///
/// This is the call contract presentation code consumes: it always returns
/// one of `ok`, `not_found`, or `invalid_input` and never fails.
pub fn respond<T: LookupTable + ?Sized>(raw_input: &str, table: &T) -> QueryResult {
    match query(raw_input, table) {
        Ok(result) => result,
        Err(MedAssistError::Validation { .. }) => QueryResult::invalid_input(),
        Err(MedAssistError::NotFound { .. }) => QueryResult::not_found(),
        Err(other) => {
            warn!(table = %table.name(), error = %other, "lookup failed, reporting not_found");
            QueryResult::not_found()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use medassist_contracts::{
        error::{MedAssistError, MedAssistResult},
        lookup::{QueryResult, QueryStatus},
    };

    use crate::traits::LookupTable;

    use super::*;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// A table that counts every normalize/lookup call.
    struct MockTable {
        rows: HashMap<String, QueryResult>,
        calls: Arc<Mutex<u32>>,
        fallback: bool,
    }

    impl MockTable {
        fn new(fallback: bool) -> Self {
            let mut rows = HashMap::new();
            rows.insert(
                "fever,cough,fatigue".to_string(),
                QueryResult::ok(
                    Some(0.85),
                    vec!["COVID-19".to_string(), "Flu".to_string(), "Common Cold".to_string()],
                ),
            );
            Self {
                rows,
                calls: Arc::new(Mutex::new(0)),
                fallback,
            }
        }
    }

    impl LookupTable for MockTable {
        fn name(&self) -> &str {
            "mock"
        }

        fn normalize(&self, raw: &str) -> String {
            *self.calls.lock().unwrap() += 1;
            normalize_symptoms(raw)
        }

        fn lookup(&self, key: &str) -> Option<QueryResult> {
            *self.calls.lock().unwrap() += 1;
            self.rows.get(key).cloned()
        }

        fn on_miss(&self, key: &str) -> MedAssistResult<QueryResult> {
            if self.fallback {
                Ok(QueryResult::ok(Some(0.6), vec!["see a doctor".to_string()]))
            } else {
                Err(MedAssistError::NotFound { key: key.to_string() })
            }
        }
    }

    /// A table whose miss policy reports a non-lookup error.
    struct BrokenTable;

    impl LookupTable for BrokenTable {
        fn name(&self) -> &str {
            "broken"
        }

        fn normalize(&self, raw: &str) -> String {
            raw.to_string()
        }

        fn lookup(&self, _key: &str) -> Option<QueryResult> {
            None
        }

        fn on_miss(&self, _key: &str) -> MedAssistResult<QueryResult> {
            Err(MedAssistError::ConfigError {
                reason: "table not loaded".to_string(),
            })
        }
    }

    // ── Normalization ────────────────────────────────────────────────────────

    #[test]
    fn normalize_symptoms_strips_all_whitespace() {
        assert_eq!(normalize_symptoms("Fever, Cough,\tFatigue "), "fever,cough,fatigue");
        assert_eq!(normalize_symptoms("Sore Throat"), "sorethroat");
    }

    #[test]
    fn normalize_symptoms_keeps_order_and_commas() {
        assert_eq!(normalize_symptoms("cough, fever"), "cough,fever");
        assert_ne!(normalize_symptoms("cough,fever"), normalize_symptoms("fever,cough"));
    }

    #[test]
    fn normalize_disease_keeps_inner_spaces() {
        assert_eq!(normalize_disease("  Common Cold \n"), "common cold");
        assert_eq!(normalize_disease("FLU"), "flu");
    }

    // ── query ────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_input_never_touches_table() {
        let table = MockTable::new(true);
        let calls = table.calls.clone();

        for input in ["", "   ", "\t\n"] {
            match query(input, &table) {
                Err(MedAssistError::Validation { .. }) => {}
                other => panic!("expected Validation for {:?}, got {:?}", input, other),
            }
        }

        assert_eq!(*calls.lock().unwrap(), 0, "table must not be consulted on empty input");
    }

    #[test]
    fn test_hit_returns_stored_record_unchanged() {
        let table = MockTable::new(true);
        let result = query("fever,cough,fatigue", &table).unwrap();

        assert_eq!(result, table.rows["fever,cough,fatigue"]);
    }

    #[test]
    fn test_case_insensitive_inputs_share_a_key() {
        let table = MockTable::new(true);
        let upper = query("Fever,Cough,Fatigue", &table).unwrap();
        let lower = query("fever,cough,fatigue", &table).unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.confidence, Some(0.85));
    }

    #[test]
    fn test_reordered_symptoms_miss() {
        let table = MockTable::new(false);
        assert!(matches!(
            query("cough,fever,fatigue", &table),
            Err(MedAssistError::NotFound { .. })
        ));
    }

    #[test]
    fn test_miss_uses_table_policy() {
        let with_fallback = MockTable::new(true);
        let result = query("sore throat", &with_fallback).unwrap();
        assert_eq!(result.confidence, Some(0.6));

        let without_fallback = MockTable::new(false);
        match query("sore throat", &without_fallback) {
            Err(MedAssistError::NotFound { key }) => assert_eq!(key, "sorethroat"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_query_is_deterministic() {
        let table = MockTable::new(true);
        let first = query("Fever, Cough, Fatigue", &table);
        let second = query("Fever, Cough, Fatigue", &table);
        assert_eq!(first, second);
    }

    // ── respond ──────────────────────────────────────────────────────────────

    #[test]
    fn test_respond_maps_errors_to_status() {
        let table = MockTable::new(false);

        assert_eq!(respond("", &table).status, QueryStatus::InvalidInput);
        assert_eq!(respond("nothing here", &table).status, QueryStatus::NotFound);
        assert_eq!(respond("fever,cough,fatigue", &table).status, QueryStatus::Ok);
    }

    #[test]
    fn test_respond_error_results_carry_no_recommendations() {
        let table = MockTable::new(false);

        let invalid = respond("  ", &table);
        assert!(invalid.recommendations.is_empty());
        assert_eq!(invalid.confidence, None);

        let missing = respond("unknown", &table);
        assert!(missing.recommendations.is_empty());
    }

    #[test]
    fn test_respond_folds_unexpected_errors_into_not_found() {
        assert_eq!(respond("anything", &BrokenTable).status, QueryStatus::NotFound);
    }
}
