//! The table seam of the lookup engine.
//!
//! Both the symptom table and the treatment table answer the same
//! operation, but differ in how they normalize input and what they do when
//! a key is missing. Those two points are the trait's hooks; everything
//! else lives in `engine`.

use medassist_contracts::{error::MedAssistResult, lookup::QueryResult};

/// A read-only, exact-match table.
///
/// Implementations are built once at startup and never mutated, so they
/// must be shareable across threads without locks.
pub trait LookupTable: Send + Sync {
    /// Short name used in log events, e.g. `"symptoms"`.
    fn name(&self) -> &str;

    /// Turn raw user input into the key form the table is indexed by.
    ///
    /// Must be deterministic. The engine only calls this for input that is
    /// non-empty after trimming.
    fn normalize(&self, raw: &str) -> String;

    /// Return the stored record for an already-normalized key.
    fn lookup(&self, key: &str) -> Option<QueryResult>;

    /// Decide what a miss means for this table: a fallback answer or an
    /// error.
    fn on_miss(&self, key: &str) -> MedAssistResult<QueryResult>;
}
