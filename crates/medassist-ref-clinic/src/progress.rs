//! Treatment progress updates and effectiveness feedback.

use chrono::NaiveDate;
use tracing::info;

use medassist_contracts::{
    error::{MedAssistError, MedAssistResult},
    treatment::{EffectivenessRating, Feedback, ProgressEntry},
};

/// Free-text progress updates, oldest first.
#[derive(Debug, Default)]
pub struct ProgressLog {
    entries: Vec<ProgressEntry>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a progress update. Blank text is rejected.
    pub fn update(&mut self, text: &str, date: NaiveDate) -> MedAssistResult<ProgressEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MedAssistError::Validation {
                reason: "please enter your progress update".to_string(),
            });
        }

        let entry = ProgressEntry {
            date,
            text: text.to_string(),
        };
        info!(date = %date, "progress updated");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }
}

/// Submitted treatment feedback.
#[derive(Debug, Default)]
pub struct FeedbackLog {
    submissions: Vec<Feedback>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating (1-5) with optional comments.
    pub fn submit(&mut self, rating: u8, comments: &str) -> MedAssistResult<Feedback> {
        let rating = EffectivenessRating::from_value(rating)?;
        let comments = comments.trim();
        let feedback = Feedback {
            rating,
            comments: (!comments.is_empty()).then(|| comments.to_string()),
        };

        info!(rating = rating.value(), label = rating.label(), "feedback submitted");
        self.submissions.push(feedback.clone());
        Ok(feedback)
    }

    pub fn submissions(&self) -> &[Feedback] {
        &self.submissions
    }

    /// Mean rating across all submissions, or `None` when there are none.
    pub fn average_rating(&self) -> Option<f64> {
        if self.submissions.is_empty() {
            return None;
        }
        let total: u32 = self
            .submissions
            .iter()
            .map(|f| u32::from(f.rating.value()))
            .sum();
        Some(f64::from(total) / self.submissions.len() as f64)
    }
}
