//! Treatment progress and feedback types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MedAssistError, MedAssistResult};

/// One free-text progress update from the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub text: String,
}

/// How effective the patient found a treatment, on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EffectivenessRating {
    NotEffective = 1,
    SlightlyEffective = 2,
    ModeratelyEffective = 3,
    VeryEffective = 4,
    ExtremelyEffective = 5,
}

impl EffectivenessRating {
    pub fn from_value(value: u8) -> MedAssistResult<Self> {
        match value {
            1 => Ok(Self::NotEffective),
            2 => Ok(Self::SlightlyEffective),
            3 => Ok(Self::ModeratelyEffective),
            4 => Ok(Self::VeryEffective),
            5 => Ok(Self::ExtremelyEffective),
            _ => Err(MedAssistError::InvalidRating { value }),
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotEffective => "Not Effective",
            Self::SlightlyEffective => "Slightly Effective",
            Self::ModeratelyEffective => "Moderately Effective",
            Self::VeryEffective => "Very Effective",
            Self::ExtremelyEffective => "Extremely Effective",
        }
    }
}

impl TryFrom<u8> for EffectivenessRating {
    type Error = MedAssistError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<EffectivenessRating> for u8 {
    fn from(rating: EffectivenessRating) -> Self {
        rating.value()
    }
}

/// Submitted treatment feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: EffectivenessRating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
