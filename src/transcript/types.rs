use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TranscriptError;

/// Student status as printed under the "Student Type" label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentClassification {
    NewUndergraduate,
    ContinuingUndergraduate,
    NewGraduate,
    ContinuingGraduate,
}

impl StudentClassification {
    pub const ALL: [StudentClassification; 4] = [
        StudentClassification::NewUndergraduate,
        StudentClassification::ContinuingUndergraduate,
        StudentClassification::NewGraduate,
        StudentClassification::ContinuingGraduate,
    ];

    /// New students have no cumulative GPA yet
    pub fn is_new(&self) -> bool {
        matches!(
            self,
            StudentClassification::NewUndergraduate | StudentClassification::NewGraduate
        )
    }

    pub fn is_undergraduate(&self) -> bool {
        matches!(
            self,
            StudentClassification::NewUndergraduate | StudentClassification::ContinuingUndergraduate
        )
    }

    pub fn is_graduate(&self) -> bool {
        matches!(
            self,
            StudentClassification::NewGraduate | StudentClassification::ContinuingGraduate
        )
    }

    /// Normalized key form: spaces become underscores, upper-cased
    pub fn key(&self) -> &'static str {
        match self {
            StudentClassification::NewUndergraduate => "NEW_UNDERGRADUATE",
            StudentClassification::ContinuingUndergraduate => "CONTINUING_UNDERGRADUATE",
            StudentClassification::NewGraduate => "NEW_GRADUATE",
            StudentClassification::ContinuingGraduate => "CONTINUING_GRADUATE",
        }
    }
}

impl FromStr for StudentClassification {
    type Err = TranscriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.replace(' ', "_").to_uppercase();

        Self::ALL
            .into_iter()
            .find(|classification| classification.key() == normalized)
            .ok_or_else(|| TranscriptError::UnrecognizedClassification(raw.to_string()))
    }
}

impl fmt::Display for StudentClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StudentClassification::NewUndergraduate => "New Undergraduate",
            StudentClassification::ContinuingUndergraduate => "Continuing Undergraduate",
            StudentClassification::NewGraduate => "New Graduate",
            StudentClassification::ContinuingGraduate => "Continuing Graduate",
        };
        write!(f, "{}", label)
    }
}

/// Eligibility facts parsed from one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub classification: StudentClassification,
    /// Cumulative GPA. Always 0.0 for new students.
    pub gpa: f64,
    /// Sum of the course credit values listed for the current term
    pub current_credit_hours: f64,
}

impl StudentRecord {
    pub fn new(classification: StudentClassification, gpa: f64, current_credit_hours: f64) -> Self {
        Self {
            classification,
            gpa,
            current_credit_hours,
        }
    }
}
