use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::transcript::types::{StudentClassification, StudentRecord};

/// Minimum GPA and full-time load per classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    pub continuing_graduate_min_gpa: f64,
    pub continuing_undergraduate_min_gpa: f64,
    pub graduate_full_time_hours: f64,
    pub undergraduate_full_time_hours: f64,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            continuing_graduate_min_gpa: 2.5,
            continuing_undergraduate_min_gpa: 2.0,
            graduate_full_time_hours: 9.0,
            undergraduate_full_time_hours: 12.0,
        }
    }
}

impl EligibilityThresholds {
    /// GPA floor for a classification, `None` for new students
    pub fn min_gpa(&self, classification: StudentClassification) -> Option<f64> {
        match classification {
            StudentClassification::ContinuingGraduate => Some(self.continuing_graduate_min_gpa),
            StudentClassification::ContinuingUndergraduate => {
                Some(self.continuing_undergraduate_min_gpa)
            }
            StudentClassification::NewGraduate | StudentClassification::NewUndergraduate => None,
        }
    }

    pub fn full_time_hours(&self, classification: StudentClassification) -> f64 {
        if classification.is_graduate() {
            self.graduate_full_time_hours
        } else {
            self.undergraduate_full_time_hours
        }
    }
}

/// Per-gate breakdown of one eligibility decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub record: StudentRecord,
    pub acceptable_gpa: bool,
    pub full_time: bool,
    pub reason: String,
}

impl Assessment {
    pub fn is_eligible(&self) -> bool {
        self.acceptable_gpa && self.full_time
    }
}

/// Applies the GPA gate and the full-time gate to a parsed record
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    thresholds: EligibilityThresholds,
}

impl EligibilityEvaluator {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &EligibilityThresholds {
        &self.thresholds
    }

    /// Eligible when both the GPA gate and the full-time gate pass
    pub fn is_eligible(&self, record: &StudentRecord) -> bool {
        self.has_acceptable_gpa(record) && self.is_full_time(record)
    }

    /// New students are exempt; the 0.0 sentinel is never compared
    pub fn has_acceptable_gpa(&self, record: &StudentRecord) -> bool {
        match self.thresholds.min_gpa(record.classification) {
            Some(min_gpa) => record.gpa >= min_gpa,
            None => true,
        }
    }

    pub fn is_full_time(&self, record: &StudentRecord) -> bool {
        record.current_credit_hours >= self.thresholds.full_time_hours(record.classification)
    }

    /// Evaluate both gates and explain the outcome
    pub fn assess(&self, record: &StudentRecord) -> Assessment {
        let acceptable_gpa = self.has_acceptable_gpa(record);
        let full_time = self.is_full_time(record);
        let reason = self.reason(record, acceptable_gpa, full_time);

        debug!(
            "Assessed {}: gpa ok = {}, full time = {}",
            record.classification, acceptable_gpa, full_time
        );

        Assessment {
            record: record.clone(),
            acceptable_gpa,
            full_time,
            reason,
        }
    }

    fn reason(&self, record: &StudentRecord, acceptable_gpa: bool, full_time: bool) -> String {
        let full_time_hours = self.thresholds.full_time_hours(record.classification);
        let mut problems = Vec::new();

        if !acceptable_gpa {
            if let Some(min_gpa) = self.thresholds.min_gpa(record.classification) {
                problems.push(format!(
                    "GPA {:.2} is below the {:.2} minimum for {} students",
                    record.gpa, min_gpa, record.classification
                ));
            }
        }

        if !full_time {
            problems.push(format!(
                "{} credit hours is below the {} required for full-time {} students",
                record.current_credit_hours, full_time_hours, record.classification
            ));
        }

        if !problems.is_empty() {
            return problems.join("; ");
        }

        if record.classification.is_new() {
            format!(
                "Eligible: new student (GPA exempt) enrolled in {} credit hours",
                record.current_credit_hours
            )
        } else {
            format!(
                "Eligible: GPA {:.2} with {} credit hours",
                record.gpa, record.current_credit_hours
            )
        }
    }
}

/// Eligibility under the default thresholds
pub fn is_eligible(record: &StudentRecord) -> bool {
    EligibilityEvaluator::default().is_eligible(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use StudentClassification::*;

    #[test]
    fn test_continuing_graduate_boundaries() {
        assert!(is_eligible(&StudentRecord::new(ContinuingGraduate, 2.5, 9.0)));
        assert!(!is_eligible(&StudentRecord::new(ContinuingGraduate, 2.49, 9.0)));
        assert!(!is_eligible(&StudentRecord::new(ContinuingGraduate, 2.5, 8.0)));
    }

    #[test]
    fn test_continuing_undergraduate_boundaries() {
        assert!(is_eligible(&StudentRecord::new(ContinuingUndergraduate, 2.0, 12.0)));
        assert!(!is_eligible(&StudentRecord::new(ContinuingUndergraduate, 1.99, 12.0)));
        assert!(!is_eligible(&StudentRecord::new(ContinuingUndergraduate, 4.0, 11.0)));
    }

    #[test]
    fn test_new_students_are_gpa_exempt() {
        assert!(is_eligible(&StudentRecord::new(NewUndergraduate, 0.0, 12.0)));
        assert!(!is_eligible(&StudentRecord::new(NewUndergraduate, 0.0, 11.0)));
        assert!(is_eligible(&StudentRecord::new(NewGraduate, 0.0, 9.0)));
        assert!(!is_eligible(&StudentRecord::new(NewGraduate, 0.0, 8.0)));
    }

    #[test]
    fn test_graduate_full_time_is_lower() {
        let evaluator = EligibilityEvaluator::default();
        assert!(evaluator.is_full_time(&StudentRecord::new(ContinuingGraduate, 3.0, 10.0)));
        assert!(!evaluator.is_full_time(&StudentRecord::new(ContinuingUndergraduate, 3.0, 10.0)));
    }

    #[test]
    fn test_custom_thresholds() {
        let evaluator = EligibilityEvaluator::new(EligibilityThresholds {
            continuing_graduate_min_gpa: 3.0,
            ..EligibilityThresholds::default()
        });
        assert!(!evaluator.is_eligible(&StudentRecord::new(ContinuingGraduate, 2.5, 9.0)));
        assert!(evaluator.is_eligible(&StudentRecord::new(ContinuingGraduate, 3.0, 9.0)));
    }

    #[test]
    fn test_assess_reports_each_gate() {
        let evaluator = EligibilityEvaluator::default();
        let assessment = evaluator.assess(&StudentRecord::new(ContinuingUndergraduate, 1.5, 6.0));

        assert!(!assessment.acceptable_gpa);
        assert!(!assessment.full_time);
        assert!(!assessment.is_eligible());
        assert!(assessment.reason.contains("GPA 1.50"));
        assert!(assessment.reason.contains("6 credit hours"));
    }

    #[test]
    fn test_assess_eligible_new_student() {
        let assessment =
            EligibilityEvaluator::default().assess(&StudentRecord::new(NewGraduate, 0.0, 9.0));

        assert!(assessment.is_eligible());
        assert!(assessment.reason.contains("GPA exempt"));
    }
}
