use crate::eligibility::engine::CheckOutcome;

pub const ELIGIBLE_RESPONSE: &str = "Success! Your eligibility has been logged ✅";
pub const NOT_ELIGIBLE_RESPONSE: &str =
    "You are not eligible. Please contact an officer if you believe this was a mistake.";
pub const FAILED_RESPONSE: &str =
    "We could not process your transcript. Please make sure you uploaded your unofficial transcript PDF.";

/// Message shown to the student who submitted the transcript
pub fn user_response(outcome: &CheckOutcome) -> &'static str {
    match outcome {
        CheckOutcome::Eligible(_) => ELIGIBLE_RESPONSE,
        CheckOutcome::NotEligible(_) => NOT_ELIGIBLE_RESPONSE,
        CheckOutcome::Failed { .. } => FAILED_RESPONSE,
    }
}

/// Operator-facing line recording the outcome for `requester`
pub fn audit_message(requester: &str, outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Eligible(_) => format!("{} is eligible ✅", requester),
        CheckOutcome::NotEligible(assessment) => {
            format!("{} is not eligible ❌ ({})", requester, assessment.reason)
        }
        CheckOutcome::Failed { reason } => {
            format!("{} transcript could not be processed ⚠️ ({})", requester, reason)
        }
    }
}

/// GPA with two decimals, or "exempt" for new students
pub fn format_gpa(gpa: f64, is_new: bool) -> String {
    if is_new {
        "exempt".to_string()
    } else {
        format!("{:.2}", gpa)
    }
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.1} hrs", hours)
}
