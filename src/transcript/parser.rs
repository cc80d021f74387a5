use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    error::{Result, TranscriptError},
    transcript::types::{StudentClassification, StudentRecord},
};

const STUDENT_TYPE_LABEL: &str = "Student Type";
const CREDIT_HOURS_LABEL: &str = "Credit Hours";
const GPA_LABEL: &str = "GPA";

/// Label line followed by the classification line
static STUDENT_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Student Type\n(.*)\n").expect("Failed to create student type regex"));

/// A course credit value such as "3.000". "0.000" placeholders never match.
static CREDIT_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[1-9]*[1-9]\.000").expect("Failed to create credit value regex"));

/// The overall GPA block is the only one with a blank line after the label
/// (the level qualifier adds it), followed by three fixed-width values.
static OVERALL_GPA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"GPA\n\n.{4}\n.{4}\n.{4}\n").expect("Failed to create overall GPA regex")
});

/// Characters between the GPA value and the end of the matched block
const GPA_TAIL: usize = 1;
const GPA_WIDTH: usize = 4;

/// Turns the text rendering of an unofficial transcript into a `StudentRecord`
pub struct TranscriptParser;

impl TranscriptParser {
    /// Parse classification, current credit hours and (for continuing
    /// students) the cumulative GPA
    pub fn parse(text: &str) -> Result<StudentRecord> {
        let classification = Self::classification(text)?;
        let current_credit_hours = Self::credit_hours(text);

        let gpa = if classification.is_new() {
            0.0
        } else {
            Self::gpa(text)?
        };

        debug!(
            "Parsed transcript: {} / GPA {:.2} / {} credit hours",
            classification, gpa, current_credit_hours
        );

        Ok(StudentRecord::new(classification, gpa, current_credit_hours))
    }

    /// Read the line following the first "Student Type" label
    pub fn classification(text: &str) -> Result<StudentClassification> {
        let captures = STUDENT_TYPE_RE
            .captures(text)
            .ok_or(TranscriptError::MissingSection(STUDENT_TYPE_LABEL))?;

        let raw = captures.get(1).map_or("", |m| m.as_str());
        debug!("Found student type {:?}", raw);

        raw.parse()
    }

    /// Sum every course credit value after the first "Credit Hours" label.
    ///
    /// Never fails: a missing label or no credit values yields 0.
    pub fn credit_hours(text: &str) -> f64 {
        let Some(start) = text.find(CREDIT_HOURS_LABEL) else {
            debug!("No {:?} label found, assuming no current courses", CREDIT_HOURS_LABEL);
            return 0.0;
        };
        let window = &text[start + CREDIT_HOURS_LABEL.len()..];

        CREDIT_VALUE_RE
            .find_iter(window)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .sum()
    }

    /// Cumulative GPA read from the fixed-width overall GPA block
    pub fn gpa(text: &str) -> Result<f64> {
        let field = Self::gpa_field(text)?;

        field
            .trim()
            .parse::<f64>()
            .map_err(|_| TranscriptError::InvalidNumber {
                field: GPA_LABEL,
                value: field.clone(),
            })
    }

    /// Raw 4-character GPA value: 5 characters back from the end of the
    /// overall GPA block, 4 characters long.
    ///
    /// Offsets are fixed to the one known layout; any shift in the extracted
    /// text yields a wrong value rather than an error.
    pub fn gpa_field(text: &str) -> Result<String> {
        let block = OVERALL_GPA_RE
            .find(text)
            .ok_or(TranscriptError::MissingSection(GPA_LABEL))?;

        let chars: Vec<char> = block.as_str().chars().collect();
        let end = chars.len() - GPA_TAIL;
        let field: String = chars[end - GPA_WIDTH..end].iter().collect();

        debug!("Found overall GPA field {:?}", field);
        Ok(field)
    }
}

/// Shorthand for [`TranscriptParser::parse`]
pub fn parse(text: &str) -> Result<StudentRecord> {
    TranscriptParser::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transcript(student_type: &str) -> String {
        format!(
            "Unofficial Transcript\n\
             Student Information\n\
             Student Type\n\
             {student_type}\n\
             Residency\n\
             Resident\n\
             Term GPA\n\
             3.10\n\
             Overall GPA\n\
             GPA\n\
             \n\
             2.00\n\
             3.50\n\
             3.75\n\
             Courses in Progress\n\
             Credit Hours\n\
             CS 1010 Intro 3.000\n\
             MATH 2210 Calculus 4.000\n\
             LAB 0001 Orientation 0.000\n\
             HIST 1700 History 3.000\n\
             ENGL 2010 Writing 3.000\n"
        )
    }

    #[test]
    fn test_parse_new_student_ignores_gpa() {
        let record = parse(&sample_transcript("New Undergraduate")).unwrap();

        assert_eq!(record.classification, StudentClassification::NewUndergraduate);
        assert_eq!(record.gpa, 0.0);
        assert_eq!(record.current_credit_hours, 13.0);
    }

    #[test]
    fn test_parse_new_student_without_gpa_block() {
        let text = "Student Type\nNew Graduate\nCredit Hours\n3.000\n3.000\n3.000\n";
        let record = parse(text).unwrap();

        assert_eq!(record.classification, StudentClassification::NewGraduate);
        assert_eq!(record.gpa, 0.0);
        assert_eq!(record.current_credit_hours, 9.0);
    }

    #[test]
    fn test_parse_continuing_student_reads_gpa() {
        let record = parse(&sample_transcript("Continuing Undergraduate")).unwrap();

        assert_eq!(record.classification, StudentClassification::ContinuingUndergraduate);
        assert_eq!(record.gpa, 3.75);
        assert_eq!(record.current_credit_hours, 13.0);
    }

    #[test]
    fn test_continuing_student_without_gpa_block() {
        let text = "Student Type\nContinuing Graduate\nCredit Hours\n3.000\n";
        let err = parse(text).unwrap_err();

        assert!(matches!(err, TranscriptError::MissingSection("GPA")));
    }

    #[test]
    fn test_missing_student_type() {
        let err = parse("Credit Hours\n3.000\n").unwrap_err();
        assert!(matches!(err, TranscriptError::MissingSection("Student Type")));
    }

    #[test]
    fn test_unrecognized_student_type() {
        let err = parse("Student Type\nFreshman\nCredit Hours\n3.000\n").unwrap_err();
        assert!(matches!(err, TranscriptError::UnrecognizedClassification(ref raw) if raw == "Freshman"));
    }

    #[test]
    fn test_first_student_type_wins() {
        let text = "Student Type\nNew Graduate\nStudent Type\nContinuing Graduate\n";
        assert_eq!(
            TranscriptParser::classification(text).unwrap(),
            StudentClassification::NewGraduate
        );
    }

    #[test]
    fn test_credit_hours_skip_zero_placeholders() {
        let text = "Credit Hours\n3.000\n0.000\n4.000\nDone";
        assert_eq!(TranscriptParser::credit_hours(text), 7.0);
    }

    #[test]
    fn test_credit_hours_without_values() {
        assert_eq!(TranscriptParser::credit_hours("Credit Hours\nNone in progress\n"), 0.0);
        assert_eq!(TranscriptParser::credit_hours("no label here 3.000"), 0.0);
    }

    #[test]
    fn test_credit_hours_only_after_label() {
        let text = "Earned 45.000\nCredit Hours\n3.000\n";
        assert_eq!(TranscriptParser::credit_hours(text), 3.0);
    }

    #[test]
    fn test_credit_hours_multi_digit_values() {
        // Only non-zero digits qualify, so "10.000" is not a course credit
        let text = "Credit Hours\n12.000\n10.000\n";
        assert_eq!(TranscriptParser::credit_hours(text), 12.0);
    }

    #[test]
    fn test_gpa_field_fixed_offset() {
        let text = "Overall\nGPA\n\n2.00\n3.50\n3.75\nDean's List\n";
        assert_eq!(TranscriptParser::gpa_field(text).unwrap(), "3.75");
        assert_eq!(TranscriptParser::gpa(text).unwrap(), 3.75);
    }

    #[test]
    fn test_gpa_block_requires_fixed_width_lines() {
        let text = "GPA\n\nUndergraduate\n3.75\nDean's List\n";
        assert!(matches!(
            TranscriptParser::gpa_field(text),
            Err(TranscriptError::MissingSection("GPA"))
        ));
    }

    #[test]
    fn test_gpa_block_needs_blank_line() {
        let text = "Term GPA\n2.00\n3.50\n3.75\n";
        assert!(TranscriptParser::gpa(text).is_err());
    }

    #[test]
    fn test_gpa_non_numeric_field() {
        let text = "GPA\n\nabcd\nefgh\nN/A!\n";
        let err = TranscriptParser::gpa(text).unwrap_err();
        assert!(matches!(err, TranscriptError::InvalidNumber { field: "GPA", ref value } if value == "N/A!"));
    }

    #[test]
    fn test_gpa_offsets_count_characters() {
        let text = "GPA\n\nÉtat\n2.00\n3.25\n";
        assert_eq!(TranscriptParser::gpa_field(text).unwrap(), "3.25");
    }
}
