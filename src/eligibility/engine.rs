use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    eligibility::evaluator::{Assessment, EligibilityEvaluator},
    error::Result,
    extract::{self, PdfTextExtractor, PlainTextExtractor, TextExtractor},
    transcript::{parser::TranscriptParser, types::StudentRecord},
};

/// Final result of checking one transcript
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Eligible(Assessment),
    NotEligible(Assessment),
    /// The transcript could not be processed. Never a verdict.
    Failed { reason: String },
}

impl CheckOutcome {
    pub fn from_result(result: Result<Assessment>) -> Self {
        match result {
            Ok(assessment) if assessment.is_eligible() => CheckOutcome::Eligible(assessment),
            Ok(assessment) => CheckOutcome::NotEligible(assessment),
            Err(e) => CheckOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, CheckOutcome::Eligible(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CheckOutcome::Failed { .. })
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match self {
            CheckOutcome::Eligible(assessment) | CheckOutcome::NotEligible(assessment) => {
                Some(assessment)
            }
            CheckOutcome::Failed { .. } => None,
        }
    }
}

/// Runs extract -> parse -> evaluate for a single document
pub struct CheckEngine {
    extractor: Box<dyn TextExtractor>,
    extension: &'static str,
    evaluator: EligibilityEvaluator,
}

impl CheckEngine {
    pub fn new(
        extractor: Box<dyn TextExtractor>,
        extension: &'static str,
        evaluator: EligibilityEvaluator,
    ) -> Self {
        Self {
            extractor,
            extension,
            evaluator,
        }
    }

    /// Accepts `.pdf` uploads and extracts their text
    pub fn pdf(evaluator: EligibilityEvaluator) -> Self {
        Self::new(Box::new(PdfTextExtractor), "pdf", evaluator)
    }

    /// Accepts `.txt` files holding an already-extracted transcript
    pub fn plain_text(evaluator: EligibilityEvaluator) -> Self {
        Self::new(Box::new(PlainTextExtractor), "txt", evaluator)
    }

    pub fn evaluator(&self) -> &EligibilityEvaluator {
        &self.evaluator
    }

    /// Parse and assess extracted transcript text
    pub fn check_text(&self, text: &str) -> Result<Assessment> {
        let record = TranscriptParser::parse(text)?;
        Ok(self.evaluator.assess(&record))
    }

    pub fn check_bytes(&self, bytes: &[u8]) -> Result<Assessment> {
        let text = self.extract(bytes)?;
        self.check_text(&text)
    }

    pub fn check_file(&self, path: &Path) -> Result<Assessment> {
        let record = self.parse_file(path)?;
        Ok(self.evaluator.assess(&record))
    }

    /// Extract and parse a file without evaluating it
    pub fn parse_file(&self, path: &Path) -> Result<StudentRecord> {
        extract::ensure_extension(path, self.extension)?;

        info!("Reading transcript: {}", path.display());
        let bytes = fs::read(path)?;
        let text = self.extract(&bytes)?;
        TranscriptParser::parse(&text)
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        if self.extension == "pdf" && !extract::looks_like_pdf(bytes) {
            warn!("Upload has a .pdf name but no PDF header");
        }

        self.extractor.extract_text(bytes)
    }

    /// Check a file and fold any failure into `CheckOutcome::Failed`
    pub fn outcome_for_file(&self, path: &Path) -> CheckOutcome {
        let outcome = CheckOutcome::from_result(self.check_file(path));

        if let CheckOutcome::Failed { reason } = &outcome {
            warn!("Could not process {}: {}", path.display(), reason);
        }

        outcome
    }
}
