use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::info;

use crate::eligibility::engine::{CheckEngine, CheckOutcome};

/// Checks several transcripts one after another
pub struct BatchChecker<'a> {
    engine: &'a CheckEngine,
}

impl<'a> BatchChecker<'a> {
    pub fn new(engine: &'a CheckEngine) -> Self {
        Self { engine }
    }

    /// Check every file. A failure on one file never stops the rest.
    pub fn check_all<P: AsRef<Path>>(&self, paths: &[P]) -> BatchSummary {
        info!("Checking {} transcript(s)", paths.len());

        let mut summary = BatchSummary::default();
        for path in paths {
            let path = path.as_ref();
            let outcome = self.engine.outcome_for_file(path);
            summary.record(path.to_path_buf(), outcome);
        }

        info!(
            "Batch complete: {} eligible, {} not eligible, {} failed",
            summary.eligible, summary.not_eligible, summary.failed
        );

        summary
    }
}

/// Tally of a batch of transcript checks
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub eligible: usize,
    pub not_eligible: usize,
    pub failed: usize,
    pub results: Vec<(PathBuf, CheckOutcome)>,
}

impl BatchSummary {
    pub fn record(&mut self, path: PathBuf, outcome: CheckOutcome) {
        self.total += 1;
        match outcome {
            CheckOutcome::Eligible(_) => self.eligible += 1,
            CheckOutcome::NotEligible(_) => self.not_eligible += 1,
            CheckOutcome::Failed { .. } => self.failed += 1,
        }
        self.results.push((path, outcome));
    }

    /// Print a formatted summary to console
    pub fn print_summary(&self) {
        println!("\n{}", "=== Transcript Check Summary ===".cyan().bold());
        println!("Total:         {}", self.total);
        println!("Eligible:      {} ✓", self.eligible.to_string().green());
        println!("Not eligible:  {} ✗", self.not_eligible.to_string().red());
        println!("Failed:        {} ⚠", self.failed.to_string().yellow());
        println!("{}", "================================".cyan());
    }

    /// Share of processed transcripts that came out eligible, as a percentage
    pub fn eligibility_rate(&self) -> f64 {
        let processed = self.eligible + self.not_eligible;
        if processed == 0 {
            0.0
        } else {
            (self.eligible as f64 / processed as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::evaluator::EligibilityEvaluator;
    use std::fs;

    #[test]
    fn test_batch_counts_each_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let eligible = dir.path().join("eligible.txt");
        let not_eligible = dir.path().join("part_time.txt");
        let broken = dir.path().join("broken.txt");

        fs::write(&eligible, "Student Type\nNew Graduate\nCredit Hours\n3.000\n3.000\n3.000\n").unwrap();
        fs::write(&not_eligible, "Student Type\nNew Graduate\nCredit Hours\n3.000\n").unwrap();
        fs::write(&broken, "Course Schedule\n").unwrap();

        let engine = CheckEngine::plain_text(EligibilityEvaluator::default());
        let summary = BatchChecker::new(&engine).check_all(&[
            eligible,
            not_eligible,
            broken,
            dir.path().join("missing.txt"),
        ]);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.eligible, 1);
        assert_eq!(summary.not_eligible, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.eligibility_rate(), 50.0);
    }

    #[test]
    fn test_empty_batch() {
        let summary = BatchSummary::default();
        assert_eq!(summary.eligibility_rate(), 0.0);
    }
}
