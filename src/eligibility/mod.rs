pub mod batch;
pub mod engine;
pub mod evaluator;

pub use batch::{BatchChecker, BatchSummary};
pub use engine::{CheckEngine, CheckOutcome};
pub use evaluator::{is_eligible, Assessment, EligibilityEvaluator, EligibilityThresholds};
