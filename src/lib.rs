//! Reads the plain-text rendering of an unofficial transcript and decides
//! whether the student meets the GPA and full-time enrollment requirements.
//!
//! The core is two pure steps: [`TranscriptParser::parse`] turns text into a
//! [`StudentRecord`], and [`EligibilityEvaluator`] turns that record into a
//! verdict. Everything else (PDF extraction, audit lines, config) sits around
//! them.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod report;
pub mod transcript;
pub mod utils;

pub use crate::config::Config;
pub use crate::eligibility::{is_eligible, EligibilityEvaluator};
pub use crate::error::{Result, TranscriptError};
pub use crate::transcript::{parse, StudentClassification, StudentRecord, TranscriptParser};
