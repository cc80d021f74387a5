pub mod parser;
pub mod types;

pub use parser::{parse, TranscriptParser};
pub use types::{StudentClassification, StudentRecord};
