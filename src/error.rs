use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Transcript section not found: {0}")]
    MissingSection(&'static str),

    #[error("Unrecognized student type: {0:?}")]
    UnrecognizedClassification(String),

    #[error("Invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TranscriptError>;
