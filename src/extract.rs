//! PDF-to-text conversion, kept behind a trait so the checking pipeline can
//! run against any text source.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, TranscriptError};

/// Turns an uploaded document into its plain-text rendering
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// `pdf-extract` backed extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| TranscriptError::Extraction(e.to_string()))?;

        debug!("Extracted {} characters from {} PDF bytes", text.chars().count(), bytes.len());
        Ok(text)
    }
}

/// Passes already-extracted UTF-8 text through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| TranscriptError::Extraction(format!("transcript text is not UTF-8: {}", e)))
    }
}

/// Reject anything that is not named `*.pdf`
pub fn ensure_pdf(path: &Path) -> Result<()> {
    ensure_extension(path, "pdf")
}

/// Reject files whose extension does not match (case-insensitive)
pub fn ensure_extension(path: &Path, expected: &str) -> Result<()> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected));

    if matches {
        Ok(())
    } else {
        Err(TranscriptError::UnsupportedFile(format!(
            "{} is not a .{} file",
            path.display(),
            expected
        )))
    }
}

/// Returns true if the bytes start with the PDF magic header
pub fn looks_like_pdf(head: &[u8]) -> bool {
    head.starts_with(b"%PDF-")
}
