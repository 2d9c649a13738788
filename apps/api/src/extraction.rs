//! In-memory PDF text extraction.
//!
//! Works on the uploaded bytes only: no file paths, no temp files.
//! Extraction failure is a client-visible error, never a panic; scanned or
//! corrupted documents are rejected before the analyzer runs.

use tracing::warn;

use crate::errors::AppError;

/// Extracts plain text from PDF bytes.
pub fn extract_text_from_pdf_bytes(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::Extraction(
            "Failed to extract text from PDF. It may be scanned or corrupted.".to_string(),
        )
    })
}
