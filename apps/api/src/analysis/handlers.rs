//! Axum route handlers for the Analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::analysis::report::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::extraction::extract_text_from_pdf_bytes;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Accepts a multipart upload with a `file` field holding a PDF, extracts
/// its text in memory, and returns the analysis report. The filename is
/// deliberately ignored; only the declared content type is validated.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut pdf_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if field.content_type() != Some("application/pdf") {
            return Err(AppError::Validation(
                "Invalid file type. Only PDF files are allowed.".to_string(),
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        pdf_bytes = Some(bytes);
        break;
    }

    let pdf_bytes =
        pdf_bytes.ok_or_else(|| AppError::Validation("No 'file' field in upload".to_string()))?;
    if pdf_bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    info!("Extracting text from uploaded PDF ({} bytes)", pdf_bytes.len());
    let text = extract_text_from_pdf_bytes(&pdf_bytes)?;

    if text.trim().chars().count() < state.config.min_text_chars {
        return Err(AppError::Extraction(
            "Could not extract enough text. This PDF may be image-based or corrupted.".to_string(),
        ));
    }

    info!("Analyzing resume ({} extracted chars)", text.len());
    Ok(Json(analyze(&text)))
}
