//! PDF text extraction.

use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resume::upload::ResumeDocument;

/// Extracts the text of every page, concatenated, from an in-memory PDF.
/// Parsing runs on the blocking pool.
pub async fn extract_pdf_text(pdf: Bytes) -> Result<String, AppError> {
    let size = pdf.len();
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&pdf).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            AppError::UnprocessableEntity("The uploaded PDF could not be parsed".to_string())
        } else {
            AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
        }
    })?;

    let raw = extracted.map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::UnprocessableEntity(format!("The uploaded PDF could not be read: {e}"))
    })?;

    let text = tidy_text(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The uploaded PDF contains no extractable text".to_string(),
        ));
    }

    info!("Extracted {} chars of text from a {size}-byte PDF", text.len());
    Ok(text)
}

/// Text for flows that need plain text; image résumés are only scored by the vision model.
pub async fn resume_text(document: &ResumeDocument) -> Result<String, AppError> {
    match document {
        ResumeDocument::Pdf(bytes) => extract_pdf_text(bytes.clone()).await,
        ResumeDocument::Image(_) => Err(AppError::Validation(
            "Image résumés are only supported for ATS evaluation. Please upload a PDF".to_string(),
        )),
    }
}

/// Trims trailing whitespace per line and collapses runs of blank lines.
fn tidy_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0;

    for line in raw.lines() {
        let line = line.trim_end().trim_start_matches('\u{c}');
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    out.trim().to_string()
}
