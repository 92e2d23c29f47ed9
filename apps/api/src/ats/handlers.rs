//! Axum route handlers for the ATS API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::ats::evaluator::{evaluate_resume, ResumeInput, NO_JOBS_FOUND};
use crate::ats::report::AtsReport;
use crate::errors::AppError;
use crate::jobs::query::{fetch_jobs, JobFilter};
use crate::resume::extract::extract_pdf_text;
use crate::resume::upload::{read_resume_upload, ResumeDocument, ResumeUpload};
use crate::state::AppState;

/// Job title as sent by the form; `skill` is the older field name.
pub(crate) fn job_title(upload: &ResumeUpload) -> Option<&str> {
    upload.field("job_title").or_else(|| upload.field("skill"))
}

/// POST /api/v1/ats/evaluate
///
/// Multipart: `resume` (PDF or image), `job_title`, `location`.
/// Fetches matching jobs and asks the model for a match score and missing keywords.
pub async fn handle_ats_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AtsReport>, AppError> {
    let upload = read_resume_upload(multipart).await?;

    let document = upload
        .document
        .as_ref()
        .ok_or_else(|| AppError::Validation("Please upload the resume".to_string()))?;

    let (Some(title), Some(location)) = (job_title(&upload), upload.field("location")) else {
        return Err(AppError::Validation(
            "Please enter the job title and location for job search".to_string(),
        ));
    };
    let filter = JobFilter::new(Some(title), Some(location))?;

    let resume = match document {
        ResumeDocument::Pdf(bytes) => ResumeInput::Text(extract_pdf_text(bytes.clone()).await?),
        ResumeDocument::Image(image) => ResumeInput::Image(image.clone()),
    };

    let jobs = fetch_jobs(&state.db, &filter, state.config.job_query_limit).await?;
    if jobs.is_empty() {
        return Err(AppError::NotFound(NO_JOBS_FOUND.to_string()));
    }

    let report = evaluate_resume(&state.llm, &resume, &jobs).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_title_prefers_new_field() {
        let upload = ResumeUpload::with_fields(None, &[("job_title", "Analyst"), ("skill", "Engineer")]);
        assert_eq!(job_title(&upload), Some("Analyst"));
    }

    #[test]
    fn test_job_title_falls_back_to_skill() {
        let upload = ResumeUpload::with_fields(None, &[("skill", "Data Scientist")]);
        assert_eq!(job_title(&upload), Some("Data Scientist"));
    }
}
