//! ATS evaluation — résumé vs. the joined descriptions of matching jobs.

use tracing::info;

use crate::ats::prompts::{ats_prompt, ats_vision_parts};
use crate::ats::report::{build_report, AtsReport};
use crate::errors::AppError;
use crate::jobs::query::join_descriptions;
use crate::llm_client::{InlineImage, TextGenerator};
use crate::models::job::JobPosting;

/// The résumé in whichever form the model should see it.
#[derive(Debug, Clone)]
pub enum ResumeInput {
    Text(String),
    Image(InlineImage),
}

pub const NO_JOBS_FOUND: &str = "No job data found matching the criteria.";

/// Scores the résumé against `jobs` with one model call.
/// Text résumés go to the text model, image résumés to the vision model.
pub async fn evaluate_resume(
    llm: &dyn TextGenerator,
    resume: &ResumeInput,
    jobs: &[JobPosting],
) -> Result<AtsReport, AppError> {
    let job_descriptions = join_descriptions(jobs);
    if job_descriptions.is_empty() {
        return Err(AppError::NotFound(NO_JOBS_FOUND.to_string()));
    }

    let raw = match resume {
        ResumeInput::Text(text) => llm.generate(&ats_prompt(text, &job_descriptions)).await,
        ResumeInput::Image(image) => {
            let (input, prompt) = ats_vision_parts(&job_descriptions);
            llm.generate_with_image(&input, image, &prompt).await
        }
    }
    .map_err(|e| AppError::Llm(format!("ATS evaluation failed: {e}")))?;

    let report = build_report(&raw, jobs.len())?;
    info!(
        jobs = jobs.len(),
        match_percent = ?report.match_percent,
        missing = report.missing_keywords.len(),
        "ATS evaluation complete"
    );
    Ok(report)
}
