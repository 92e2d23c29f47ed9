//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::ats::handlers::job_title;
use crate::errors::AppError;
use crate::jobs::query::{fetch_jobs, JobFilter};
use crate::recommend::ranking::{recommend, RecommendationSet, ResumeProfile};
use crate::resume::extract::resume_text;
use crate::resume::upload::read_resume_upload;
use crate::state::AppState;

const DEFAULT_TOP_N: usize = 5;
const MAX_TOP_N: usize = 50;

/// POST /api/v1/recommendations
///
/// Multipart: `resume` (PDF), optional `job_title`, `location`, `top_n`.
/// Ranks the filtered job postings against the résumé with the configured ranker.
pub async fn handle_recommend(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecommendationSet>, AppError> {
    let upload = read_resume_upload(multipart).await?;

    let document = upload
        .document
        .as_ref()
        .ok_or_else(|| AppError::Validation("Please upload the resume".to_string()))?;

    let top_n = parse_top_n(upload.field("top_n"))?;
    let filter = JobFilter::new(job_title(&upload), upload.field("location"))?;

    let text = resume_text(document).await?;
    let profile = ResumeProfile::new(text, &state.skills);

    let jobs = fetch_jobs(&state.db, &filter, state.config.job_query_limit).await?;

    let set = recommend(
        state.ranker.as_ref(),
        &profile,
        jobs,
        &state.skills,
        top_n,
    )
    .await?;

    tracing::info!(
        backend = %set.backend,
        considered = set.jobs_considered,
        returned = set.recommendations.len(),
        "Recommendations ranked"
    );

    Ok(Json(set))
}

fn parse_top_n(raw: Option<&str>) -> Result<usize, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TOP_N);
    };
    match raw.parse::<usize>() {
        Ok(n) if (1..=MAX_TOP_N).contains(&n) => Ok(n),
        _ => Err(AppError::Validation(format!(
            "top_n must be a number between 1 and {MAX_TOP_N}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_default() {
        assert_eq!(parse_top_n(None).unwrap(), DEFAULT_TOP_N);
    }

    #[test]
    fn test_top_n_in_range() {
        assert_eq!(parse_top_n(Some("12")).unwrap(), 12);
    }

    #[test]
    fn test_top_n_out_of_range() {
        assert!(parse_top_n(Some("0")).is_err());
        assert!(parse_top_n(Some("51")).is_err());
        assert!(parse_top_n(Some("ten")).is_err());
    }
}
