use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::query::{fetch_jobs, JobFilter};
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/jobs?title=&location=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let filter = JobFilter::new(params.title.as_deref(), params.location.as_deref())?;
    let cap = state.config.job_query_limit.max(1);
    let limit = params.limit.unwrap_or(cap).clamp(1, cap);

    let jobs = fetch_jobs(&state.db, &filter, limit).await?;
    Ok(Json(jobs))
}
