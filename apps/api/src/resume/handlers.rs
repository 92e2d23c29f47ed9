use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::extract::resume_text;
use crate::resume::upload::read_resume_upload;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeSkillsResponse {
    pub skills: Vec<String>,
    pub vocabulary_size: usize,
    pub text_length: usize,
}

/// POST /api/v1/resume/skills
pub async fn handle_resume_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeSkillsResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let document = upload
        .document
        .as_ref()
        .ok_or_else(|| AppError::Validation("Please upload the resume".to_string()))?;

    let text = resume_text(document).await?;

    Ok(Json(ResumeSkillsResponse {
        skills: state.skills.extract(&text),
        vocabulary_size: state.skills.len(),
        text_length: text.chars().count(),
    }))
}
