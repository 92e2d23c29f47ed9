pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_ats_evaluate;
use crate::chat::handlers::{handle_chat, handle_clear_transcript, handle_get_transcript};
use crate::jobs::handlers::handle_list_jobs;
use crate::recommend::handlers::handle_recommend;
use crate::resume::handlers::handle_resume_skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Q&A chat
        .route("/api/v1/chat", post(handle_chat))
        .route(
            "/api/v1/chat/:session_id",
            get(handle_get_transcript).delete(handle_clear_transcript),
        )
        // Jobs
        .route("/api/v1/jobs", get(handle_list_jobs))
        // Résumé uploads
        .route(
            "/api/v1/resume/skills",
            post(handle_resume_skills).layer(upload_limit),
        )
        .route(
            "/api/v1/ats/evaluate",
            post(handle_ats_evaluate).layer(upload_limit),
        )
        .route(
            "/api/v1/recommendations",
            post(handle_recommend).layer(upload_limit),
        )
        .with_state(state)
}
