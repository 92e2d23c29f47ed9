use std::sync::Arc;

use sqlx::PgPool;

use crate::chat::transcript::TranscriptStore;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommend::ranking::JobRanker;
use crate::resume::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub transcripts: TranscriptStore,
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable job ranker. Default: TfIdfRanker. Swap via RANKER env.
    pub ranker: Arc<dyn JobRanker>,
    pub skills: Arc<SkillVocabulary>,
}
