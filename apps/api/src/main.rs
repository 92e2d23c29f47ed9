mod ats;
mod chat;
mod config;
mod courses;
mod db;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod recommend;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::transcript::TranscriptStore;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::recommend::ranking::ranker_for;
use crate::resume::skills::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first; missing required env vars abort startup
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathways API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    let redis = redis::Client::open(config.redis_url.clone())?;
    let transcripts = TranscriptStore::new(
        redis.get_multiplexed_async_connection().await?,
        config.chat_session_ttl_secs,
        config.chat_history_limit,
    );
    info!(
        "Chat transcripts in Redis (ttl {}s, last {} turns)",
        config.chat_session_ttl_secs, config.chat_history_limit
    );

    let llm = LlmClient::new(config.google_api_key.clone())?;
    info!(
        "LLM client initialized (models: {}, {})",
        llm_client::TEXT_MODEL,
        llm_client::VISION_MODEL
    );

    let skills = Arc::new(SkillVocabulary::load(config.skills_file.as_deref())?);

    let ranker = ranker_for(config.ranker);
    info!("Job ranker: {}", ranker.backend());

    let state = AppState {
        db,
        transcripts,
        llm,
        config: config.clone(),
        ranker,
        skills,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
