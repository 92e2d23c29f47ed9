use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which recommendation backend `AppState` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankerBackend {
    TfIdf,
    SkillOverlap,
}

impl FromStr for RankerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(RankerBackend::TfIdf),
            "skills" | "skill_overlap" => Ok(RankerBackend::SkillOverlap),
            other => bail!("Unknown RANKER '{other}' (expected 'tfidf' or 'skills')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub google_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on rows returned by a single job query.
    pub job_query_limit: i64,
    pub chat_session_ttl_secs: u64,
    pub chat_history_limit: usize,
    pub ranker: RankerBackend,
    pub skills_file: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            google_api_key: require_env("GOOGLE_API_KEY")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            job_query_limit: env_or("JOB_QUERY_LIMIT", 50)?,
            chat_session_ttl_secs: non_zero(
                "CHAT_SESSION_TTL_SECS",
                env_or("CHAT_SESSION_TTL_SECS", 3600)?,
            )?,
            chat_history_limit: env_or("CHAT_HISTORY_LIMIT", 50)?,
            ranker: env_or("RANKER", RankerBackend::TfIdf)?,
            skills_file: std::env::var("SKILLS_FILE").ok().map(PathBuf::from),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

/// `EXPIRE key 0` deletes the key, so a zero TTL would drop every transcript.
fn non_zero(key: &str, value: u64) -> Result<u64> {
    if value == 0 {
        bail!("{key} must be greater than 0");
    }
    Ok(value)
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("{key} has an invalid value '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranker_backend_parses_aliases() {
        assert_eq!("tfidf".parse::<RankerBackend>().unwrap(), RankerBackend::TfIdf);
        assert_eq!("TF-IDF".parse::<RankerBackend>().unwrap(), RankerBackend::TfIdf);
        assert_eq!(
            " skills ".parse::<RankerBackend>().unwrap(),
            RankerBackend::SkillOverlap
        );
    }

    #[test]
    fn test_ranker_backend_rejects_unknown() {
        assert!("bm25".parse::<RankerBackend>().is_err());
    }

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_session_ttl_rejected() {
        let err = non_zero("CHAT_SESSION_TTL_SECS", 0).unwrap_err();
        assert!(err.to_string().contains("CHAT_SESSION_TTL_SECS"));
        assert_eq!(non_zero("CHAT_SESSION_TTL_SECS", 60).unwrap(), 60);
    }

    #[test]
    fn test_parse_value_trims() {
        assert_eq!(parse_value::<i64>("JOB_QUERY_LIMIT", " 25 ").unwrap(), 25);
    }
}
