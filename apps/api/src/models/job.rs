use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting as stored in the `jobs` table. Passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub description: String,
    pub link: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}
