//! Per-session chat transcripts in Redis.
//!
//! One list per session under `chat:session:<uuid>`, newest turn last.
//! Every append refreshes the TTL and trims to the configured history limit.

use chrono::{DateTime, Utc};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// One question/answer exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub response: String,
    pub asked_at: DateTime<Utc>,
}

pub fn session_key(session_id: Uuid) -> String {
    format!("chat:session:{session_id}")
}

#[derive(Clone)]
pub struct TranscriptStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
    history_limit: usize,
}

impl TranscriptStore {
    pub fn new(conn: MultiplexedConnection, ttl_secs: u64, history_limit: usize) -> Self {
        Self {
            conn,
            ttl_secs,
            history_limit: history_limit.max(1),
        }
    }

    /// Appends a turn and returns the session's turn count afterwards.
    pub async fn append(&self, session_id: Uuid, turn: &ChatTurn) -> Result<usize, AppError> {
        let key = session_key(session_id);
        let payload = serde_json::to_string(turn).map_err(anyhow::Error::from)?;
        let mut conn = self.conn.clone();

        let (count,): (usize,) = redis::pipe()
            .atomic()
            .rpush(&key, payload)
            .ignore()
            .ltrim(&key, -(self.history_limit as isize), -1)
            .ignore()
            .expire(&key, self.ttl_secs as i64)
            .ignore()
            .llen(&key)
            .query_async(&mut conn)
            .await?;

        debug!(%session_id, count, "Chat turn stored");
        Ok(count)
    }

    /// The session's turns, oldest first. Unknown or expired sessions are empty.
    pub async fn load(&self, session_id: Uuid) -> Result<Vec<ChatTurn>, AppError> {
        let mut conn = self.conn.clone();
        let raw: Vec<String> = conn.lrange(session_key(session_id), 0, -1).await?;
        Ok(decode_turns(session_id, raw))
    }

    pub async fn clear(&self, session_id: Uuid) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(session_key(session_id)).await?;
        Ok(())
    }
}

/// Decodes stored turns, skipping entries that no longer parse.
fn decode_turns(session_id: Uuid, raw: Vec<String>) -> Vec<ChatTurn> {
    raw.into_iter()
        .filter_map(|entry| match serde_json::from_str::<ChatTurn>(&entry) {
            Ok(turn) => Some(turn),
            Err(e) => {
                warn!(%session_id, "Skipping unreadable chat turn: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_format() {
        let id = Uuid::nil();
        assert_eq!(
            session_key(id),
            "chat:session:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_decode_turns_skips_corrupt_entries() {
        let turn = ChatTurn {
            question: "What is TF-IDF?".to_string(),
            response: "A weighting scheme.".to_string(),
            asked_at: Utc::now(),
        };
        let raw = vec![
            serde_json::to_string(&turn).unwrap(),
            "not json".to_string(),
        ];
        let turns = decode_turns(Uuid::new_v4(), raw);
        assert_eq!(turns, vec![turn]);
    }
}
