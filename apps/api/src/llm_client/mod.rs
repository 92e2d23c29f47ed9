/// LLM Client — the single point of entry for all Gemini API calls in Pathways.
///
/// No other module may call the Generative Language API directly.
/// Services depend on the `TextGenerator` trait so tests can swap in a canned model.
///
/// Models: `gemini-pro` for text, `gemini-pro-vision` when an image is attached.
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Text-only model used for chat and ATS evaluation.
pub const TEXT_MODEL: &str = "gemini-pro";
/// Vision-capable model used when a résumé arrives as an image.
pub const VISION_MODEL: &str = "gemini-pro-vision";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Prompt blocked by the model: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Image bytes sent inline to the vision model.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Bytes,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Part {
    Text(String),
    InlineData(InlineData),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateResponse {
    /// Text of the first candidate, all text parts concatenated.
    pub fn text(&self) -> Result<String, LlmError> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(LlmError::Blocked(reason));
        }

        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Anything that can turn a prompt into model text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Vision call: parts are sent in the order `input`, image, `prompt`.
    async fn generate_with_image(
        &self,
        input: &str,
        image: &InlineImage,
        prompt: &str,
    ) -> Result<String, LlmError>;
}

/// The single Gemini client used by all services in Pathways.
/// Wraps `generateContent` with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(120)).build()?,
            api_key,
        })
    }

    /// Makes a raw `generateContent` call, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn call(&self, model: &str, parts: Vec<Part>) -> Result<GenerateResponse, LlmError> {
        let url = format!("{GEMINI_API_BASE}/{model}:generateContent");
        let request_body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Gemini call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let generated: GenerateResponse = response.json().await?;

            if let Some(usage) = &generated.usage_metadata {
                debug!(
                    model,
                    "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                    usage.prompt_token_count,
                    usage.candidates_token_count
                );
            }

            return Ok(generated);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(TEXT_MODEL, vec![Part::Text(prompt.to_string())])
            .await?
            .text()
    }

    async fn generate_with_image(
        &self,
        input: &str,
        image: &InlineImage,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let parts = vec![
            Part::Text(input.to_string()),
            Part::InlineData(InlineData {
                mime_type: image.mime_type.clone(),
                data: STANDARD.encode(&image.data),
            }),
            Part::Text(prompt.to_string()),
        ];
        self.call(VISION_MODEL, parts).await?.text()
    }
}

/// Deserializes a model reply that was asked to be JSON.
/// Tolerates markdown code fences around the object.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_serializes_gemini_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text("hello".to_string()),
                    Part::InlineData(InlineData {
                        mime_type: "image/png".to_string(),
                        data: "AAAA".to_string(),
                    }),
                ],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"text": "hello"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "Rust is "}, {"text": "great."}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 3}
        }))
        .unwrap();
        assert_eq!(response.text().unwrap(), "Rust is great.");
    }

    #[test]
    fn test_response_blocked_prompt() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert!(matches!(response.text(), Err(LlmError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(response.text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_parse_json_reply_handles_fences() {
        let value: serde_json::Value = parse_json_reply("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_parse_json_reply_rejects_prose() {
        let result: Result<serde_json::Value, _> = parse_json_reply("Sure! Here is the JSON:");
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }
}
