//! Parsing the model's ATS verdict into a report.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::courses::{links_for, CourseLinks};
use crate::errors::AppError;
use crate::llm_client::parse_json_reply;

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

pub const NO_MISSING_KEYWORDS: &str = "No missing keywords found.";

/// The JSON object the ATS prompt asks for. Key spellings follow the prompt.
#[derive(Debug, Deserialize)]
pub struct AtsVerdict {
    #[serde(rename = "JD Match", alias = "JDMatch", default)]
    pub jd_match: Value,
    #[serde(rename = "MissingKeywords", alias = "Missing Keywords", default)]
    pub missing_keywords: Vec<String>,
    #[serde(rename = "Profile Summary", alias = "ProfileSummary", default)]
    pub profile_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    /// Match as the model phrased it, e.g. "85%".
    pub jd_match: String,
    /// Numeric match when one could be read, clamped to 0–100.
    pub match_percent: Option<u8>,
    pub missing_keywords: Vec<String>,
    pub profile_summary: String,
    pub course_links: Vec<CourseLinks>,
    pub jobs_considered: usize,
    pub message: Option<String>,
    pub raw_response: String,
}

/// Parses a model reply. Malformed JSON is an LLM error, never a panic.
pub fn build_report(raw_response: &str, jobs_considered: usize) -> Result<AtsReport, AppError> {
    let verdict: AtsVerdict = parse_json_reply(raw_response)
        .map_err(|e| AppError::Llm(format!("ATS response was not the expected JSON: {e}")))?;

    let (jd_match, match_percent) = read_match(&verdict.jd_match);

    let mut missing_keywords: Vec<String> = Vec::new();
    for keyword in verdict.missing_keywords {
        let keyword = keyword.trim().to_string();
        if !keyword.is_empty()
            && !missing_keywords
                .iter()
                .any(|k| k.eq_ignore_ascii_case(&keyword))
        {
            missing_keywords.push(keyword);
        }
    }

    let course_links = links_for(&missing_keywords);
    let message = missing_keywords
        .is_empty()
        .then(|| NO_MISSING_KEYWORDS.to_string());

    Ok(AtsReport {
        jd_match,
        match_percent,
        missing_keywords,
        profile_summary: verdict.profile_summary.trim().to_string(),
        course_links,
        jobs_considered,
        message,
        raw_response: raw_response.to_string(),
    })
}

fn read_match(value: &Value) -> (String, Option<u8>) {
    match value {
        Value::String(s) => {
            let percent = PERCENT
                .find(s)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .map(clamp_percent);
            (s.trim().to_string(), percent)
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => (format!("{f}%"), Some(clamp_percent(f))),
            None => (n.to_string(), None),
        },
        Value::Null => (String::new(), None),
        other => (other.to_string(), None),
    }
}

fn clamp_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
