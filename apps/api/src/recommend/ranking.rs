//! Job ranking — pluggable, trait-based scorer of a résumé against candidate jobs.
//!
//! Default: `TfIdfRanker` (cosine similarity of TF-IDF vectors).
//! Alternative: `SkillOverlapRanker` (share of a job's vocabulary skills the résumé covers).
//!
//! `AppState` holds an `Arc<dyn JobRanker>`, chosen at startup via `RANKER`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RankerBackend;
use crate::courses::{links_for, CourseLinks};
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::recommend::tfidf::{cosine_similarity, TfIdfModel};
use crate::resume::skills::SkillVocabulary;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The résumé as rankers see it.
#[derive(Debug, Clone)]
pub struct ResumeProfile {
    pub text: String,
    pub skills: Vec<String>,
}

impl ResumeProfile {
    pub fn new(text: String, vocabulary: &SkillVocabulary) -> Self {
        let skills = vocabulary.extract(&text);
        Self { text, skills }
    }

    fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub job: JobPosting,
    /// 0.0 – 1.0
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub course_links: Vec<CourseLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub backend: String,
    pub resume_skills: Vec<String>,
    pub jobs_considered: usize,
    pub recommendations: Vec<Recommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores every job against the résumé; one score per job, same order.
#[async_trait]
pub trait JobRanker: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn score(
        &self,
        resume: &ResumeProfile,
        jobs: &[JobPosting],
        vocabulary: &SkillVocabulary,
    ) -> Result<Vec<f64>, AppError>;
}

pub fn ranker_for(backend: RankerBackend) -> Arc<dyn JobRanker> {
    match backend {
        RankerBackend::TfIdf => Arc::new(TfIdfRanker),
        RankerBackend::SkillOverlap => Arc::new(SkillOverlapRanker),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

/// Fits TF-IDF on all job descriptions plus the résumé, then ranks by cosine
/// similarity between each description and the résumé.
pub struct TfIdfRanker;

#[async_trait]
impl JobRanker for TfIdfRanker {
    fn backend(&self) -> &'static str {
        "tfidf"
    }

    async fn score(
        &self,
        resume: &ResumeProfile,
        jobs: &[JobPosting],
        _vocabulary: &SkillVocabulary,
    ) -> Result<Vec<f64>, AppError> {
        let mut corpus: Vec<&str> = jobs.iter().map(|j| j.description.as_str()).collect();
        corpus.push(resume.text.as_str());

        let (model, vectors) = TfIdfModel::fit_transform(&corpus);
        debug!("TF-IDF fitted: {} terms over {} documents", model.vocabulary_len(), corpus.len());

        let Some((resume_vector, job_vectors)) = vectors.split_last() else {
            return Ok(Vec::new());
        };

        Ok(job_vectors
            .iter()
            .map(|v| cosine_similarity(v, resume_vector))
            .collect())
    }
}

/// Share of the job's vocabulary skills present in the résumé. No skills → 0.
pub struct SkillOverlapRanker;

#[async_trait]
impl JobRanker for SkillOverlapRanker {
    fn backend(&self) -> &'static str {
        "skills"
    }

    async fn score(
        &self,
        resume: &ResumeProfile,
        jobs: &[JobPosting],
        vocabulary: &SkillVocabulary,
    ) -> Result<Vec<f64>, AppError> {
        Ok(jobs
            .iter()
            .map(|job| {
                let wanted = job_skills(job, vocabulary);
                if wanted.is_empty() {
                    return 0.0;
                }
                let covered = wanted.iter().filter(|s| resume.has_skill(s)).count();
                covered as f64 / wanted.len() as f64
            })
            .collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendation assembly
// ────────────────────────────────────────────────────────────────────────────

fn job_skills(job: &JobPosting, vocabulary: &SkillVocabulary) -> Vec<String> {
    vocabulary.extract(&format!("{}\n{}", job.title, job.description))
}

/// Scores, sorts (descending, ties keep input order) and keeps the top `top_n`.
pub async fn recommend(
    ranker: &dyn JobRanker,
    resume: &ResumeProfile,
    jobs: Vec<JobPosting>,
    vocabulary: &SkillVocabulary,
    top_n: usize,
) -> Result<RecommendationSet, AppError> {
    let jobs_considered = jobs.len();
    let scores = ranker.score(resume, &jobs, vocabulary).await?;

    if scores.len() != jobs.len() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "{} ranker returned {} scores for {} jobs",
            ranker.backend(),
            scores.len(),
            jobs.len()
        )));
    }

    let mut recommendations: Vec<Recommendation> = jobs
        .into_iter()
        .zip(scores)
        .map(|(job, score)| {
            let (matched_skills, missing_skills): (Vec<String>, Vec<String>) =
                job_skills(&job, vocabulary)
                    .into_iter()
                    .partition(|s| resume.has_skill(s));
            let course_links = links_for(&missing_skills);
            Recommendation {
                job,
                score,
                matched_skills,
                missing_skills,
                course_links,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(top_n);

    Ok(RecommendationSet {
        backend: ranker.backend().to_string(),
        resume_skills: resume.skills.clone(),
        jobs_considered,
        recommendations,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
