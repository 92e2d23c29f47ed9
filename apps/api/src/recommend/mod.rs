// Job recommendations: vocabulary skill matching plus vector-space ranking.
// No LLM calls in this module.

pub mod handlers;
pub mod ranking;
pub mod tfidf;
