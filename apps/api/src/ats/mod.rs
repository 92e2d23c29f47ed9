// Skill-gap finder: ATS-style scoring of a résumé against fetched job postings.
// All model calls go through llm_client::TextGenerator.

pub mod evaluator;
pub mod handlers;
pub mod prompts;
pub mod report;
