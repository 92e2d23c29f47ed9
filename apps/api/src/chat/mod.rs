// Q&A chat: single-prompt questions to the text model, transcripts kept per session.

pub mod assistant;
pub mod handlers;
pub mod markdown;
pub mod transcript;
