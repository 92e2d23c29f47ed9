// Résumé intake: multipart upload, PDF text extraction, skill vocabulary matching.

pub mod extract;
pub mod handlers;
pub mod skills;
pub mod upload;
