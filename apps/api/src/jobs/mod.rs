// Job postings: regex-filtered reads from the `jobs` table.

pub mod handlers;
pub mod query;
