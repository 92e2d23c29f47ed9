//! Job query — case-insensitive regex filter on title and location.

use regex::RegexBuilder;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::JobPosting;

const MAX_PATTERN_LEN: usize = 200;
/// SQLSTATE `invalid_regular_expression`.
const INVALID_REGEX_SQLSTATE: &str = "2201B";

/// Title/location filter. `None` matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub title: Option<String>,
    pub location: Option<String>,
}

impl JobFilter {
    /// Builds a filter from raw user input. Blank values become `None`.
    /// Patterns are compiled once here so a bad regex surfaces as a
    /// validation error rather than a database error.
    pub fn new(title: Option<&str>, location: Option<&str>) -> Result<Self, AppError> {
        Ok(Self {
            title: normalize_pattern("job_title", title)?,
            location: normalize_pattern("location", location)?,
        })
    }
}

fn normalize_pattern(field: &str, raw: Option<&str>) -> Result<Option<String>, AppError> {
    let Some(pattern) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    if pattern.len() > MAX_PATTERN_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_PATTERN_LEN} characters"
        )));
    }

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::Validation(format!("{field} is not a valid pattern: {e}")))?;

    Ok(Some(pattern.to_string()))
}

/// Fetches postings whose title and location match the filter (`~*`).
/// Rows come back in insertion order so ranking ties are stable.
pub async fn fetch_jobs(
    pool: &PgPool,
    filter: &JobFilter,
    limit: i64,
) -> Result<Vec<JobPosting>, AppError> {
    let jobs = sqlx::query_as::<_, JobPosting>(
        r#"
        SELECT id, title, location, description, link, company, created_at
        FROM jobs
        WHERE ($1::text IS NULL OR title ~* $1)
          AND ($2::text IS NULL OR location ~* $2)
        ORDER BY created_at, id
        LIMIT $3
        "#,
    )
    .bind(filter.title.as_deref())
    .bind(filter.location.as_deref())
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(map_query_error)?;

    debug!(
        title = ?filter.title,
        location = ?filter.location,
        "Fetched {} job postings",
        jobs.len()
    );

    Ok(jobs)
}

/// Postgres regexes are not the `regex` crate's dialect (`\p{L}`, `(?P<name>..)`),
/// so a pattern can pass `JobFilter::new` and still be refused by `~*`.
fn map_query_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some(INVALID_REGEX_SQLSTATE) {
            return AppError::Validation(format!(
                "job_title or location is not a valid pattern: {}",
                db.message()
            ));
        }
    }
    AppError::Database(err)
}

/// Joins descriptions the way they are fed to the ATS prompt.
pub fn join_descriptions(jobs: &[JobPosting]) -> String {
    jobs.iter()
        .map(|j| j.description.trim())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    pub(crate) fn make_job(title: &str, description: &str) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            location: "Berlin".to_string(),
            description: description.to_string(),
            link: Some("https://jobs.example.com/1".to_string()),
            company: Some("Acme".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_blank_inputs_become_none() {
        let filter = JobFilter::new(Some("   "), None).unwrap();
        assert_eq!(filter, JobFilter::default());
    }

    #[test]
    fn test_patterns_are_trimmed() {
        let filter = JobFilter::new(Some(" data engineer "), Some("remote")).unwrap();
        assert_eq!(filter.title.as_deref(), Some("data engineer"));
        assert_eq!(filter.location.as_deref(), Some("remote"));
    }

    #[test]
    fn test_invalid_regex_is_validation_error() {
        let err = JobFilter::new(Some("(senior"), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("job_title")));
    }

    #[test]
    fn test_overlong_pattern_rejected() {
        let long = "a".repeat(MAX_PATTERN_LEN + 1);
        assert!(JobFilter::new(None, Some(&long)).is_err());
    }

    #[derive(Debug)]
    struct PgError {
        code: &'static str,
        message: &'static str,
    }

    impl std::fmt::Display for PgError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for PgError {}

    impl sqlx::error::DatabaseError for PgError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.code.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn pg_error(code: &'static str, message: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgError { code, message }))
    }

    #[test]
    fn test_postgres_only_regex_syntax_passes_local_check() {
        // Accepted by the `regex` crate, refused by Postgres `~*`.
        assert!(JobFilter::new(Some(r"\p{L}+"), None).is_ok());
        assert!(JobFilter::new(Some("(?P<lvl>senior)"), None).is_ok());
    }

    #[test]
    fn test_invalid_regex_from_postgres_is_validation_error() {
        let err = map_query_error(pg_error(
            INVALID_REGEX_SQLSTATE,
            "invalid regular expression: invalid escape \\ sequence",
        ));
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("invalid escape")));
    }

    #[test]
    fn test_other_database_errors_stay_database_errors() {
        let err = map_query_error(pg_error("57P01", "terminating connection"));
        assert!(matches!(err, AppError::Database(_)));
        assert!(matches!(map_query_error(sqlx::Error::PoolTimedOut), AppError::Database(_)));
    }

    #[test]
    fn test_join_descriptions_skips_blank() {
        let jobs = vec![
            make_job("Data Analyst", "SQL and Tableau"),
            make_job("Data Engineer", "  "),
            make_job("ML Engineer", "PyTorch"),
        ];
        assert_eq!(join_descriptions(&jobs), "SQL and Tableau\n\nPyTorch");
    }
}
