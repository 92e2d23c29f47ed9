//! Controlled skills vocabulary and keyword matching against free text.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::{Regex, RegexBuilder};
use tracing::info;

/// Vocabulary used when no `SKILLS_FILE` is configured.
const BUILTIN_SKILLS: &[&str] = &[
    // Languages
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Rust", "Golang", "Scala",
    "Kotlin", "Swift", "Ruby", "PHP", "SQL", "Bash", "MATLAB", "Julia", "HTML", "CSS",
    // Data and ML
    "Machine Learning", "Deep Learning", "Data Analysis", "Data Visualization", "Statistics",
    "NLP", "Natural Language Processing", "Computer Vision", "TensorFlow", "PyTorch", "Keras",
    "scikit-learn", "Pandas", "NumPy", "Matplotlib", "Tableau", "Power BI", "Excel",
    "Hadoop", "Spark", "Hive", "Kafka", "Airflow", "ETL", "Data Warehousing", "Snowflake",
    "Databricks", "BigQuery", "Redshift", "LLM", "Generative AI",
    // Databases
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Cassandra", "Elasticsearch", "DynamoDB", "NoSQL",
    // Web and backend
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "FastAPI",
    "Spring Boot", "REST", "GraphQL", "Microservices", "gRPC",
    // Cloud and ops
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins",
    "CI/CD", "Linux", "Git", "DevOps",
    // Practice
    "Agile", "Scrum", "System Design", "Distributed Systems", "Unit Testing",
    "Communication", "Leadership", "Project Management",
];

struct Skill {
    label: String,
    pattern: Regex,
}

/// A fixed list of skill labels, each compiled to a whole-token matcher.
pub struct SkillVocabulary {
    skills: Vec<Skill>,
}

impl SkillVocabulary {
    pub fn builtin() -> Result<Self> {
        Self::from_labels(BUILTIN_SKILLS.iter().copied())
    }

    /// Loads the vocabulary from `path` when given, else the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let vocabulary = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read skills file {}", path.display()))?;
                Self::from_labels(parse_skill_lines(&raw))?
            }
            None => Self::builtin()?,
        };
        info!("Skill vocabulary loaded ({} skills)", vocabulary.len());
        Ok(vocabulary)
    }

    /// Builds a vocabulary, dropping blank and case-insensitive duplicate labels.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || !seen.insert(label.to_lowercase()) {
                continue;
            }
            // '+' and '#' count as token characters so "C" never matches inside "C++" or "C#".
            let pattern = RegexBuilder::new(&format!(
                r"(?:^|[^\w+#]){}(?:$|[^\w+#])",
                regex::escape(label)
            ))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid skill label '{label}'"))?;

            skills.push(Skill {
                label: label.to_string(),
                pattern,
            });
        }

        if skills.is_empty() {
            bail!("Skill vocabulary is empty");
        }

        Ok(Self { skills })
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Skills present in `text`, in vocabulary order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.skills
            .iter()
            .filter(|s| s.pattern.is_match(text))
            .map(|s| s.label.clone())
            .collect()
    }
}

fn parse_skill_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}
