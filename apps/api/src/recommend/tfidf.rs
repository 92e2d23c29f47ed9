//! TF-IDF vectorizer and cosine similarity over sparse vectors.
//!
//! Weighting: raw term counts × smoothed IDF `ln((1 + n) / (1 + df)) + 1`,
//! each row L2-normalised. Tokens are lowercase runs of two or more word
//! characters with English stop words removed.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "etc", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
        "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me", "more", "most",
        "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
        "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "within", "would", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Term index → weight.
pub type SparseVector = HashMap<usize, f64>;

pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// A fitted vocabulary with per-term inverse document frequencies.
#[derive(Debug, Default)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let unique: HashSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                let next = vocabulary.len();
                let index = *vocabulary.entry(term).or_insert(next);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Fits on `documents` and returns each document's vector.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
        let model = Self::fit(documents);
        let vectors = documents
            .iter()
            .map(|d| model.transform(d.as_ref()))
            .collect();
        (model, vectors)
    }

    /// L2-normalised TF-IDF vector. Out-of-vocabulary terms are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut vector = SparseVector::new();
        for term in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *vector.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (index, weight) in vector.iter_mut() {
            *weight *= self.idf[*index];
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }
        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }
}

/// Cosine of the angle between two sparse vectors; 0.0 if either is zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(i, w)| large.get(i).map(|v| w * v))
        .sum();

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_stop_words() {
        assert_eq!(
            tokenize("The Data Engineer will build ETL pipelines in Python!"),
            vec!["data", "engineer", "build", "etl", "pipelines", "python"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("R C Go x"), vec!["go"]);
    }

    #[test]
    fn test_idf_is_smoothed() {
        let model = TfIdfModel::fit(&["rust tokio", "rust axum"]);
        // rust: df=2, n=2 → ln(3/3)+1 = 1
        assert!((model.idf("rust").unwrap() - 1.0).abs() < 1e-12);
        // tokio: df=1 → ln(3/2)+1
        let expected = (3.0_f64 / 2.0).ln() + 1.0;
        assert!((model.idf("tokio").unwrap() - expected).abs() < 1e-12);
        assert_eq!(model.vocabulary_len(), 3);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let (_, vectors) = TfIdfModel::fit_transform(&["python sql python", "java spring"]);
        for v in &vectors {
            let norm: f64 = v.values().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_identical_documents_similarity_one() {
        let (_, v) = TfIdfModel::fit_transform(&["kafka spark scala", "kafka spark scala"]);
        assert!((cosine_similarity(&v[0], &v[1]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_similarity_zero() {
        let (_, v) = TfIdfModel::fit_transform(&["kafka spark", "figma sketch"]);
        assert_eq!(cosine_similarity(&v[0], &v[1]), 0.0);
    }

    #[test]
    fn test_zero_vector_similarity_zero() {
        let model = TfIdfModel::fit(&["kafka spark"]);
        let empty = model.transform("the and of");
        assert!(empty.is_empty());
        assert_eq!(cosine_similarity(&empty, &model.transform("kafka")), 0.0);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let docs = [
            "python sql reporting",
            "python sql dashboards",
            "python sql kubernetes",
        ];
        let model = TfIdfModel::fit(&docs);
        let v = model.transform("python kubernetes");
        let python = v[&model.vocabulary["python"]];
        let kubernetes = v[&model.vocabulary["kubernetes"]];
        assert!(kubernetes > python);
    }

    #[test]
    fn test_empty_corpus() {
        let model = TfIdfModel::fit::<&str>(&[]);
        assert_eq!(model.vocabulary_len(), 0);
        assert!(model.transform("anything").is_empty());
    }
}
