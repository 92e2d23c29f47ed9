//! Course-search links for skills a résumé is missing.

use serde::{Deserialize, Serialize};

const COURSERA_SEARCH: &str = "https://www.coursera.org/search?query=";
const UDEMY_SEARCH: &str = "https://www.udemy.com/courses/search/?src=ukw&q=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLinks {
    pub keyword: String,
    pub coursera: String,
    pub udemy: String,
}

/// Coursera and Udemy search URLs for one keyword.
pub fn course_links(keyword: &str) -> CourseLinks {
    let query = quote_plus(keyword.trim());
    CourseLinks {
        keyword: keyword.trim().to_string(),
        coursera: format!("{COURSERA_SEARCH}{query}"),
        udemy: format!("{UDEMY_SEARCH}{query}"),
    }
}

/// Links for each non-blank keyword, in order.
pub fn links_for<'a, I>(keywords: I) -> Vec<CourseLinks>
where
    I: IntoIterator<Item = &'a String>,
{
    keywords
        .into_iter()
        .filter(|k| !k.trim().is_empty())
        .map(|k| course_links(k))
        .collect()
}

/// Form-style encoding: spaces become `+`, everything else percent-encoded.
fn quote_plus(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        let links = course_links("Docker");
        assert_eq!(links.coursera, "https://www.coursera.org/search?query=Docker");
        assert_eq!(
            links.udemy,
            "https://www.udemy.com/courses/search/?src=ukw&q=Docker"
        );
    }

    #[test]
    fn test_spaces_become_plus() {
        let links = course_links(" machine learning ");
        assert_eq!(links.keyword, "machine learning");
        assert!(links.coursera.ends_with("query=machine+learning"));
    }

    #[test]
    fn test_symbols_are_percent_encoded() {
        assert_eq!(quote_plus("C++"), "C%2B%2B");
        assert_eq!(quote_plus("CI/CD"), "CI%2FCD");
        assert_eq!(quote_plus("C#"), "C%23");
    }

    #[test]
    fn test_links_for_skips_blank() {
        let keywords = vec!["Spark".to_string(), "  ".to_string(), "Power BI".to_string()];
        let links = links_for(&keywords);
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].keyword, "Power BI");
    }
}
