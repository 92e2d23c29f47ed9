// Prompt templates for ATS evaluation.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

const ATS_ROLE: &str = "\
Act like a skilled, very experienced ATS (Application Tracking System) with a deep \
understanding of the tech field: software engineering, data science, data analysis \
and big data engineering. Your task is to evaluate the resume against the given job \
descriptions. The job market is very competitive, so give the best possible help for \
improving the resume. Assign the percentage match against the job descriptions and list \
the missing keywords with high accuracy.";

const ATS_OUTPUT_SHAPE: &str = r#"Reply with one JSON object with exactly this structure:
{"JD Match": "85%", "MissingKeywords": ["keyword"], "Profile Summary": "two or three sentences"}"#;

/// Text-model prompt. Each value is inserted once, so braces inside the
/// résumé or the job descriptions are never treated as placeholders.
pub fn ats_prompt(resume_text: &str, job_descriptions: &str) -> String {
    format!(
        "{ATS_ROLE}\n\nresume: {resume_text}\ndescription: {job_descriptions}\n\n{ATS_OUTPUT_SHAPE}\n{JSON_ONLY_INSTRUCTION}"
    )
}

/// `(input, prompt)` for the vision call: `[input, image, prompt]`.
pub fn ats_vision_parts(job_descriptions: &str) -> (String, String) {
    let input = format!(
        "{ATS_ROLE}\nThe resume is the attached image.\n\ndescription: {job_descriptions}"
    );
    let prompt = format!("{ATS_OUTPUT_SHAPE}\n{JSON_ONLY_INSTRUCTION}");
    (input, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ats_prompt_fills_placeholders() {
        let prompt = ats_prompt("Rust engineer, 5 years", "We need Kafka");
        assert!(prompt.contains("resume: Rust engineer, 5 years"));
        assert!(prompt.contains("description: We need Kafka"));
        assert!(prompt.contains("\"MissingKeywords\""));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_resume_braces_survive() {
        let prompt = ats_prompt("uses {job_descriptions} literally", "JD");
        assert!(prompt.contains("uses {job_descriptions} literally"));
    }

    #[test]
    fn test_job_description_braces_survive() {
        let prompt = ats_prompt("Jane Doe, Rust", "Template field: {resume_text}");
        assert!(prompt.contains("description: Template field: {resume_text}"));
        assert_eq!(prompt.matches("Jane Doe, Rust").count(), 1);
    }

    #[test]
    fn test_vision_input_keeps_description_braces() {
        let (input, _) = ats_vision_parts("Fill in {resume_text} here");
        assert!(input.contains("description: Fill in {resume_text} here"));
    }

    #[test]
    fn test_vision_parts_split_instruction_and_shape() {
        let (input, prompt) = ats_vision_parts("Spark and Hive");
        assert!(input.contains("attached image"));
        assert!(input.contains("description: Spark and Hive"));
        assert!(prompt.contains("\"JD Match\""));
    }
}
