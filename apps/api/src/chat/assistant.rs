use chrono::Utc;

use crate::chat::transcript::ChatTurn;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

const MAX_QUESTION_CHARS: usize = 4000;

/// Sends the question to the text model as-is and pairs it with the answer.
pub async fn ask(llm: &dyn TextGenerator, question: &str) -> Result<ChatTurn, AppError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(AppError::Validation(format!(
            "question must be at most {MAX_QUESTION_CHARS} characters"
        )));
    }

    let asked_at = Utc::now();
    let response = llm
        .generate(question)
        .await
        .map_err(|e| AppError::Llm(format!("Chat completion failed: {e}")))?;

    Ok(ChatTurn {
        question: question.to_string(),
        response,
        asked_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::evaluator::tests::CannedModel;

    #[tokio::test]
    async fn test_ask_pairs_question_and_answer() {
        let model = CannedModel::new("TF-IDF weighs rare terms higher.");
        let turn = ask(&model, "  What is TF-IDF?  ").await.unwrap();
        assert_eq!(turn.question, "What is TF-IDF?");
        assert_eq!(turn.response, "TF-IDF weighs rare terms higher.");
        assert_eq!(*model.prompts.lock().unwrap(), vec!["What is TF-IDF?".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_question_rejected_without_model_call() {
        let model = CannedModel::new("unused");
        assert!(matches!(ask(&model, "   ").await, Err(AppError::Validation(_))));
        assert!(model.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overlong_question_rejected() {
        let model = CannedModel::new("unused");
        let question = "x".repeat(MAX_QUESTION_CHARS + 1);
        assert!(matches!(ask(&model, &question).await, Err(AppError::Validation(_))));
    }
}
