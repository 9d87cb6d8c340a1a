//! Request and response shapes for the HTTP surface
//!
//! All records are transient; nothing here outlives one request cycle.

use serde::{Deserialize, Serialize};

/// One multiple-choice quiz question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizItem {
    pub question: String,
    /// Exactly four options, each prefixed "A) " through "D) "
    pub options: Vec<String>,
    /// Single letter in {A, B, C, D}
    pub answer: String,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct LessonPlanResponse {
    pub lesson_plan: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizItem>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assignment: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Mock LMS integration echoes the payload back untouched
#[derive(Debug, Serialize)]
pub struct LmsIntegrationResponse {
    pub status: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct QuestionAnsweringRequest {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_item_round_trip() {
        let json = r#"{
            "question": "What is 2 + 2?",
            "options": ["A) 3", "B) 4", "C) 5", "D) 22"],
            "answer": "B",
            "explanation": "Basic arithmetic."
        }"#;

        let item: QuizItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.options.len(), 4);
        assert_eq!(item.answer, "B");
    }

    #[test]
    fn test_question_answering_request_defaults() {
        let req: QuestionAnsweringRequest = serde_json::from_str("{}").unwrap();
        assert!(req.context.is_empty());
        assert!(req.question.is_empty());
    }
}
