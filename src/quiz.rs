//! Quiz response post-processing
//!
//! The quiz prompt asks the model for a bare JSON array, but models often
//! wrap it in a markdown code fence anyway. Strip the fence, parse, and on
//! any parse failure fall back to a single placeholder question instead of
//! surfacing an error.

use tracing::warn;

use crate::models::QuizItem;

/// Strip a surrounding triple-backtick fence, including an optional
/// "json" language tag, and trim the result.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }

    // Content between the first pair of fences
    let inner = match text.splitn(3, "```").nth(1) {
        Some(inner) => inner,
        None => text,
    };

    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim()
}

/// Parse generated text into quiz items, degrading to a placeholder on failure
pub fn parse_quiz(text: &str, topic: &str) -> Vec<QuizItem> {
    let cleaned = strip_code_fences(text);

    match serde_json::from_str::<Vec<QuizItem>>(cleaned) {
        Ok(quiz) => quiz,
        Err(e) => {
            warn!("Failed to parse quiz JSON, using fallback: {}", e);
            fallback_quiz(topic)
        }
    }
}

/// Single placeholder question shown when the model output is unusable
fn fallback_quiz(topic: &str) -> Vec<QuizItem> {
    vec![QuizItem {
        question: format!("What is a key concept related to {}?", topic),
        options: vec![
            "A) Option 1".to_string(),
            "B) Option 2".to_string(),
            "C) Option 3".to_string(),
            "D) Option 4".to_string(),
        ],
        answer: "A".to_string(),
        explanation: "This is a sample question. Please try again for actual content."
            .to_string(),
    }]
}
