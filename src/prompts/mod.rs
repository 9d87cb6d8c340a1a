//! Prompt rendering for the educator endpoints

pub mod templates;

use crate::error::{ApiError, ApiResult};

use templates::{
    ASSIGNMENT_TEMPLATE, LESSON_PLAN_TEMPLATE, QUESTION_ANSWERING_TEMPLATE, QUIZ_TEMPLATE,
    SUMMARY_TEMPLATE,
};

/// Substitute every occurrence of `marker` in the template with `value`.
///
/// The template is split on the marker first and the pieces joined with the
/// user value, so a value that itself contains a marker is not re-expanded.
fn substitute(template: &str, marker: &str, value: &str) -> String {
    template.split(marker).collect::<Vec<_>>().join(value)
}

/// Reject a missing or blank required field before any external call
fn require_field<'a>(value: &'a str, name: &str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(format!(
            "query parameter '{}' is required",
            name
        )));
    }
    Ok(trimmed)
}

pub fn lesson_plan_prompt(topic: &str) -> ApiResult<String> {
    let topic = require_field(topic, "topic")?;
    Ok(substitute(LESSON_PLAN_TEMPLATE, "{topic}", topic))
}

pub fn quiz_prompt(topic: &str) -> ApiResult<String> {
    let topic = require_field(topic, "topic")?;
    Ok(substitute(QUIZ_TEMPLATE, "{topic}", topic))
}

pub fn assignment_prompt(topic: &str) -> ApiResult<String> {
    let topic = require_field(topic, "topic")?;
    Ok(substitute(ASSIGNMENT_TEMPLATE, "{topic}", topic))
}

/// A missing topic falls back to the literal word "topic" instead of being
/// rejected, matching the observed behavior of the service this replaces.
pub fn summary_prompt(topic: Option<&str>) -> String {
    let topic = topic.unwrap_or("topic");
    substitute(SUMMARY_TEMPLATE, "{topic}", topic)
}

/// No validation here either: an empty context and question still produce a
/// prompt and still issue a generation call.
///
/// Both markers are filled in a single forward pass over the template, so a
/// context that itself contains the literal text `{question}` is carried
/// through verbatim instead of being expanded a second time.
pub fn question_answering_prompt(context: &str, question: &str) -> String {
    let mut rendered = String::with_capacity(
        QUESTION_ANSWERING_TEMPLATE.len() + context.len() + question.len(),
    );
    let mut rest = QUESTION_ANSWERING_TEMPLATE;

    // {context} precedes {question} in the template; substituted user text
    // is never rescanned
    for (marker, value) in [("{context}", context), ("{question}", question)] {
        if let Some((before, after)) = rest.split_once(marker) {
            rendered.push_str(before);
            rendered.push_str(value);
            rest = after;
        }
    }

    rendered.push_str(rest);
    rendered
}
