// src/models/result.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shown in place of an option text when a position has no usable answer.
pub const NOT_ANSWERED: &str = "Not answered";

/// DTO for a student's answer sheet.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerSubmission {
    #[validate(custom(function = validate_name))]
    pub name: String,

    /// Selected option index per question position; `null` for skipped questions.
    pub answers: Vec<Option<i64>>,
}

fn validate_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(validator::ValidationError::new("name_required")
            .with_message("Student name is required.".into()));
    }
    Ok(())
}

/// One graded submission as stored in `results.json`. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub name: String,

    /// The submitted answers, verbatim.
    pub answers: Vec<Option<i64>>,

    pub score: usize,

    /// Missing in files written before timestamps were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A stored result with each answer replaced by the option text it points at.
/// Name and answer texts are sanitized for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResult {
    pub name: String,
    pub answers: Vec<String>,
    pub score: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub correct_answers: usize,
    pub total_questions: usize,
}
