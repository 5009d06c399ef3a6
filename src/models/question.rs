// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::html::clean_html;

/// Every question offers exactly this many answer choices.
pub const OPTIONS_PER_QUESTION: usize = 3;

/// A single multiple-choice question as stored in `questions.json`.
///
/// Field names on the wire follow the file format (`question`, `options`, `correct`).
/// The position of a question in the bank is its identity for grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// The text content of the question.
    #[serde(rename = "question")]
    #[validate(length(min = 1, message = "Question text is required."))]
    pub text: String,

    /// Answer choices, referenced by index.
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    /// Index into `options` of the correct choice.
    #[serde(rename = "correct")]
    #[validate(range(min = 0, max = 2, message = "Correct answer must be 0, 1 or 2."))]
    pub correct_index: i64,
}

impl Question {
    pub fn new(text: impl Into<String>, options: [&str; 3], correct_index: i64) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() != OPTIONS_PER_QUESTION {
        return Err(validator::ValidationError::new("options_must_have_three_entries")
            .with_message("Exactly 3 options are required.".into()));
    }
    Ok(())
}

/// DTO for sending a question to students (excludes the correct index).
/// Text is sanitized here; the stored question keeps what the admin entered.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            question: clean_html(&q.text),
            options: q.options.iter().map(|o| clean_html(o)).collect(),
        }
    }
}

/// DTO for the bulk route the admin client posts parsed files to.
///
/// Entries stay untyped so that one malformed entry is rejected on its own
/// instead of failing the whole request.
#[derive(Debug, Deserialize)]
pub struct AddQuestionsRequest {
    pub questions: Vec<serde_json::Value>,
}
