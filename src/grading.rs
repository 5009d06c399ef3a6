// src/grading.rs

use validator::Validate;

use crate::{
    error::AppError,
    models::{
        question::Question,
        result::{AnswerSubmission, QuizResult},
    },
};

/// Grades a submission against the question bank.
///
/// Answers are compared positionally: `answers[i]` is correct when it equals
/// `bank[i].correct_index`. Answers beyond the bank are ignored, missing or
/// `null` answers count as wrong. One point per correct answer, nothing deducted.
///
/// Pure and deterministic. The only failure is a submission without a student name.
pub fn score(submission: &AnswerSubmission, bank: &[Question]) -> Result<QuizResult, AppError> {
    submission.validate()?;

    Ok(QuizResult {
        name: submission.name.clone(),
        answers: submission.answers.clone(),
        score: count_correct(&submission.answers, bank),
        submitted_at: None,
    })
}

fn count_correct(answers: &[Option<i64>], bank: &[Question]) -> usize {
    bank.iter()
        .zip(answers)
        .filter(|(question, answer)| **answer == Some(question.correct_index))
        .count()
}
