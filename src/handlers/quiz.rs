// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::AppError,
    grading,
    models::{
        question::PublicQuestion,
        result::{AnswerSubmission, SubmitResponse},
    },
    state::AppState,
    storage::question_store::QuestionStore,
};

/// Returns the question bank in order, without the correct answers.
pub async fn get_questions(
    State(questions): State<Arc<QuestionStore>>,
) -> Result<impl IntoResponse, AppError> {
    let bank = questions.load_all().await;
    let questions: Vec<PublicQuestion> = bank.iter().map(PublicQuestion::from).collect();

    Ok(Json(questions))
}

/// Grades a student's answers and records the result.
///
/// * Rejects submissions without a name or with a non-array `answers` (400).
/// * Scores against the current bank, one point per correct position.
/// * Appends the result to `results.json` before responding.
pub async fn submit_answers(
    State(state): State<AppState>,
    payload: Result<Json<AnswerSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(submission) = payload?;

    let bank = state.questions.load_all().await;
    let mut result = grading::score(&submission, &bank)?;
    result.submitted_at = Some(Utc::now());

    let correct_answers = result.score;
    state.results.append(result).await?;

    tracing::info!(
        "{} answered {}/{} correctly",
        submission.name,
        correct_answers,
        bank.len()
    );

    Ok(Json(SubmitResponse {
        correct_answers,
        total_questions: bank.len(),
    }))
}

/// Lists every recorded result with answers rendered as option texts.
pub async fn get_answers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bank = state.questions.load_all().await;
    let results = state.results.project_for_display(&bank).await;

    Ok(Json(results))
}
