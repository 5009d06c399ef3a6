// src/handlers/admin.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::question::{AddQuestionsRequest, Question},
    storage::question_store::{BatchOutcome, QuestionStore},
};

/// Adds a single question from the admin form.
///
/// Expects `{question, options: [3 strings], correct: 0..=2}`; anything else is a 400.
pub async fn add_question(
    State(questions): State<Arc<QuestionStore>>,
    payload: Result<Json<Question>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(question) = payload?;

    questions.append(question).await?;

    Ok(Json(json!({ "message": "Question added successfully" })))
}

/// Adds a batch of already-parsed questions (`{questions: [...]}`).
///
/// Entries are checked one by one: malformed or invalid entries are skipped and
/// counted as rejected, the rest are stored.
pub async fn add_questions_from_file(
    State(questions): State<Arc<QuestionStore>>,
    payload: Result<Json<AddQuestionsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let total = request.questions.len();
    let candidates: Vec<Question> = request
        .questions
        .into_iter()
        .filter_map(|value| serde_json::from_value::<Question>(value).ok())
        .collect();
    let malformed = total - candidates.len();

    let mut outcome = questions.append_batch(candidates).await?;
    outcome.rejected += malformed;

    Ok(Json(batch_response(outcome)))
}

/// Body returned by every bulk import route.
pub(crate) fn batch_response(outcome: BatchOutcome) -> serde_json::Value {
    json!({
        "message": format!(
            "{} questions added successfully, {} rejected",
            outcome.accepted, outcome.rejected
        ),
        "accepted": outcome.accepted,
        "rejected": outcome.rejected,
    })
}
