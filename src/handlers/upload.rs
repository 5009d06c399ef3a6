// src/handlers/upload.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    handlers::admin::batch_response,
    import::{self, ImportFormat, UNSUPPORTED_FORMAT_MESSAGE},
    storage::question_store::QuestionStore,
};

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Imports questions from an uploaded Excel, PDF, Word or text file.
///
/// * 400 when no file is attached or its type is not supported.
/// * 500 when a supported file cannot be parsed.
/// * Otherwise every readable question is handed to the bank; invalid ones are counted.
pub async fn upload(
    State(questions): State<Arc<QuestionStore>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) && field.file_name().is_none() {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        file = Some((content_type, file_name, bytes));
        break;
    }

    let (content_type, file_name, bytes) = file
        .filter(|(_, _, bytes)| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("No file uploaded.".to_string()))?;

    let format = ImportFormat::detect(content_type.as_deref(), file_name.as_deref())
        .ok_or_else(|| AppError::UnsupportedFormat(UNSUPPORTED_FORMAT_MESSAGE.to_string()))?;

    tracing::info!(
        "Importing {:?} ({} bytes) as {:?}",
        file_name.as_deref().unwrap_or("<unnamed>"),
        bytes.len(),
        format
    );

    let parsed = tokio::task::spawn_blocking(move || import::parse(format, &bytes)).await??;

    let mut outcome = questions.append_batch(parsed.candidates).await?;
    outcome.rejected += parsed.malformed;

    Ok(Json(batch_response(outcome)))
}
