// src/storage/result_store.rs

use std::{
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use tokio::{sync::RwLock, task::JoinHandle};

use crate::{
    error::AppError,
    models::{
        question::Question,
        result::{DisplayResult, NOT_ANSWERED, QuizResult},
    },
    storage::json_file,
    utils::html::clean_html,
};

/// Append-only log of graded submissions, backed by a JSON snapshot file.
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    results: RwLock<Vec<QuizResult>>,
}

impl ResultStore {
    /// Loads results from `path`; an absent or unreadable file yields an empty list.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let results = match json_file::read_snapshot::<QuizResult>(&path).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!("Could not load results, starting empty: {}", e);
                Vec::new()
            }
        };
        tracing::info!("Loaded {} results from {}", results.len(), path.display());

        Self {
            path,
            results: RwLock::new(results),
        }
    }

    pub async fn load_all(&self) -> Vec<QuizResult> {
        self.results.read().await.clone()
    }

    /// Appends a result and rewrites the snapshot. Rolls back on write failure.
    pub async fn append(&self, result: QuizResult) -> Result<(), AppError> {
        let mut results = self.results.write().await;
        results.push(result);
        if let Err(e) = json_file::write_snapshot(&self.path, results.as_slice()).await {
            results.pop();
            return Err(e);
        }

        tracing::info!("Result recorded, {} results stored", results.len());
        Ok(())
    }

    /// Renders stored answers as option texts of the *current* bank.
    ///
    /// Results are not tied to the bank they were graded against, so an answer
    /// re-renders against whatever question now sits at its position.
    pub async fn project_for_display(&self, bank: &[Question]) -> Vec<DisplayResult> {
        self.results
            .read()
            .await
            .iter()
            .map(|result| DisplayResult {
                name: clean_html(&result.name),
                answers: result
                    .answers
                    .iter()
                    .enumerate()
                    .map(|(i, answer)| answer_text(bank, i, *answer))
                    .collect(),
                score: result.score,
                submitted_at: result.submitted_at,
            })
            .collect()
    }

    /// Replaces the in-memory list with what is on disk.
    ///
    /// A missing file clears the list. A file that exists but does not parse is
    /// ignored and the current list is kept.
    pub async fn reload(&self) -> Result<usize, AppError> {
        let mut results = self.results.write().await;
        let fresh = json_file::read_snapshot::<QuizResult>(&self.path).await?;
        *results = fresh;
        Ok(results.len())
    }

    /// Periodically reloads the store from disk to pick up edits made outside the process.
    pub fn spawn_refresh(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; the store was just loaded.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match self.reload().await {
                    Ok(count) => tracing::debug!("Student answers and scores fetched: {}", count),
                    Err(e) => tracing::warn!("Results refresh skipped: {}", e),
                }
            }
        })
    }
}

fn answer_text(bank: &[Question], position: usize, answer: Option<i64>) -> String {
    answer
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| bank.get(position)?.options.get(index))
        .map(|text| clean_html(text))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_ANSWERED.to_string())
}
