// src/storage/question_store.rs

use std::path::PathBuf;

use serde::Serialize;
use tokio::sync::RwLock;
use validator::Validate;

use crate::{error::AppError, models::question::Question, storage::json_file};

/// Counts reported back for a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub accepted: usize,
    pub rejected: usize,
}

/// The question bank, backed by a JSON snapshot file.
///
/// Questions are only ever appended. The order of the bank is the question ID
/// used when grading.
#[derive(Debug)]
pub struct QuestionStore {
    path: PathBuf,
    bank: RwLock<Vec<Question>>,
}

impl QuestionStore {
    /// Loads the bank from `path`.
    ///
    /// An absent or unreadable file yields an empty bank; the store never fails to open.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bank = match json_file::read_snapshot::<Question>(&path).await {
            Ok(bank) => bank,
            Err(e) => {
                tracing::warn!("Could not load questions, starting with an empty bank: {}", e);
                Vec::new()
            }
        };
        tracing::info!("Loaded {} questions from {}", bank.len(), path.display());

        Self {
            path,
            bank: RwLock::new(bank),
        }
    }

    /// Returns a copy of the current bank.
    pub async fn load_all(&self) -> Vec<Question> {
        self.bank.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.bank.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bank.read().await.is_empty()
    }

    /// Validates and appends a single question, then rewrites the snapshot.
    ///
    /// On a write failure the bank is left as it was before the call.
    pub async fn append(&self, question: Question) -> Result<(), AppError> {
        question.validate()?;

        let mut bank = self.bank.write().await;
        bank.push(question);
        if let Err(e) = json_file::write_snapshot(&self.path, bank.as_slice()).await {
            bank.pop();
            return Err(e);
        }

        tracing::info!("Question appended, bank now holds {}", bank.len());
        Ok(())
    }

    /// Appends every valid candidate and skips the rest.
    ///
    /// The snapshot is rewritten once for the whole batch, and only if something was accepted.
    pub async fn append_batch(
        &self,
        candidates: impl IntoIterator<Item = Question>,
    ) -> Result<BatchOutcome, AppError> {
        let mut outcome = BatchOutcome::default();
        let mut bank = self.bank.write().await;
        let previous_len = bank.len();

        for candidate in candidates {
            match candidate.validate() {
                Ok(()) => {
                    bank.push(candidate);
                    outcome.accepted += 1;
                }
                Err(e) => {
                    tracing::debug!("Skipping invalid question '{}': {}", candidate.text, e);
                    outcome.rejected += 1;
                }
            }
        }

        if outcome.accepted > 0 {
            if let Err(e) = json_file::write_snapshot(&self.path, bank.as_slice()).await {
                bank.truncate(previous_len);
                return Err(e);
            }
        }

        tracing::info!(
            "Batch import: {} accepted, {} rejected",
            outcome.accepted,
            outcome.rejected
        );
        Ok(outcome)
    }
}
