// src/storage/json_file.rs

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::error::AppError;

/// Reads a JSON array snapshot.
///
/// A missing file is an empty collection. Any other read or parse failure is
/// reported so the caller can decide whether to degrade.
pub async fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let raw = match fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(AppError::Storage(format!("{}: {}", path.display(), e))),
    };

    // A freshly created but empty file counts as empty too.
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&raw)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))
}

/// Replaces the snapshot at `path` with `items`.
///
/// The JSON is written to a sibling temp file and renamed over the target, so a
/// concurrent reader sees either the old or the new snapshot, never a partial one.
pub async fn write_snapshot<T: Serialize>(path: &Path, items: &[T]) -> Result<(), AppError> {
    let json = serde_json::to_vec_pretty(items)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(AppError::Storage(format!("{}: {}", path.display(), e)));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
