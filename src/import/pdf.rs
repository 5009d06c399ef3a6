// src/import/pdf.rs

use crate::error::AppError;

/// Extracts the text layer of every page, in page order.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Import(e.to_string()))
}
