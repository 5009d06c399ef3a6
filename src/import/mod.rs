// src/import/mod.rs

//! Bulk question import from uploaded files.
//!
//! Parsing is best-effort: each format is reduced to question candidates, and
//! anything that cannot be read as a candidate is only counted. Validation of the
//! candidates themselves is left to `QuestionStore::append_batch`.

pub mod docx;
pub mod excel;
pub mod pdf;
pub mod text;

use std::path::Path;

use crate::{error::AppError, models::question::Question};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";
pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload a valid Excel, PDF, Word or text file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Excel,
    Pdf,
    Docx,
    Text,
}

impl ImportFormat {
    /// Picks a format from the upload's content type, falling back to the file extension.
    ///
    /// Browsers often send `application/octet-stream` for files they do not know,
    /// so the extension still decides in that case.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        content_type
            .and_then(Self::from_mime)
            .or_else(|| file_name.and_then(Self::from_file_name))
    }

    fn from_mime(content_type: &str) -> Option<Self> {
        // Drop parameters such as "; charset=utf-8".
        let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
        match mime.as_str() {
            XLSX_MIME | XLS_MIME => Some(Self::Excel),
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            TEXT_MIME | "text/csv" => Some(Self::Text),
            _ => None,
        }
    }

    fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xls" => Some(Self::Excel),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "csv" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Question candidates read from one file.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedQuestions {
    pub candidates: Vec<Question>,
    /// Lines or rows that could not be read as a candidate at all.
    pub malformed: usize,
}

/// Parses raw file bytes of the given format.
///
/// Blocking; run it off the async runtime.
pub fn parse(format: ImportFormat, bytes: &[u8]) -> Result<ParsedQuestions, AppError> {
    match format {
        ImportFormat::Excel => excel::parse_workbook(bytes),
        ImportFormat::Pdf => pdf::extract_text(bytes).map(|text| text::parse_lines(&text)),
        ImportFormat::Docx => docx::extract_text(bytes).map(|text| text::parse_lines(&text)),
        ImportFormat::Text => {
            let text = String::from_utf8_lossy(bytes);
            Ok(text::parse_lines(&text))
        }
    }
}
