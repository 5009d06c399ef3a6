// src/import/docx.rs

use std::{
    io::{Cursor, Read},
    sync::LazyLock,
};

use regex::Regex;

use crate::error::AppError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph ends and explicit breaks, which become line breaks.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</w:p>|<w:br\b[^>]*/>|<w:cr\b[^>]*/>").expect("valid regex"));

static TAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<w:tab\b[^>]*/>").expect("valid regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Reads the body text of a .docx file, one paragraph per line.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| AppError::Import(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AppError::Import(format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Import(e.to_string()))?;

    Ok(document_text(&xml))
}

/// Flattens WordprocessingML markup to plain text.
pub fn document_text(xml: &str) -> String {
    let text = LINE_BREAK.replace_all(xml, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");
    unescape(&text)
}

fn unescape(text: &str) -> String {
    // &amp; goes last so "&amp;lt;" stays "&lt;".
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
