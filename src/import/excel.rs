// src/import/excel.rs

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::{error::AppError, import::ParsedQuestions, models::question::Question};

/// Reads questions from the first worksheet of an .xlsx or .xls workbook.
///
/// Columns: `question | option1 | option2 | option3 | correct`. A first row whose
/// first cell reads "question" is a header and is skipped. Blank rows are ignored.
pub fn parse_workbook(bytes: &[u8]) -> Result<ParsedQuestions, AppError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| AppError::Import(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Import("Workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Import(e.to_string()))?;

    let mut parsed = ParsedQuestions::default();

    for (i, row) in range.rows().enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        if i == 0 && is_header(row) {
            continue;
        }
        match parse_row(row) {
            Some(question) => parsed.candidates.push(question),
            None => parsed.malformed += 1,
        }
    }

    Ok(parsed)
}

fn is_header(row: &[Data]) -> bool {
    row.first()
        .is_some_and(|cell| cell.to_string().trim().eq_ignore_ascii_case("question"))
}

fn parse_row(row: &[Data]) -> Option<Question> {
    if row.len() < 5 {
        return None;
    }

    Some(Question {
        text: row[0].to_string().trim().to_string(),
        options: row[1..4]
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        correct_index: cell_index(&row[4])?,
    })
}

fn cell_index(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
