// src/import/text.rs

use crate::{import::ParsedQuestions, models::question::Question};

const FIELD_SEPARATOR: char = ';';

/// Parses one question per non-blank line: `question;option1;option2;option3;correct`.
///
/// Lines with fewer than five fields or a non-numeric `correct` are counted as
/// malformed. Fields past the fifth are ignored.
pub fn parse_lines(text: &str) -> ParsedQuestions {
    let mut parsed = ParsedQuestions::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse_line(line) {
            Some(question) => parsed.candidates.push(question),
            None => {
                tracing::debug!("Unreadable question line: {}", line);
                parsed.malformed += 1;
            }
        }
    }

    parsed
}

fn parse_line(line: &str) -> Option<Question> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < 5 {
        return None;
    }

    Some(Question {
        text: fields[0].to_string(),
        options: fields[1..4].iter().map(|o| o.to_string()).collect(),
        correct_index: fields[4].parse().ok()?,
    })
}
