use crate::error::QuizError;
use crate::models::{QuestionAnswer, QuestionBank};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

pub fn load_questions(path: &Path) -> Result<QuestionBank, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = read_questions(BufReader::new(file));
    debug!(path = %path.display(), questions = bank.len(), "question source loaded");
    Ok(bank)
}

/// Best-effort load: malformed records are skipped, and a read error ends the
/// load with whatever was parsed so far.
pub fn read_questions<R: BufRead>(mut reader: R) -> QuestionBank {
    let mut questions = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                warn!(line = line_number + 1, error = %e, "question source read failed, stopping load");
                break;
            }
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(line = line_number, "skipping record with invalid UTF-8");
            continue;
        };
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Some(question) => questions.push(question),
            None => warn!(line = line_number, "skipping malformed record"),
        }
    }

    QuestionBank::new(questions)
}

/// A record is exactly two fields. Empty fields are kept as-is.
pub fn parse_record(line: &str) -> Option<QuestionAnswer> {
    let fields = parse_csv_line(line)?;
    let [prompt, answer]: [String; 2] = fields.try_into().ok()?;

    Some(QuestionAnswer::new(prompt, answer))
}

/// Splits one line into fields. Returns `None` on an unterminated quote, a
/// quote inside an unquoted field, or text after a closing quote.
pub fn parse_csv_line(line: &str) -> Option<Vec<String>> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current_field.push('"');
                } else {
                    in_quotes = false;
                    if !matches!(chars.peek(), None | Some(&',')) {
                        return None;
                    }
                }
            }
            '"' if at_field_start => {
                in_quotes = true;
            }
            '"' => return None,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current_field));
                at_field_start = true;
                continue;
            }
            _ => {
                current_field.push(c);
            }
        }
        at_field_start = false;
    }

    if in_quotes {
        return None;
    }

    fields.push(current_field);
    Some(fields)
}
