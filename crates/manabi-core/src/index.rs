//! Lesson index parser.
//!
//! Every summary is a single line:
//!
//! ```text
//! # 28 - 日常会话 | 常用口语 | conversation | 45
//! ```
//!
//! Lines that do not start with `# ` are ignored.

use manabi_types::{LessonKind, LessonSummary};

use crate::error::ParseError;
use crate::line;

const FIELD_SEPARATOR: &str = " | ";
const FIELD_NAMES: [&str; 4] = ["title", "description", "type", "word count"];

pub fn parse_index(content: &str) -> Vec<LessonSummary> {
    let (lessons, issues) = parse_index_with_diagnostics(content);
    if !issues.is_empty() {
        tracing::debug!("Index has {} irregular entries", issues.len());
    }
    lessons
}

/// Like `parse_index`, but fails on the first irregular summary line
pub fn parse_index_strict(content: &str) -> Result<Vec<LessonSummary>, ParseError> {
    let (lessons, issues) = parse_index_with_diagnostics(content);
    match issues.into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(lessons),
    }
}

pub fn parse_index_with_diagnostics(content: &str) -> (Vec<LessonSummary>, Vec<ParseError>) {
    let mut lessons = Vec::new();
    let mut issues = Vec::new();

    for (idx, text) in line::strip_bom(content).lines().enumerate() {
        let Some(rest) = line::index_entry(text) else {
            continue;
        };
        lessons.push(parse_entry(idx + 1, rest, &mut issues));
    }

    tracing::debug!("Parsed lesson index: {} entries", lessons.len());
    (lessons, issues)
}

fn parse_entry(number: usize, rest: &str, issues: &mut Vec<ParseError>) -> LessonSummary {
    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).collect();
    if let Some(missing) = FIELD_NAMES.get(fields.len()) {
        issues.push(ParseError::MissingField {
            line: number,
            field: *missing,
        });
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    let (number_label, name) = line::split_pair(field(0));

    let raw_count = field(3);
    if fields.len() > 3 && raw_count.trim().parse::<u32>().is_err() {
        issues.push(ParseError::InvalidWordCount {
            line: number,
            value: raw_count.to_string(),
        });
    }

    let kind = LessonKind::from(field(2));
    if fields.len() > 2 && !kind.is_known() {
        issues.push(ParseError::UnknownLessonKind {
            line: number,
            value: field(2).to_string(),
        });
    }

    LessonSummary {
        id: line::lesson_id(number_label),
        name: name.to_string(),
        description: field(1).to_string(),
        word_count: leading_count(raw_count).unwrap_or(0),
        kind,
    }
}

/// Leading decimal digits after optional whitespace and `+`, e.g. `" 45 words"` -> 45
fn leading_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
