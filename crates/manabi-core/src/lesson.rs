//! Lesson document parser.
//!
//! ```text
//! # 28 - 日常会话
//! ## 问候语
//! おはよう - 早上好
//! ### 听力练习
//! - 问题一
//! ```
//!
//! The parser is a small state machine over a peekable line cursor. An
//! exercise block consumes lines up to, but not including, the next heading,
//! which is then handled by the top-level loop.

use std::iter::Peekable;

use manabi_types::{Category, Exercise, Lesson, Word};

use crate::error::ParseError;
use crate::line::{self, LineKind};

/// Parse a lesson document, silently dropping lines with no structural role
pub fn parse(content: &str) -> Lesson {
    let (lesson, issues) = parse_with_diagnostics(content);
    if !issues.is_empty() {
        tracing::debug!("Ignored {} unrecognized lines in {}", issues.len(), lesson.id);
    }
    lesson
}

/// Parse a lesson document, rejecting anything `parse` would drop
pub fn parse_strict(content: &str) -> Result<Lesson, ParseError> {
    let (lesson, issues) = parse_with_diagnostics(content);
    match issues.into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(lesson),
    }
}

/// Parse a lesson document and report every line that had no effect
pub fn parse_with_diagnostics(content: &str) -> (Lesson, Vec<ParseError>) {
    let cursor = line::strip_bom(content)
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()));

    let parser = LessonParser {
        lines: cursor.peekable(),
        lesson: Lesson::default(),
        header_line: None,
        issues: Vec::new(),
    };
    let (lesson, issues) = parser.run();

    tracing::debug!(
        "Parsed {}: {} categories, {} words, {} exercises",
        lesson.id,
        lesson.categories.len(),
        lesson.word_count(),
        lesson.exercises().len()
    );

    (lesson, issues)
}

enum State {
    ScanningTop,
    InCategory(Category),
    /// `resume` is the category that was open when the block started
    InExercise {
        exercise: Exercise,
        resume: Option<Category>,
    },
}

impl From<Option<Category>> for State {
    fn from(category: Option<Category>) -> Self {
        match category {
            Some(category) => State::InCategory(category),
            None => State::ScanningTop,
        }
    }
}

struct LessonParser<'a, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    lines: Peekable<I>,
    lesson: Lesson,
    header_line: Option<usize>,
    issues: Vec<ParseError>,
}

impl<'a, I> LessonParser<'a, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    fn run(mut self) -> (Lesson, Vec<ParseError>) {
        let mut state = State::ScanningTop;

        loop {
            let open = match state {
                State::InExercise { exercise, resume } => {
                    state = self.consume_exercise(exercise, resume);
                    continue;
                }
                State::InCategory(category) => Some(category),
                State::ScanningTop => None,
            };

            match self.lines.next() {
                Some((number, text)) => state = self.step(number, text, open),
                None => {
                    self.flush(open);
                    break;
                }
            }
        }

        if self.header_line.is_none() {
            self.issues.push(ParseError::MissingHeader);
        }

        (self.lesson, self.issues)
    }

    fn step(&mut self, number: usize, text: &'a str, open: Option<Category>) -> State {
        match line::classify(text) {
            LineKind::Blank => State::from(open),
            LineKind::LessonHeader(rest) => {
                self.set_header(number, rest);
                State::from(open)
            }
            LineKind::CategoryHeader(name) => {
                self.flush(open);
                State::InCategory(Category::new(name))
            }
            LineKind::ExerciseHeader(label) => State::InExercise {
                exercise: Exercise {
                    kind: label.to_string(),
                    questions: Vec::new(),
                },
                resume: open,
            },
            LineKind::WordEntry { japanese, chinese } => match open {
                Some(mut category) => {
                    category.words.push(Word::new(japanese, chinese));
                    State::InCategory(category)
                }
                None => {
                    self.reject(number, text);
                    State::ScanningTop
                }
            },
            LineKind::Text(text) => {
                self.reject(number, text);
                State::from(open)
            }
        }
    }

    /// Collect questions until the next heading or end of input
    fn consume_exercise(&mut self, mut exercise: Exercise, resume: Option<Category>) -> State {
        while let Some(&(_, text)) = self.lines.peek() {
            if line::is_heading(text) {
                break;
            }
            self.lines.next();

            if !text.is_empty() {
                exercise
                    .questions
                    .push(line::strip_question_marker(text).to_string());
            }
        }

        self.lesson
            .exercises
            .get_or_insert_with(Vec::new)
            .push(exercise);

        State::from(resume)
    }

    // A repeated header overwrites the previous one
    fn set_header(&mut self, number: usize, rest: &str) {
        if self.header_line.is_some() {
            self.issues.push(ParseError::DuplicateHeader { line: number });
        }
        self.header_line = Some(number);

        let (kind, name) = line::split_pair(rest);
        self.lesson.id = line::lesson_id(kind);
        self.lesson.kind = kind.to_string();
        self.lesson.name = name.to_string();
    }

    fn flush(&mut self, open: Option<Category>) {
        if let Some(category) = open {
            self.lesson.categories.push(category);
        }
    }

    fn reject(&mut self, number: usize, text: &str) {
        self.issues.push(ParseError::MalformedLine {
            line: number,
            content: text.to_string(),
        });
    }
}
