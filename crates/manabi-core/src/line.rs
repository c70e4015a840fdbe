//! Line-level rules shared by the lesson and index parsers.

/// Separator between the two halves of a header, title or word line
pub const SEPARATOR: &str = " - ";

const EXERCISE_MARKER: &str = "### ";
const CATEGORY_MARKER: &str = "## ";
const HEADER_MARKER: &str = "# ";
const QUESTION_MARKER: &str = "- ";

/// Structural role of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `### <label>`, label trimmed
    ExerciseHeader(&'a str),
    /// `## <name>`, name kept as written
    CategoryHeader(&'a str),
    /// `# <type> - <name>`, raw remainder
    LessonHeader(&'a str),
    /// `<japanese> - <chinese>`, split on the first separator
    WordEntry { japanese: &'a str, chinese: &'a str },
    Text(&'a str),
}

/// Classify an already trimmed line.
///
/// `### ` must be tested before `## ` and `# ` since all three share the
/// `#` prefix.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(label) = line.strip_prefix(EXERCISE_MARKER) {
        return LineKind::ExerciseHeader(label.trim());
    }

    if let Some(name) = line.strip_prefix(CATEGORY_MARKER) {
        return LineKind::CategoryHeader(name);
    }

    if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
        return LineKind::LessonHeader(rest);
    }

    match line.split_once(SEPARATOR) {
        Some((japanese, chinese)) => LineKind::WordEntry { japanese, chinese },
        None => LineKind::Text(line),
    }
}

/// True for any line that ends an exercise block
pub fn is_heading(line: &str) -> bool {
    line.starts_with(EXERCISE_MARKER)
        || line.starts_with(CATEGORY_MARKER)
        || line.starts_with(HEADER_MARKER)
}

/// Document text without a leading UTF-8 byte order mark
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Remainder of an index line, if it is a lesson summary line
pub fn index_entry(line: &str) -> Option<&str> {
    line.strip_prefix(HEADER_MARKER)
}

/// Split `<left> - <right>` on the first separator; `right` is empty if absent
pub fn split_pair(text: &str) -> (&str, &str) {
    text.split_once(SEPARATOR).unwrap_or((text, ""))
}

/// Drop a single leading `- ` from an exercise question
pub fn strip_question_marker(line: &str) -> &str {
    line.strip_prefix(QUESTION_MARKER).unwrap_or(line)
}

/// First maximal run of ASCII digits
pub fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// `"lesson"` followed by the first digit run of `label`, if any
pub fn lesson_id(label: &str) -> String {
    format!("lesson{}", first_digit_run(label).unwrap_or(""))
}
