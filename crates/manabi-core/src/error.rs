/// Failure to obtain a lesson or the lesson index
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Lesson not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("Invalid lesson id: {0:?}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Raised only by the strict parsing entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Line {line}: unrecognized line {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Line {line}: lesson header already defined")]
    DuplicateHeader { line: usize },

    #[error("Document has no lesson header")]
    MissingHeader,

    #[error("Line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: invalid word count {value:?}")]
    InvalidWordCount { line: usize, value: String },

    #[error("Line {line}: unknown lesson type {value:?}")]
    UnknownLessonKind { line: usize, value: String },
}
