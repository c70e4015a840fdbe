use async_trait::async_trait;

use crate::error::LoadError;

/// Path of the index document relative to a lesson source root
pub const INDEX_DOCUMENT: &str = "list.md";

/// Text retrieval for lesson and index documents
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Fetch the raw text of a lesson document by id
    async fn fetch_lesson(&self, id: &str) -> Result<String, LoadError>;

    /// Fetch the raw text of the index document
    async fn fetch_index(&self) -> Result<String, LoadError>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}

/// File name for a lesson id, rejecting anything that could escape the root
pub fn lesson_document(id: &str) -> Result<String, LoadError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid {
        return Err(LoadError::InvalidId(id.to_string()));
    }

    Ok(format!("{id}.md"))
}
