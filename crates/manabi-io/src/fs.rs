use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use manabi_core::source::{INDEX_DOCUMENT, lesson_document};
use manabi_core::{LessonSource, LoadError};

/// Reads `<root>/<id>.md` and `<root>/list.md` from disk
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read(&self, name: &str) -> Result<String, LoadError> {
        let path = self.root.join(name);
        tracing::debug!("Reading {}", path.display());

        let text = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Io(e),
        })?;

        match text.strip_prefix('\u{feff}') {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        }
    }
}

#[async_trait]
impl LessonSource for FsSource {
    async fn fetch_lesson(&self, id: &str) -> Result<String, LoadError> {
        let name = lesson_document(id)?;
        self.read(&name).await
    }

    async fn fetch_index(&self) -> Result<String, LoadError> {
        self.read(INDEX_DOCUMENT).await
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
