use manabi_types::{Lesson, LessonStats, LessonSummary};

use crate::error::LoadError;
use crate::index::{parse_index, parse_index_strict};
use crate::lesson::{parse, parse_strict};
use crate::source::LessonSource;
use crate::stats::compute_stats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop unrecognized lines
    #[default]
    Permissive,
    /// Fail on the first unrecognized line
    Strict,
}

/// Fetches documents from a source and parses them
pub struct LessonLoader {
    source: Box<dyn LessonSource>,
    mode: ParseMode,
}

impl LessonLoader {
    pub fn new(source: Box<dyn LessonSource>) -> Self {
        Self {
            source,
            mode: ParseMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Load and parse one lesson. Failures are logged and returned unchanged.
    pub async fn load_lesson(&self, id: &str) -> Result<Lesson, LoadError> {
        let result = self.fetch_and_parse_lesson(id).await;
        if let Err(e) = &result {
            tracing::error!("Failed to load lesson {id}: {e}");
        }
        result
    }

    /// Load and parse the lesson index
    pub async fn lesson_list(&self) -> Result<Vec<LessonSummary>, LoadError> {
        let result = self.fetch_and_parse_index().await;
        if let Err(e) = &result {
            tracing::error!("Failed to load lesson list: {e}");
        }
        result
    }

    /// Index entry for a lesson id, if listed
    pub async fn find_summary(&self, id: &str) -> Result<Option<LessonSummary>, LoadError> {
        let lessons = self.lesson_list().await?;
        Ok(lessons.into_iter().find(|summary| summary.id == id))
    }

    pub async fn lesson_stats(&self, id: &str) -> Result<LessonStats, LoadError> {
        let lesson = self.load_lesson(id).await?;
        Ok(compute_stats(&lesson))
    }

    async fn fetch_and_parse_lesson(&self, id: &str) -> Result<Lesson, LoadError> {
        tracing::info!("Loading lesson {id} from {}", self.source.describe());
        let content = self.source.fetch_lesson(id).await?;

        let lesson = match self.mode {
            ParseMode::Permissive => parse(&content),
            ParseMode::Strict => parse_strict(&content)?,
        };
        Ok(lesson)
    }

    async fn fetch_and_parse_index(&self) -> Result<Vec<LessonSummary>, LoadError> {
        tracing::info!("Loading lesson list from {}", self.source.describe());
        let content = self.source.fetch_index().await?;

        let lessons = match self.mode {
            ParseMode::Permissive => parse_index(&content),
            ParseMode::Strict => parse_index_strict(&content)?,
        };
        Ok(lessons)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::error::ParseError;

    struct MemorySource {
        lessons: HashMap<String, String>,
        index: Option<String>,
    }

    impl MemorySource {
        fn new() -> Self {
            Self {
                lessons: HashMap::new(),
                index: None,
            }
        }

        fn with_lesson(mut self, id: &str, text: &str) -> Self {
            self.lessons.insert(id.to_string(), text.to_string());
            self
        }

        fn with_index(mut self, text: &str) -> Self {
            self.index = Some(text.to_string());
            self
        }
    }

    #[async_trait]
    impl LessonSource for MemorySource {
        async fn fetch_lesson(&self, id: &str) -> Result<String, LoadError> {
            self.lessons
                .get(id)
                .cloned()
                .ok_or_else(|| LoadError::NotFound(id.to_string()))
        }

        async fn fetch_index(&self) -> Result<String, LoadError> {
            self.index
                .clone()
                .ok_or_else(|| LoadError::NotFound("list.md".to_string()))
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    const LESSON: &str = "# 28 - 日常会话\n## 问候语\nおはよう - 早上好\n随便写的\n";
    const INDEX: &str = "# 28 - 日常会话 | 常用口语 | conversation | 45\n# 29 - 购物 | 商店 | shopping | 30\n";

    fn loader() -> LessonLoader {
        let source = MemorySource::new()
            .with_lesson("lesson28", LESSON)
            .with_index(INDEX);
        LessonLoader::new(Box::new(source))
    }

    #[tokio::test]
    async fn test_load_lesson() {
        let lesson = loader().load_lesson("lesson28").await.unwrap();
        assert_eq!(lesson.id, "lesson28");
        assert_eq!(lesson.categories[0].words.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_lesson_propagates() {
        let err = loader().load_lesson("lesson99").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(id) if id == "lesson99"));
    }

    #[tokio::test]
    async fn test_lesson_list() {
        let lessons = loader().lesson_list().await.unwrap();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[1].kind.as_str(), "shopping");
    }

    #[tokio::test]
    async fn test_missing_index_propagates() {
        let loader = LessonLoader::new(Box::new(MemorySource::new()));
        assert!(matches!(
            loader.lesson_list().await,
            Err(LoadError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_summary() {
        let loader = loader();
        let found = loader.find_summary("lesson28").await.unwrap();
        assert_eq!(found.map(|s| s.word_count), Some(45));
        assert!(loader.find_summary("lesson1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lesson_stats() {
        let stats = loader().lesson_stats("lesson28").await.unwrap();
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.category_stats[0].name, "问候语");
    }

    #[tokio::test]
    async fn test_strict_mode_surfaces_parse_errors() {
        let loader = loader().with_mode(ParseMode::Strict);
        assert_eq!(loader.mode(), ParseMode::Strict);

        let err = loader.load_lesson("lesson28").await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse(ParseError::MalformedLine { line: 4, .. })
        ));

        let err = loader.lesson_list().await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse(ParseError::UnknownLessonKind { line: 2, .. })
        ));
    }
}
