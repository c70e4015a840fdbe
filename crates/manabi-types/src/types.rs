use std::fmt;

use serde::{Deserialize, Serialize};

/// A single vocabulary pair inside a category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Word {
    pub japanese: String,
    pub chinese: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Word {
    pub fn new(japanese: impl Into<String>, chinese: impl Into<String>) -> Self {
        Self {
            japanese: japanese.into(),
            chinese: chinese.into(),
            note: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<Word>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise label, e.g. "听力练习"
    #[serde(rename = "type")]
    pub kind: String,
    pub questions: Vec<String>,
}

/// One parsed lesson document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Always `"lesson"` followed by the first digit run of `kind`
    pub id: String,
    /// Lesson label from the header, e.g. "28" or "第28课"
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,
}

impl Lesson {
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    pub fn exercises(&self) -> &[Exercise] {
        self.exercises.as_deref().unwrap_or_default()
    }
}

/// Lesson category as listed in the index document.
///
/// Unrecognized labels are carried through as `Other` and serialize back to
/// the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LessonKind {
    Vocabulary,
    Conversation,
    Business,
    Travel,
    Culture,
    Other(String),
}

impl LessonKind {
    /// Parse one of the known labels, `None` for anything else
    pub fn known(s: &str) -> Option<Self> {
        match s {
            "vocabulary" => Some(LessonKind::Vocabulary),
            "conversation" => Some(LessonKind::Conversation),
            "business" => Some(LessonKind::Business),
            "travel" => Some(LessonKind::Travel),
            "culture" => Some(LessonKind::Culture),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LessonKind::Vocabulary => "vocabulary",
            LessonKind::Conversation => "conversation",
            LessonKind::Business => "business",
            LessonKind::Travel => "travel",
            LessonKind::Culture => "culture",
            LessonKind::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LessonKind::Other(_))
    }
}

impl From<&str> for LessonKind {
    fn from(s: &str) -> Self {
        LessonKind::known(s).unwrap_or_else(|| LessonKind::Other(s.to_string()))
    }
}

impl From<String> for LessonKind {
    fn from(s: String) -> Self {
        match LessonKind::known(&s) {
            Some(kind) => kind,
            None => LessonKind::Other(s),
        }
    }
}

impl From<LessonKind> for String {
    fn from(kind: LessonKind) -> Self {
        match kind {
            LessonKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the lesson index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub word_count: u32,
    #[serde(rename = "type")]
    pub kind: LessonKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub name: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStats {
    pub total_words: usize,
    pub category_stats: Vec<CategoryStat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_kind_known_labels() {
        assert_eq!(LessonKind::from("travel"), LessonKind::Travel);
        assert_eq!(LessonKind::from("culture").as_str(), "culture");
        assert!(LessonKind::from("business").is_known());
    }

    #[test]
    fn test_lesson_kind_passes_unknown_through() {
        let kind = LessonKind::from("grammar");
        assert_eq!(kind, LessonKind::Other("grammar".to_string()));
        assert!(!kind.is_known());
        assert_eq!(String::from(kind), "grammar");
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = LessonSummary {
            id: "lesson28".to_string(),
            name: "日常会话".to_string(),
            description: "常用口语".to_string(),
            word_count: 45,
            kind: LessonKind::Conversation,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["wordCount"], 45);
        assert_eq!(json["type"], "conversation");

        let back: LessonSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_lesson_json_omits_missing_exercises_and_notes() {
        let lesson = Lesson {
            id: "lesson1".to_string(),
            kind: "1".to_string(),
            name: "入门".to_string(),
            categories: vec![Category {
                name: "问候语".to_string(),
                words: vec![Word::new("おはよう", "早上好")],
            }],
            exercises: None,
        };

        let json = serde_json::to_value(&lesson).unwrap();
        assert!(json.get("exercises").is_none());
        assert!(json["categories"][0]["words"][0].get("note").is_none());
        assert_eq!(json["type"], "1");
    }

    #[test]
    fn test_lesson_word_count() {
        let mut first = Category::new("a");
        first.words.push(Word::new("一", "一"));
        first.words.push(Word::new("二", "二"));
        let lesson = Lesson {
            categories: vec![first, Category::new("b")],
            ..Default::default()
        };

        assert_eq!(lesson.word_count(), 2);
        assert!(lesson.exercises().is_empty());
    }
}
