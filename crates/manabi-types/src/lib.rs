pub mod types;

pub use types::{
    Category, CategoryStat, Exercise, Lesson, LessonKind, LessonStats, LessonSummary, Word,
};
