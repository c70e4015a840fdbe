use manabi_types::{CategoryStat, Lesson, LessonStats};

/// Word totals for a parsed lesson, in category order
pub fn compute_stats(lesson: &Lesson) -> LessonStats {
    let category_stats: Vec<CategoryStat> = lesson
        .categories
        .iter()
        .map(|category| CategoryStat {
            name: category.name.clone(),
            word_count: category.words.len(),
        })
        .collect();

    LessonStats {
        total_words: category_stats.iter().map(|s| s.word_count).sum(),
        category_stats,
    }
}

#[cfg(test)]
mod tests {
    use manabi_types::{Category, Word};

    use super::*;

    fn category(name: &str, size: usize) -> Category {
        Category {
            name: name.to_string(),
            words: (0..size)
                .map(|i| Word::new(format!("語{i}"), format!("词{i}")))
                .collect(),
        }
    }

    #[test]
    fn test_stats_preserve_order() {
        let lesson = Lesson {
            categories: vec![category("甲", 2), category("乙", 0), category("丙", 3)],
            ..Default::default()
        };

        let stats = compute_stats(&lesson);
        assert_eq!(stats.total_words, 5);

        let counts: Vec<(&str, usize)> = stats
            .category_stats
            .iter()
            .map(|s| (s.name.as_str(), s.word_count))
            .collect();
        assert_eq!(counts, vec![("甲", 2), ("乙", 0), ("丙", 3)]);
    }

    #[test]
    fn test_stats_for_empty_lesson() {
        let stats = compute_stats(&Lesson::default());
        assert_eq!(stats, LessonStats::default());
    }

    #[test]
    fn test_stats_match_lesson_word_count() {
        let lesson = crate::lesson::parse("# 1 - 一\n## 甲\na - b\nc - d\n## 乙\ne - f");
        assert_eq!(compute_stats(&lesson).total_words, lesson.word_count());
    }
}
