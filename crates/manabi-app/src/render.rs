//! Plain text views of parsed records.

use manabi_types::{Lesson, LessonStats, LessonSummary};

pub fn render_list(lessons: &[LessonSummary]) -> String {
    if lessons.is_empty() {
        return "No lessons found".to_string();
    }

    lessons
        .iter()
        .map(|lesson| {
            format!(
                "{:<10} {} [{}, {} words] {}",
                lesson.id, lesson.name, lesson.kind, lesson.word_count, lesson.description
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_lesson(lesson: &Lesson, summary: Option<&LessonSummary>) -> String {
    let mut lines = vec![format!("{} | {} - {}", lesson.id, lesson.kind, lesson.name)];
    if let Some(summary) = summary {
        lines.push(
            format!(
                "{} [{}, {} words listed]",
                summary.description, summary.kind, summary.word_count
            )
            .trim_start()
            .to_string(),
        );
    }

    for category in &lesson.categories {
        lines.push(String::new());
        lines.push(format!("## {} ({})", category.name, category.words.len()));
        for word in &category.words {
            match &word.note {
                Some(note) => lines.push(format!("  {} - {} ({note})", word.japanese, word.chinese)),
                None => lines.push(format!("  {} - {}", word.japanese, word.chinese)),
            }
        }
    }

    for exercise in lesson.exercises() {
        lines.push(String::new());
        lines.push(format!("### {}", exercise.kind));
        for (n, question) in exercise.questions.iter().enumerate() {
            lines.push(format!("  {}. {question}", n + 1));
        }
    }

    lines.join("\n")
}

pub fn render_stats(id: &str, stats: &LessonStats) -> String {
    let mut lines = vec![format!(
        "{}: {} words in {} categories",
        id,
        stats.total_words,
        stats.category_stats.len()
    )];

    for stat in &stats.category_stats {
        lines.push(format!("  {:<12} {}", stat.name, stat.word_count));
    }

    lines.join("\n")
}
