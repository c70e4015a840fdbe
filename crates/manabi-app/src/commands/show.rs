use anyhow::Context;

use crate::cli::OutputFormat;
use crate::render::render_lesson;
use crate::state::AppState;

pub async fn handle_show(state: &AppState, id: &str, format: OutputFormat) -> anyhow::Result<String> {
    let lesson = state
        .loader
        .load_lesson(id)
        .await
        .with_context(|| format!("Failed to load lesson {id}"))?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&lesson)?),
        OutputFormat::Text => {
            // The index is optional for a single lesson
            let summary = match state.loader.find_summary(id).await {
                Ok(summary) => summary,
                Err(e) => {
                    tracing::warn!("No index entry for {id}: {e}");
                    None
                }
            };
            Ok(render_lesson(&lesson, summary.as_ref()))
        }
    }
}
