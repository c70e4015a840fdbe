use anyhow::Context;

use crate::cli::OutputFormat;
use crate::render::render_stats;
use crate::state::AppState;

pub async fn handle_stats(state: &AppState, id: &str, format: OutputFormat) -> anyhow::Result<String> {
    let stats = state
        .loader
        .lesson_stats(id)
        .await
        .with_context(|| format!("Failed to load lesson {id}"))?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => Ok(render_stats(id, &stats)),
    }
}
