use anyhow::Context;

use crate::cli::OutputFormat;
use crate::render::render_list;
use crate::state::AppState;

pub async fn handle_list(state: &AppState, format: OutputFormat) -> anyhow::Result<String> {
    let lessons = state
        .loader
        .lesson_list()
        .await
        .context("Failed to load lesson list")?;

    tracing::info!("{} lessons listed", lessons.len());

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&lessons)?),
        OutputFormat::Text => Ok(render_list(&lessons)),
    }
}
