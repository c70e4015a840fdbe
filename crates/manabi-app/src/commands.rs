use crate::cli::{Command, OutputFormat};
use crate::state::AppState;

pub mod list;
pub mod show;
pub mod stats;

use list::handle_list;
use show::handle_show;
use stats::handle_stats;

/// Run one command and return what should be printed
pub async fn run_command(
    state: &AppState,
    command: &Command,
    format: OutputFormat,
) -> anyhow::Result<String> {
    tracing::debug!("Running {:?} (strict: {})", command, state.config.strict);
    match command {
        Command::List => handle_list(state, format).await,
        Command::Show { id } => handle_show(state, id, format).await,
        Command::Stats { id } => handle_stats(state, id, format).await,
    }
}
