use anyhow::Context;
use clap::Parser;
use manabi_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod state;


use self::cli::Cli;
use self::commands::run_command;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = tracing::subscriber::with_default(logging::bootstrap_subscriber(), || {
        match &cli.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(Config::new()),
        }
    })?;
    cli.apply(&mut config);

    logging::init_tracing(&config.log)?;

    let state = AppState::new(config);
    let output = run_command(&state, &cli.command, cli.output_format()).await?;
    println!("{output}");

    Ok(())
}
