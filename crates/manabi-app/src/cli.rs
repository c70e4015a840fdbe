use std::path::PathBuf;

use clap::{Parser, Subcommand};
use manabi_config::Config;

#[derive(Debug, Parser)]
#[command(name = "manabi", version, about = "Browse markdown language lessons")]
pub struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding `<id>.md` lesson files and `list.md`
    #[arg(long, global = true, conflicts_with = "url")]
    pub root: Option<PathBuf>,

    /// Base URL serving the lesson files
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Fail on unrecognized lines instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all lessons from the index
    List,
    /// Show one lesson's categories, words and exercises
    Show { id: String },
    /// Word counts for one lesson
    Stats { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Command line flags take precedence over file and environment config
    pub fn apply(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.source.root = root.clone();
            config.source.base_url = None;
        }
        if let Some(url) = &self.url {
            config.source.base_url = Some(url.clone());
        }
        if self.strict {
            config.strict = true;
        }
    }
}
