use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_root() -> PathBuf {
    PathBuf::from("src/data/lessons")
}

/// Where lesson documents are fetched from.
/// `base_url` takes precedence over `root` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl SourceConfig {
    pub fn new() -> Self {
        let root = env::var("MANABI_LESSONS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_root());

        let base_url = env::var("MANABI_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self { root, base_url }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            base_url: None,
        }
    }
}
