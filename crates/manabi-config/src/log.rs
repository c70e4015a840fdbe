use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {other:?}")),
        }
    }
}

fn format_or_default(value: &str) -> LogFormat {
    value.parse().unwrap_or_else(|e| {
        tracing::warn!("Invalid MANABI_LOG_FORMAT: {e}, using text");
        LogFormat::default()
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by RUST_LOG
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl LogConfig {
    pub fn new() -> Self {
        let level = env::var("MANABI_LOG_LEVEL").unwrap_or_else(|_| default_level());

        let format = env::var("MANABI_LOG_FORMAT")
            .map(|v| format_or_default(&v))
            .unwrap_or_default();

        Self { level, format }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_falls_back_to_text() {
        assert_eq!(format_or_default("xml"), LogFormat::Text);
        assert_eq!(format_or_default(" Json "), LogFormat::Json);
    }
}
