use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::source::SourceConfig;

pub mod log;
pub mod source;

pub use self::log::LogFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub log: LogConfig,
    /// Reject documents with unrecognized lines instead of skipping them
    pub strict: bool,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        let strict = env::var("MANABI_STRICT")
            .map(|v| flag_or("MANABI_STRICT", &v, false))
            .unwrap_or(false);

        Config {
            source: SourceConfig::new(),
            log: LogConfig::new(),
            strict,
        }
    }

    /// Load a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

fn flag_or(name: &str, value: &str, default: bool) -> bool {
    parse_flag(value).unwrap_or_else(|| {
        tracing::warn!("Invalid {name}={value:?}, using {default}");
        default
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.root, PathBuf::from("src/data/lessons"));
        assert_eq!(config.source.base_url, None);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(!config.strict);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "strict": true, "source": {{ "base_url": "http://localhost:5173/lessons" }}, "log": {{ "format": "json" }} }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.strict);
        assert_eq!(
            config.source.base_url.as_deref(),
            Some("http://localhost:5173/lessons")
        );
        assert_eq!(config.source.root, PathBuf::from("src/data/lessons"));
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/manabi.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_invalid_flag_falls_back() {
        assert!(!flag_or("MANABI_STRICT", "maybe", false));
        assert!(flag_or("MANABI_STRICT", "maybe", true));
        assert!(flag_or("MANABI_STRICT", "on", false));
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
