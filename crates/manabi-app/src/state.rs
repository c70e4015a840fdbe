use manabi_config::Config;
use manabi_core::{LessonLoader, LessonSource, ParseMode};
use manabi_io::{FsSource, HttpSource};

pub struct AppState {
    pub config: Config,
    pub loader: LessonLoader,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source: Box<dyn LessonSource> = match &config.source.base_url {
            Some(url) => {
                tracing::info!("Fetching lessons from {url}");
                Box::new(HttpSource::new(url.clone()))
            }
            None => {
                tracing::info!("Reading lessons from {}", config.source.root.display());
                Box::new(FsSource::new(config.source.root.clone()))
            }
        };

        let mode = if config.strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        };

        Self {
            loader: LessonLoader::new(source).with_mode(mode),
            config,
        }
    }
}
