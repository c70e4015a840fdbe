use async_trait::async_trait;
use manabi_core::source::{INDEX_DOCUMENT, lesson_document};
use manabi_core::{LessonSource, LoadError};
use reqwest::StatusCode;

/// Fetches `<base_url>/<id>.md` and `<base_url>/list.md` over HTTP
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured client, e.g. with timeouts or proxy settings
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    async fn get(&self, name: &str) -> Result<String, LoadError> {
        let url = self.url_for(name);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch {
                path: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound(url));
        }

        if !status.is_success() {
            return Err(LoadError::Fetch {
                path: url,
                reason: status.to_string(),
            });
        }

        response.text().await.map_err(|e| LoadError::Fetch {
            path: url,
            reason: format!("Failed to read body: {e}"),
        })
    }
}

#[async_trait]
impl LessonSource for HttpSource {
    async fn fetch_lesson(&self, id: &str) -> Result<String, LoadError> {
        let name = lesson_document(id)?;
        self.get(&name).await
    }

    async fn fetch_index(&self) -> Result<String, LoadError> {
        self.get(INDEX_DOCUMENT).await
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
