use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use lesson_core::model::LessonsFile;
use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::error::LessonsError;

/// Path of the dataset relative to the site root.
pub const DATASET_PATH: &str = "/lessons/lessons.json";

/// Where the lessons dataset comes from.
#[async_trait]
pub trait LessonsSource: Send + Sync {
    /// Fetch and parse the full dataset.
    ///
    /// # Errors
    ///
    /// Returns `LessonsError` when the dataset cannot be retrieved or parsed.
    async fn fetch(&self) -> Result<LessonsFile, LessonsError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Fetches `/lessons/lessons.json` from a web origin.
#[derive(Clone)]
pub struct HttpLessonsSource {
    client: Client,
    url: Url,
}

impl HttpLessonsSource {
    /// Build a source for the dataset served under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the dataset URL cannot be derived.
    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: Client::new(),
            url: base_url.join(DATASET_PATH)?,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl LessonsSource for HttpLessonsSource {
    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<LessonsFile, LessonsError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(LessonsError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the dataset from a local JSON file.
#[derive(Clone, Debug)]
pub struct FileLessonsSource {
    path: PathBuf,
}

impl FileLessonsSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LessonsSource for FileLessonsSource {
    #[instrument(level = "info", skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<LessonsFile, LessonsError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Configured dataset location: a web origin or a file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonsLocation {
    Http(Url),
    File(PathBuf),
}

impl LessonsLocation {
    /// `http://` and `https://` values are origins; anything else is a path.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` for a malformed web origin.
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Url::parse(trimmed).map(Self::Http);
        }
        Ok(Self::File(PathBuf::from(trimmed)))
    }

    /// Build the matching source.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the dataset URL cannot be derived.
    pub fn into_source(self) -> Result<Arc<dyn LessonsSource>, url::ParseError> {
        Ok(match self {
            Self::Http(base) => Arc::new(HttpLessonsSource::new(&base)?),
            Self::File(path) => Arc::new(FileLessonsSource::new(path)),
        })
    }
}
