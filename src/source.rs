//! Translation sources: where a language's table comes from.
//!
//! A source fetches one JSON table per language, addressed by `<code>.json`.
//! Anything short of a complete, well-formed table is a [`LoadError`]; a
//! source never hands back a partial table.

use crate::i18n::{Language, TableError, TranslationTable};
use crate::retry::{with_retry_if, RetryConfig};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Failure to obtain a translation table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation table at {location}: {source}")]
    InvalidTable {
        location: String,
        #[source]
        source: TableError,
    },
}

impl LoadError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Network failures and server errors are transient; missing files,
    /// client errors and malformed tables are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Transport { .. } => true,
            LoadError::Status { status, .. } => status.is_server_error(),
            LoadError::Io { .. } | LoadError::InvalidTable { .. } => false,
        }
    }
}

/// Provider of translation tables, one per language.
///
/// Futures are not required to be `Send`: the controller runs on a single
/// cooperative thread, and platform fetch futures often are not `Send`.
#[async_trait(?Send)]
pub trait TranslationSource {
    async fn fetch_table(&self, language: Language) -> Result<TranslationTable, LoadError>;
}

#[async_trait(?Send)]
impl<T: TranslationSource + ?Sized> TranslationSource for Box<T> {
    async fn fetch_table(&self, language: Language) -> Result<TranslationTable, LoadError> {
        (**self).fetch_table(language).await
    }
}

/// Fetches `<base_url>/<code>.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTranslationSource {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl HttpTranslationSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            retry: RetryConfig::default(),
        }
    }

    /// Use a preconfigured client (timeouts, headers, proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Location of a language's table.
    pub fn url_for(&self, language: Language) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), language.code())
    }

    async fn fetch_once(&self, url: &str) -> Result<TranslationTable, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| LoadError::Transport {
            url: url.to_string(),
            source,
        })?;

        TranslationTable::from_json_str(&body).map_err(|source| LoadError::InvalidTable {
            location: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl TranslationSource for HttpTranslationSource {
    async fn fetch_table(&self, language: Language) -> Result<TranslationTable, LoadError> {
        let url = self.url_for(language);
        debug!(language = %language, url = %url, "Fetching translation table");

        let url = url.as_str();
        with_retry_if(
            &self.retry,
            "translation fetch",
            move || self.fetch_once(url),
            LoadError::is_retryable,
        )
        .await
    }
}

/// Reads `<dir>/<code>.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryTranslationSource {
    dir: PathBuf,
}

impl DirectoryTranslationSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of a language's table.
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.dir.join(format!("{}.json", language.code()))
    }
}

#[async_trait(?Send)]
impl TranslationSource for DirectoryTranslationSource {
    async fn fetch_table(&self, language: Language) -> Result<TranslationTable, LoadError> {
        let path = self.path_for(language);
        debug!(language = %language, path = %path.display(), "Reading translation table");

        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;

        TranslationTable::from_json_str(&body).map_err(|source| LoadError::InvalidTable {
            location: path.display().to_string(),
            source,
        })
    }
}
