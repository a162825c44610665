//! Dictionary network client.
//!
//! [`DictionaryClient`] is the seam the controller depends on; the
//! [`HttpDictionaryClient`] implementation speaks to a WordsAPI-compatible
//! HTTP service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::error::FetchError;
use super::model::WordDetail;

/// The two lookups the home screen needs.
#[async_trait]
pub trait DictionaryClient: Send + Sync {
    async fn fetch_random_word(&self) -> Result<WordDetail, FetchError>;
    async fn fetch_word_with_details(&self, word: &str) -> Result<WordDetail, FetchError>;
}

/// Connection settings for [`HttpDictionaryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent as `x-rapidapi-key` when present.
    pub api_key: Option<String>,
    /// Sent as `x-rapidapi-host` when present.
    pub api_host: Option<String>,
    pub timeout: Duration,
}

pub struct HttpDictionaryClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    api_host: Option<String>,
}

impl HttpDictionaryClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::Url(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Url(config.base_url.clone()));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    /// `{base}/words/?random=true&hasDetails=definitions`
    pub fn random_word_url(&self) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["words", ""])?;
        url.query_pairs_mut()
            .append_pair("random", "true")
            .append_pair("hasDetails", "definitions");
        Ok(url)
    }

    /// `{base}/words/{word}` with `word` encoded as a single path segment.
    pub fn word_details_url(&self, word: &str) -> Result<Url, FetchError> {
        self.endpoint(&["words", word])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_word(&self, url: Url) -> Result<WordDetail, FetchError> {
        debug!(%url, "GET");
        let mut req = self.http.get(url.clone());
        if let Some(key) = &self.api_key {
            req = req.header("x-rapidapi-key", key);
        }
        if let Some(host) = &self.api_host {
            req = req.header("x-rapidapi-host", host);
        }

        let res = req.send().await.map_err(FetchError::Transport)?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        res.json::<WordDetail>().await.map_err(FetchError::Decode)
    }
}

#[async_trait]
impl DictionaryClient for HttpDictionaryClient {
    async fn fetch_random_word(&self) -> Result<WordDetail, FetchError> {
        let url = self.random_word_url()?;
        self.get_word(url).await
    }

    async fn fetch_word_with_details(&self, word: &str) -> Result<WordDetail, FetchError> {
        let url = self.word_details_url(word)?;
        self.get_word(url).await
    }
}
