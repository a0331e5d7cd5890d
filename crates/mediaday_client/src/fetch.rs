use std::time::Duration;

use futures_util::StreamExt;
use mediaday_logging::mediaday_debug;
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::{FailureKind, FetchError};

const CONTENT_PATH: &str = "/content";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API base URL. Empty means "same origin as the serving page".
    pub base_url: String,
    /// Origin used to resolve `/content` when `base_url` is empty.
    pub origin: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            origin: "http://localhost:5173".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 256 * 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolves `{base_url}/content`, falling back to the origin when the base is empty.
    pub fn content_url(&self) -> Result<Url, FetchError> {
        let resolved = if self.base_url.is_empty() {
            Url::parse(&self.origin).and_then(|origin| origin.join(CONTENT_PATH))
        } else {
            Url::parse(&format!(
                "{}{CONTENT_PATH}",
                self.base_url.trim_end_matches('/')
            ))
        };
        resolved.map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

/// Raw HTTP result before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ContentResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam: one authenticated `GET {base}/content`.
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, authorization: &str) -> Result<ContentResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestContentFetcher {
    settings: ClientSettings,
}

impl ReqwestContentFetcher {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl ContentFetcher for ReqwestContentFetcher {
    async fn fetch(&self, authorization: &str) -> Result<ContentResponse, FetchError> {
        let url = self.settings.content_url()?;
        let client = self.build_client()?;
        mediaday_debug!("GET {}", url);

        let response = client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let status_text = reason_phrase(&response);

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let body = String::from_utf8_lossy(&bytes).into_owned();
        mediaday_debug!("Response {} with {} body bytes", status.as_u16(), bytes.len());

        Ok(ContentResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// The server's own reason phrase, or the canonical one when it sent the standard text.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
