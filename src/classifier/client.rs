use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::{debug, instrument};

use super::error::ClassifierError;
use super::model::{ClassifyRequest, ClassifyResponse, Confidence};
use crate::constants::{CLASSIFY_TOKEN_COOKIE, DEFAULT_HTTP_TIMEOUT_SECS};

/// Backend able to rank emote labels for a free-text description.
pub trait ClassifierBackend: Send + Sync {
    /// Returns the ranked confidences for `text`, best first.
    fn classify(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Confidence>, ClassifierError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpClassifierConfig {
    pub url: String,
    pub token: String,
    pub timeout: Duration,
}

impl HttpClassifierConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// [`ClassifierBackend`] talking to the hosted model over HTTP.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: HttpClient,
    url: String,
    cookie: String,
}

impl HttpClassifier {
    pub fn new(config: HttpClassifierConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        Self::with_client(http, config)
    }

    /// Builds a classifier on top of an existing client (shared connection pool).
    pub fn with_client(http: HttpClient, config: HttpClassifierConfig) -> Self {
        Self {
            http,
            url: config.url,
            cookie: format!("{}={}", CLASSIFY_TOKEN_COOKIE, config.token),
        }
    }
}

impl ClassifierBackend for HttpClassifier {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn classify(&self, text: &str) -> Result<Vec<Confidence>, ClassifierError> {
        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, &self.cookie)
            .json(&ClassifyRequest::new(text))
            .send()
            .await
            .map_err(|e| ClassifierError::Request {
                url: self.url.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClassifierError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| ClassifierError::Request {
            url: self.url.clone(),
            source: e,
        })?;

        let parsed: ClassifyResponse =
            serde_json::from_slice(&body).map_err(|e| ClassifierError::Decode {
                message: e.to_string(),
            })?;

        if let Some(duration) = parsed.duration {
            debug!(duration_secs = duration, "Classification service responded");
        }

        parsed
            .into_confidences()
            .ok_or(ClassifierError::EmptyResponse)
    }
}
