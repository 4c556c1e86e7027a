use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::error::MetadataError;
use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_METADATA_URL};

/// Upstream able to name the owner of an emote.
pub trait MetadataSource: Send + Sync {
    /// Returns the display name of the user who uploaded emote `id`.
    fn owner_display_name(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<String, MetadataError>> + Send;
}

/// Subset of the BetterTTV `GET /3/emotes/{id}` response we rely on.
#[derive(Debug, Clone, Deserialize)]
pub struct BttvEmote {
    pub user: BttvUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BttvUser {
    pub display_name: String,
}

/// [`MetadataSource`] backed by the public BetterTTV API.
#[derive(Debug, Clone)]
pub struct BttvClient {
    http: HttpClient,
    base_url: String,
}

impl BttvClient {
    /// Creates a client for `base_url` (e.g. `https://api.betterttv.net/3/emotes`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Appends `id` to the base URL as a single, percent-encoded path segment.
    pub fn emote_url(&self, id: &str) -> Result<Url, MetadataError> {
        let invalid = || MetadataError::InvalidUrl {
            id: id.to_string(),
            base_url: self.base_url.clone(),
        };

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

impl Default for BttvClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_METADATA_URL,
            Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        )
    }
}

impl MetadataSource for BttvClient {
    #[instrument(skip(self))]
    async fn owner_display_name(&self, id: &str) -> Result<String, MetadataError> {
        let resp = self
            .http
            .get(self.emote_url(id)?)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| MetadataError::Request {
                id: id.to_string(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                id: id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| MetadataError::Request {
            id: id.to_string(),
            source: e,
        })?;

        let emote: BttvEmote =
            serde_json::from_slice(&body).map_err(|e| MetadataError::Decode {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        Ok(emote.user.display_name)
    }
}
