//! Pre-fetched directory of Twitch global emotes.
//!
//! Built by scraping the twitchemotes.com front page once, persisted as JSON, and
//! served read-only to the UI.

pub mod error;
pub mod scrape;


pub use error::CatalogError;
pub use scrape::{parse_catalog, unescape_html};

use std::collections::BTreeMap;
use std::path::Path;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub image_link: String,
    pub link: String,
}

/// Emote name -> image and detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmoteCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl EmoteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` unless `name` is already present. Returns whether it was added.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, entry: CatalogEntry) -> bool {
        match self.entries.entry(name.into()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a catalog previously written by [`EmoteCatalog::save`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_slice(&raw).map_err(|e| CatalogError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Writes the catalog as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_vec_pretty(self).map_err(|e| CatalogError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Downloads `url` and parses it with [`parse_catalog`].
#[instrument(skip(http))]
pub async fn fetch_catalog(http: &HttpClient, url: &str) -> Result<EmoteCatalog, CatalogError> {
    let resp = http
        .get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Request {
            url: url.to_string(),
            source: e,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let html = resp.text().await.map_err(|e| CatalogError::Request {
        url: url.to_string(),
        source: e,
    })?;

    let catalog = parse_catalog(&html, url)?;
    info!(emotes = catalog.len(), "Fetched emote catalog");
    Ok(catalog)
}
