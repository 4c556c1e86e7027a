//! Emote finder library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`EmoteFinder`], [`FinderError`] - Classification + enrichment pipeline
//! - [`ClassificationResult`] - One decoded candidate returned to the UI
//!
//! ## Upstream Clients
//! - [`HttpClassifier`], [`ClassifierBackend`] - External classification service
//! - [`BttvClient`], [`MetadataSource`], [`MetadataCache`] - Owner display names
//!
//! ## Labels & Links
//! - [`parse_label`], [`DecodedLabel`], [`EmoteSource`] - Raw label decoding
//!
//! ## Catalog
//! - [`EmoteCatalog`], [`parse_catalog`], [`fetch_catalog`] - Pre-fetched global emotes
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod finder;
pub mod label;
pub mod metadata;

pub use catalog::{CatalogEntry, CatalogError, EmoteCatalog, fetch_catalog, parse_catalog};
pub use classifier::{
    ClassifierBackend, ClassifierError, Confidence, HttpClassifier, HttpClassifierConfig,
};
#[cfg(any(test, feature = "mock"))]
pub use classifier::MockClassifier;
pub use config::{Config, ConfigError, PublicConfig};
pub use constants::{
    EMOTES_STATUS_ERROR, EMOTES_STATUS_HEADER, EMOTES_STATUS_OK, EMOTES_STATUS_PENDING,
    EMOTES_STATUS_READY, LABEL_DELIMITER, TWITCH_DISPLAY_NAME,
};
pub use finder::{ClassificationResult, EmoteFinder, EmoteUser, ErrorKind, FinderError};
pub use label::{DecodedLabel, EmoteSource, LabelError, parse_label};
#[cfg(any(test, feature = "mock"))]
pub use metadata::MockMetadataSource;
pub use metadata::{
    BttvClient, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL, MetadataCache, MetadataCacheConfig,
    MetadataError, MetadataSource,
};
