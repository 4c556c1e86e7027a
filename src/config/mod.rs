//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `EMOTES_*` environment variables.
//! `EMOTES_CLASSIFY_URL` has no default and is enforced by [`Config::validate`].

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    DEFAULT_CATALOG_SOURCE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_METADATA_URL,
};
use crate::metadata::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `EMOTES_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `3000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Endpoint of the hosted classification model. Required.
    pub classify_url: String,

    /// Pre-shared token sent as the `access-token` cookie. Default: empty.
    pub classify_token: String,

    /// Base URL of the BetterTTV emote metadata API. Default: `https://api.betterttv.net/3/emotes`.
    pub metadata_url: String,

    /// Max entries kept in the metadata cache. Default: `10_000`.
    pub metadata_cache_capacity: u64,

    /// Time-to-live of a cached owner display name. Default: 24h.
    pub metadata_cache_ttl: Duration,

    /// Request timeout for every outbound HTTP call. Default: 30s.
    pub http_timeout: Duration,

    /// Where the pre-fetched emote catalog is read from and written to.
    pub catalog_path: PathBuf,

    /// Page scraped by `--fetch-catalog`. Default: `https://twitchemotes.com/`.
    pub catalog_source_url: String,

    /// Analytics identifiers handed to the UI untouched.
    pub public: PublicConfig,
}

/// Browser-visible settings. Nothing here is secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub ackee_url: Option<String>,
    pub ackee_domain_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            classify_url: String::new(),
            classify_token: String::new(),
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            metadata_cache_capacity: DEFAULT_CACHE_CAPACITY,
            metadata_cache_ttl: DEFAULT_CACHE_TTL,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            catalog_path: PathBuf::from("./emotes-catalog.json"),
            catalog_source_url: DEFAULT_CATALOG_SOURCE_URL.to_string(),
            public: PublicConfig::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "EMOTES_PORT";
    const ENV_BIND_ADDR: &'static str = "EMOTES_BIND_ADDR";
    const ENV_CLASSIFY_URL: &'static str = "EMOTES_CLASSIFY_URL";
    const ENV_CLASSIFY_TOKEN: &'static str = "EMOTES_CLASSIFY_TOKEN";
    const ENV_METADATA_URL: &'static str = "EMOTES_METADATA_URL";
    const ENV_METADATA_CACHE_CAPACITY: &'static str = "EMOTES_METADATA_CACHE_CAPACITY";
    const ENV_METADATA_CACHE_TTL_SECS: &'static str = "EMOTES_METADATA_CACHE_TTL_SECS";
    const ENV_HTTP_TIMEOUT_SECS: &'static str = "EMOTES_HTTP_TIMEOUT_SECS";
    const ENV_CATALOG_PATH: &'static str = "EMOTES_CATALOG_PATH";
    const ENV_CATALOG_SOURCE_URL: &'static str = "EMOTES_CATALOG_SOURCE_URL";
    const ENV_ACKEE_URL: &'static str = "EMOTES_ACKEE_URL";
    const ENV_ACKEE_DOMAIN_ID: &'static str = "EMOTES_ACKEE_DOMAIN_ID";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let classify_url =
            Self::parse_string_from_env(Self::ENV_CLASSIFY_URL, defaults.classify_url);
        let classify_token =
            Self::parse_string_from_env(Self::ENV_CLASSIFY_TOKEN, defaults.classify_token);
        let metadata_url =
            Self::parse_string_from_env(Self::ENV_METADATA_URL, defaults.metadata_url);
        let metadata_cache_capacity = Self::parse_u64_from_env(
            Self::ENV_METADATA_CACHE_CAPACITY,
            defaults.metadata_cache_capacity,
        );
        let metadata_cache_ttl = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_METADATA_CACHE_TTL_SECS,
            defaults.metadata_cache_ttl.as_secs(),
        ));
        let http_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_HTTP_TIMEOUT_SECS,
            defaults.http_timeout.as_secs(),
        ));
        let catalog_path =
            Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let catalog_source_url =
            Self::parse_string_from_env(Self::ENV_CATALOG_SOURCE_URL, defaults.catalog_source_url);
        let public = PublicConfig {
            ackee_url: Self::parse_optional_string_from_env(Self::ENV_ACKEE_URL),
            ackee_domain_id: Self::parse_optional_string_from_env(Self::ENV_ACKEE_DOMAIN_ID),
        };

        Ok(Self {
            port,
            bind_addr,
            classify_url,
            classify_token,
            metadata_url,
            metadata_cache_capacity,
            metadata_cache_ttl,
            http_timeout,
            catalog_path,
            catalog_source_url,
            public,
        })
    }

    /// Validates required settings, URL shapes and non-zero limits (no upstream calls).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classify_url.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_CLASSIFY_URL,
            });
        }

        Self::validate_url(Self::ENV_CLASSIFY_URL, &self.classify_url)?;
        Self::validate_url(Self::ENV_METADATA_URL, &self.metadata_url)?;
        Self::validate_url(Self::ENV_CATALOG_SOURCE_URL, &self.catalog_source_url)?;

        if let Some(ref url) = self.public.ackee_url {
            Self::validate_url(Self::ENV_ACKEE_URL, url)?;
        }

        if self.metadata_cache_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                name: Self::ENV_METADATA_CACHE_CAPACITY,
            });
        }

        if self.metadata_cache_ttl.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: Self::ENV_METADATA_CACHE_TTL_SECS,
            });
        }

        if self.http_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: Self::ENV_HTTP_TIMEOUT_SECS,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn validate_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
        url::Url::parse(value)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidUrl {
                name,
                value: value.to_string(),
                source: e,
            })
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
