//! Test server harness.

#![allow(dead_code)]

use emotes::{
    BttvClient, EmoteCatalog, EmoteFinder, HttpClassifier, HttpClassifierConfig, MetadataCache,
    MetadataCacheConfig, PublicConfig,
};
use emotes_server::gateway::{HandlerState, create_router_with_state};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;
const UPSTREAM_TIMEOUT_SECS: u64 = 5;

pub const TEST_CLASSIFY_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    pub classify_url: String,
    pub metadata_url: String,
    pub catalog: EmoteCatalog,
    pub public: PublicConfig,
}

impl TestServerConfig {
    /// Points both upstream clients at the given base URL (usually a wiremock server).
    pub fn with_upstream(base_url: &str) -> Self {
        Self {
            port: 0,
            classify_url: format!("{}/run/predict", base_url),
            metadata_url: format!("{}/3/emotes", base_url),
            catalog: EmoteCatalog::new(),
            public: PublicConfig::default(),
        }
    }

    pub fn catalog(mut self, catalog: EmoteCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Spawns the real router with the real HTTP upstream clients.
///
/// Only the upstreams are fake: point `classify_url` and `metadata_url` at a
/// `wiremock::MockServer` to control what the classifier and BTTV answer.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
        .build()
        .map_err(|e| ServerStartupError::BindError(std::io::Error::other(e)))?;

    let classifier = HttpClassifier::with_client(
        http.clone(),
        HttpClassifierConfig::new(config.classify_url, TEST_CLASSIFY_TOKEN),
    );
    let metadata = MetadataCache::with_config(
        BttvClient::with_client(http, config.metadata_url),
        MetadataCacheConfig::default(),
    );
    let finder = Arc::new(EmoteFinder::new(classifier, metadata));

    let state = HandlerState::new(finder, config.catalog, config.public);
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
