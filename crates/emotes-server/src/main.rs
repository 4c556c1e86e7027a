//! Emote finder HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use emotes::{
    BttvClient, Config, EmoteCatalog, EmoteFinder, HttpClassifier, HttpClassifierConfig,
    MetadataCache, MetadataCacheConfig, fetch_catalog,
};
use emotes_server::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    if std::env::args().any(|arg| arg == "--fetch-catalog") {
        return refresh_catalog(&http, &config).await;
    }

    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        classify_url = %config.classify_url,
        "Emote finder starting"
    );

    let classifier = HttpClassifier::with_client(
        http.clone(),
        HttpClassifierConfig::new(config.classify_url.clone(), config.classify_token.clone()),
    );
    let metadata = MetadataCache::with_config(
        BttvClient::with_client(http, config.metadata_url.clone()),
        MetadataCacheConfig::new(config.metadata_cache_capacity, config.metadata_cache_ttl),
    );
    let finder = Arc::new(EmoteFinder::new(classifier, metadata));

    let catalog = match EmoteCatalog::load(&config.catalog_path) {
        Ok(catalog) => {
            tracing::info!(
                path = %config.catalog_path.display(),
                emotes = catalog.len(),
                "Loaded emote catalog"
            );
            catalog
        }
        Err(e) => {
            tracing::warn!("Failed to load emote catalog: {}. Starting empty.", e);
            EmoteCatalog::new()
        }
    };

    let state = HandlerState::new(finder, catalog, config.public.clone());
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Emote finder shutdown complete");
    Ok(())
}

/// `--fetch-catalog`: scrape the catalog source once, write it to disk, exit.
async fn refresh_catalog(http: &reqwest::Client, config: &Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.catalog_source_url, "Fetching emote catalog");

    let catalog = fetch_catalog(http, &config.catalog_source_url).await?;
    catalog.save(&config.catalog_path)?;

    tracing::info!(
        path = %config.catalog_path.display(),
        emotes = catalog.len(),
        "Emote catalog written"
    );
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("EMOTES_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
