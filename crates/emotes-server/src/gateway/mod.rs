//! HTTP gateway (Axum) for the emote classifier proxy and its UI.
//!
//! This module is primarily used by the `emotes-server` binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod state;
pub mod ui;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

pub use handler::classify_emote_handler;
pub use state::HandlerState;

use emotes::{
    ClassifierBackend, EMOTES_STATUS_HEADER, EMOTES_STATUS_OK, EMOTES_STATUS_PENDING,
    EMOTES_STATUS_READY, MetadataSource,
};

pub fn create_router_with_state<C, M>(state: HandlerState<C, M>) -> Router
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/classify-emote", get(classify_emote_handler))
        .route("/api/emotes", get(ui::catalog_handler))
        .route("/api/public-config", get(ui::public_config_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ComponentStatus {
    pub http: String,
    pub catalog: String,
    pub catalog_entries: usize,
    pub metadata_cache_entries: u64,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        EMOTES_STATUS_HEADER,
        HeaderValue::from_static(EMOTES_STATUS_OK),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: EMOTES_STATUS_OK.to_string(),
        }),
    )
        .into_response()
}

/// Reports component state. An empty catalog only degrades the UI's motivation
/// panel, so it does not make the server unready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<C, M>(State(state): State<HandlerState<C, M>>) -> Response
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    let catalog_status = if state.catalog.is_empty() {
        EMOTES_STATUS_PENDING
    } else {
        EMOTES_STATUS_READY
    };

    let components = ComponentStatus {
        http: EMOTES_STATUS_READY.to_string(),
        catalog: catalog_status.to_string(),
        catalog_entries: state.catalog.len(),
        metadata_cache_entries: state.finder.metadata().len(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        EMOTES_STATUS_HEADER,
        HeaderValue::from_static(EMOTES_STATUS_OK),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: EMOTES_STATUS_OK.to_string(),
            components,
        }),
    )
        .into_response()
}
