//! Single-page UI and the read-only data it pulls at load time.

use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::gateway::state::HandlerState;
use emotes::{ClassifierBackend, MetadataSource};

pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn catalog_handler<C, M>(State(state): State<HandlerState<C, M>>) -> Response
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    Json(state.catalog.as_ref()).into_response()
}

pub async fn public_config_handler<C, M>(State(state): State<HandlerState<C, M>>) -> Response
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    Json(state.public_config.as_ref()).into_response()
}
