use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use emotes::{
    ClassificationResult, ClassifierBackend, EMOTES_STATUS_HEADER, EMOTES_STATUS_OK,
    MetadataSource,
};

#[derive(Debug, Default, Deserialize)]
pub struct ClassifyEmoteQuery {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyEmoteResponse {
    pub data: Vec<ClassificationResult>,
}

#[instrument(skip(state, query))]
pub async fn classify_emote_handler<C, M>(
    State(state): State<HandlerState<C, M>>,
    query: Result<Query<ClassifyEmoteQuery>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    let Query(query) = query.map_err(|e| {
        warn!(error = %e, "Rejected malformed query string");
        GatewayError::InvalidRequest(e.body_text())
    })?;
    let text = validate_text(query.text)?;

    let data = state.finder.find(&text).await.map_err(|e| {
        error!(kind = %e.kind(), error = %e, "Emote classification failed");
        GatewayError::from(e)
    })?;

    info!(results = data.len(), "Classified emote description");
    Ok(make_response(data))
}

pub(crate) fn validate_text(text: Option<String>) -> Result<String, GatewayError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(GatewayError::InvalidRequest(
            "`text` must not be blank".to_string(),
        )),
        None => Err(GatewayError::InvalidRequest(
            "Missing `text` query parameter".to_string(),
        )),
    }
}

pub(crate) fn make_response(data: Vec<ClassificationResult>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        EMOTES_STATUS_HEADER,
        HeaderValue::from_static(EMOTES_STATUS_OK),
    );
    (
        StatusCode::OK,
        headers,
        Json(ClassifyEmoteResponse { data }),
    )
        .into_response()
}
