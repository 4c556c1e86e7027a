use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use emotes::{EMOTES_STATUS_ERROR, EMOTES_STATUS_HEADER, FinderError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("classification failed: {0}")]
    Classification(#[from] FinderError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Classification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Details stay in the server log; the caller only sees the status code.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            EMOTES_STATUS_HEADER,
            HeaderValue::from_static(EMOTES_STATUS_ERROR),
        );

        (self.status_code(), headers).into_response()
    }
}
