use thiserror::Error;

/// Errors returned by the classification client.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("classification request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("classification service returned status {status}")]
    Status { status: u16 },

    /// The body did not match `{ data: [ { confidences: [...] } ] }`.
    #[error("malformed classification response: {message}")]
    Decode { message: String },

    /// The body decoded but `data` was empty.
    #[error("classification response contained no predictions")]
    EmptyResponse,
}

impl ClassifierError {
    /// Returns `true` when the service answered but the body was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ClassifierError::Decode { .. } | ClassifierError::EmptyResponse
        )
    }
}
