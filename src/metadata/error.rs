use thiserror::Error;

/// Errors returned while resolving an emote's owner.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The request never produced a response.
    #[error("metadata request for emote '{id}' failed: {source}")]
    Request {
        id: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL cannot take an id path segment.
    #[error("cannot build metadata URL for emote '{id}' from '{base_url}'")]
    InvalidUrl { id: String, base_url: String },

    /// The service answered with a non-success status.
    #[error("metadata service returned status {status} for emote '{id}'")]
    Status { id: String, status: u16 },

    /// The body did not contain `user.displayName`.
    #[error("malformed metadata for emote '{id}': {message}")]
    Decode { id: String, message: String },
}

impl MetadataError {
    /// Returns `true` when the service answered but the body was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, MetadataError::Decode { .. })
    }
}
