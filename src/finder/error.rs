use std::sync::Arc;

use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::label::LabelError;
use crate::metadata::MetadataError;

/// Why a query could not be answered. Never shown to the caller verbatim.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("owner lookup for emote '{id}' failed: {source}")]
    Metadata {
        id: String,
        #[source]
        source: Arc<MetadataError>,
    },

    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Coarse failure category, used as a structured logging field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UpstreamUnavailable,
    MalformedUpstreamResponse,
    LabelParse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::MalformedUpstreamResponse => "malformed_upstream_response",
            ErrorKind::LabelParse => "label_parse_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FinderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinderError::Classifier(e) if e.is_malformed() => ErrorKind::MalformedUpstreamResponse,
            FinderError::Classifier(_) => ErrorKind::UpstreamUnavailable,
            FinderError::Metadata { source, .. } if source.is_malformed() => {
                ErrorKind::MalformedUpstreamResponse
            }
            FinderError::Metadata { .. } => ErrorKind::UpstreamUnavailable,
            FinderError::Label(_) => ErrorKind::LabelParse,
        }
    }
}
