//! Classification + enrichment pipeline behind `GET /api/classify-emote`.
//!
//! One query makes one classifier call, then decodes every returned label and
//! resolves BTTV owners concurrently. Results keep the classifier's rank order.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, FinderError};
pub use types::{ClassificationResult, EmoteUser};

use futures_util::future::try_join_all;
use tracing::{debug, instrument};

use crate::classifier::{ClassifierBackend, Confidence};
use crate::constants::TWITCH_DISPLAY_NAME;
use crate::label::{DecodedLabel, EmoteSource, parse_label};
use crate::metadata::{MetadataCache, MetadataSource};

pub struct EmoteFinder<C: ClassifierBackend, M: MetadataSource> {
    classifier: C,
    metadata: MetadataCache<M>,
}

impl<C, M> EmoteFinder<C, M>
where
    C: ClassifierBackend,
    M: MetadataSource,
{
    pub fn new(classifier: C, metadata: MetadataCache<M>) -> Self {
        Self {
            classifier,
            metadata,
        }
    }

    /// Classifies `text` and returns one result per ranked label.
    ///
    /// Every label is decoded before any owner lookup is issued, so a bad label
    /// fails the query without touching the metadata service.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn find(&self, text: &str) -> Result<Vec<ClassificationResult>, FinderError> {
        let confidences = self.classifier.classify(text).await?;
        debug!(candidates = confidences.len(), "Classifier returned candidates");

        let decoded = confidences
            .into_iter()
            .map(|Confidence { label, confidence }| {
                parse_label(&label).map(|decoded| (decoded, confidence))
            })
            .collect::<Result<Vec<_>, _>>()?;

        try_join_all(
            decoded
                .into_iter()
                .map(|(label, confidence)| self.enrich(label, confidence)),
        )
        .await
    }

    async fn enrich(
        &self,
        label: DecodedLabel,
        confidence: f64,
    ) -> Result<ClassificationResult, FinderError> {
        let display_name = match label.source {
            EmoteSource::TwitchGlobal => TWITCH_DISPLAY_NAME.to_string(),
            EmoteSource::Bttv => {
                self.metadata
                    .resolve(&label.id)
                    .await
                    .map_err(|source| FinderError::Metadata {
                        id: label.id.clone(),
                        source,
                    })?
            }
        };

        Ok(ClassificationResult::new(label, display_name, confidence))
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn metadata(&self) -> &MetadataCache<M> {
        &self.metadata
    }
}
