use serde::{Deserialize, Serialize};

use crate::label::{DecodedLabel, EmoteSource};

/// One candidate emote as returned to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub source: EmoteSource,
    pub emote_name: String,
    pub id: String,
    pub emote_page_url: String,
    pub emote_image_url: String,
    pub user: EmoteUser,
    /// Passed through from the classifier, never renormalized.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmoteUser {
    pub display_name: String,
}

impl ClassificationResult {
    pub fn new(label: DecodedLabel, display_name: String, confidence: f64) -> Self {
        Self {
            source: label.source,
            emote_page_url: label.page_url(),
            emote_image_url: label.image_url(),
            emote_name: label.name,
            id: label.id,
            user: EmoteUser { display_name },
            confidence,
        }
    }
}
