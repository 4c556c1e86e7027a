//! Raw classifier label decoding and emote link construction.
//!
//! The classifier emits labels shaped `"<source>__<name>__<id>"`. Decoding is pure:
//! the same label always yields the same [`DecodedLabel`] and the same links.

pub mod error;


pub use error::LabelError;

use serde::{Deserialize, Serialize};

use crate::constants::LABEL_DELIMITER;

/// Platform an emote comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmoteSource {
    #[serde(rename = "twitch-global")]
    TwitchGlobal,
    #[serde(rename = "bttv")]
    Bttv,
}

impl EmoteSource {
    /// Returns the tag used in raw labels and JSON responses.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            EmoteSource::TwitchGlobal => "twitch-global",
            EmoteSource::Bttv => "bttv",
        }
    }

    /// Parses a label source tag. Matching is exact (case-sensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "twitch-global" => Some(EmoteSource::TwitchGlobal),
            "bttv" => Some(EmoteSource::Bttv),
            _ => None,
        }
    }

    /// Emote detail page for `id`.
    pub fn page_url(&self, id: &str) -> String {
        match self {
            EmoteSource::TwitchGlobal => format!("https://twitchemotes.com/global/emotes/{id}"),
            EmoteSource::Bttv => format!("https://betterttv.com/emotes/{id}"),
        }
    }

    /// Largest static image for `id`.
    pub fn image_url(&self, id: &str) -> String {
        match self {
            EmoteSource::TwitchGlobal => {
                format!("https://static-cdn.jtvnw.net/emoticons/v2/{id}/static/light/3.0")
            }
            EmoteSource::Bttv => format!("https://cdn.betterttv.net/emote/{id}/3x.webp"),
        }
    }
}

impl std::fmt::Display for EmoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label split into its three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedLabel {
    pub source: EmoteSource,
    pub name: String,
    pub id: String,
}

impl DecodedLabel {
    #[inline]
    pub fn page_url(&self) -> String {
        self.source.page_url(&self.id)
    }

    #[inline]
    pub fn image_url(&self) -> String {
        self.source.image_url(&self.id)
    }
}

/// Decodes `"<source>__<name>__<id>"`.
///
/// Fails on anything other than exactly three non-empty fields, and on sources other
/// than `twitch-global` and `bttv`.
pub fn parse_label(label: &str) -> Result<DecodedLabel, LabelError> {
    let fields: Vec<&str> = label.split(LABEL_DELIMITER).collect();

    let [source, name, id] = fields.as_slice() else {
        return Err(LabelError::FieldCount {
            label: label.to_string(),
            found: fields.len(),
        });
    };

    for (field, value) in [("source", source), ("name", name), ("id", id)] {
        if value.is_empty() {
            return Err(LabelError::EmptyField {
                label: label.to_string(),
                field,
            });
        }
    }

    let source = EmoteSource::from_tag(source).ok_or_else(|| LabelError::UnknownSource {
        label: label.to_string(),
        source_tag: source.to_string(),
    })?;

    Ok(DecodedLabel {
        source,
        name: name.to_string(),
        id: id.to_string(),
    })
}
