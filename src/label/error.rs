use thiserror::Error;

/// Reasons a raw classifier label could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The label did not split into exactly `source`, `name` and `id`.
    #[error("label '{label}' has {found} fields, expected 3")]
    FieldCount { label: String, found: usize },

    /// One of the three fields was empty.
    #[error("label '{label}' has an empty {field} field")]
    EmptyField { label: String, field: &'static str },

    /// The source tag is neither `twitch-global` nor `bttv`.
    #[error("label '{label}' has unknown source '{source_tag}'")]
    UnknownSource { label: String, source_tag: String },
}
