//! Cross-cutting, shared constants.
//!
//! Link templates live next to the label decoder; these are the values shared by the
//! library, the server and its tests.

/// Separator between the `source`, `name` and `id` fields of a raw classifier label.
pub const LABEL_DELIMITER: &str = "__";

/// Owner display name reported for every Twitch global emote.
pub const TWITCH_DISPLAY_NAME: &str = "Twitch";

pub const CLASSIFY_TOKEN_COOKIE: &str = "access-token";

pub const DEFAULT_METADATA_URL: &str = "https://api.betterttv.net/3/emotes";
pub const DEFAULT_CATALOG_SOURCE_URL: &str = "https://twitchemotes.com/";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub const EMOTES_STATUS_HEADER: &str = "X-Emotes-Status";
pub const EMOTES_STATUS_OK: &str = "ok";
pub const EMOTES_STATUS_ERROR: &str = "error";
pub const EMOTES_STATUS_READY: &str = "ready";
pub const EMOTES_STATUS_PENDING: &str = "pending";
