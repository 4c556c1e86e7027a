//! HTML scraping for the twitchemotes.com emote grid.
//!
//! Each emote renders as
//! `<a class="emote-name" href="/global/emotes/25"><img src=".../1.0"></a> Kappa`,
//! i.e. the display name is the text node right after the anchor.

use std::sync::LazyLock;

use regex::Regex;

use super::error::CatalogError;
use super::{CatalogEntry, EmoteCatalog};

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s([^>]*)>(.*?)</a>([^<]*)"#).expect("anchor pattern is valid")
});
static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*["']([^"']*)["']"#).expect("class pattern is valid")
});
static HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*["']([^"']*)["']"#).expect("href pattern is valid")
});
static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img\s[^>]*?\bsrc\s*=\s*["']([^"']*)["']"#).expect("img pattern is valid")
});

const EMOTE_NAME_CLASS: &str = "emote-name";

struct ScrapedEmote {
    order: u64,
    name: String,
    entry: CatalogEntry,
}

/// Extracts every `.emote-name` anchor from `html`.
///
/// Links are resolved against `page_url`. Emotes are visited in ascending numeric id
/// (trailing path segment of `href`, unparsable = 0) and the first occurrence of a name
/// wins, so duplicates resolve to the oldest emote.
pub fn parse_catalog(html: &str, page_url: &str) -> Result<EmoteCatalog, CatalogError> {
    let base = url::Url::parse(page_url).map_err(|e| CatalogError::InvalidUrl {
        url: page_url.to_string(),
        source: e,
    })?;

    let mut scraped: Vec<ScrapedEmote> = ANCHOR
        .captures_iter(html)
        .filter_map(|caps| {
            let attrs = caps.get(1)?.as_str();
            let is_emote = CLASS_ATTR
                .captures(attrs)
                .and_then(|c| c.get(1))
                .is_some_and(|classes| {
                    classes
                        .as_str()
                        .split_whitespace()
                        .any(|c| c == EMOTE_NAME_CLASS)
                });
            if !is_emote {
                return None;
            }

            let href = HREF_ATTR.captures(attrs)?.get(1)?.as_str();
            let name = unescape_html(caps.get(3)?.as_str().trim());
            if name.is_empty() {
                return None;
            }

            let image_link = IMG_SRC
                .captures(caps.get(2)?.as_str())
                .and_then(|c| c.get(1))
                .map(|src| src.as_str().replacen("1.0", "3.0", 1))
                .unwrap_or_default();
            let link = base
                .join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string());

            Some(ScrapedEmote {
                order: trailing_id(href),
                name,
                entry: CatalogEntry { image_link, link },
            })
        })
        .collect();

    scraped.sort_by_key(|e| e.order);

    let mut catalog = EmoteCatalog::new();
    for emote in scraped {
        catalog.insert_if_absent(emote.name, emote.entry);
    }
    Ok(catalog)
}

fn trailing_id(href: &str) -> u64 {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Decodes the handful of entities twitchemotes.com emits. `&amp;` goes last so
/// `&amp;lt;` becomes `&lt;`, not `<`.
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
