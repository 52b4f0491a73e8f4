//! URL templates for the video feed, thumbnails and map embeds.

/// Channel feed endpoint; the channel id is appended verbatim
pub const FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml?channel_id=";
/// Cross-origin relay prefix; the encoded target URL is appended
pub const DEFAULT_RELAY: &str = "https://api.allorigins.win/raw?url=";
pub const DEFAULT_MAP_QUERY: &str = "Paris";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailSize {
    /// Used in feed grids and lists
    Medium,
    /// Used as a full-bleed single video background
    MaxRes,
}

pub fn feed_url(channel_id: &str) -> String {
    format!("{FEED_BASE}{channel_id}")
}

pub fn relay_url(relay: &str, target: &str) -> String {
    format!("{relay}{}", encode_uri_component(target))
}

pub fn thumbnail_url(video_id: &str, size: ThumbnailSize) -> String {
    let file = match size {
        ThumbnailSize::Medium => "mqdefault.jpg",
        ThumbnailSize::MaxRes => "maxresdefault.jpg",
    };
    format!("https://img.youtube.com/vi/{video_id}/{file}")
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Embeddable map for a free-text location; empty queries show Paris
pub fn map_embed_url(query: &str) -> String {
    let query = if query.is_empty() {
        DEFAULT_MAP_QUERY
    } else {
        query
    };
    format!(
        "https://maps.google.com/maps?q={}&t=&z=13&ie=UTF8&iwloc=&output=embed",
        encode_uri_component(query)
    )
}

/// Percent-encode like the browser's `encodeURIComponent`, which leaves
/// `!'()*` alone on top of the RFC 3986 unreserved set.
fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
