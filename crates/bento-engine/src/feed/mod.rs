//! Live feed enrichment for SOCIAL blocks that point at a video channel.

pub mod error;
pub mod parse;
pub mod source;
pub mod state;
pub mod urls;

pub use error::FeedError;
pub use parse::{MAX_FEED_ENTRIES, parse_feed};
pub use source::{FeedSource, HttpFeedSource};
pub use state::{FeedState, FetchTicket, fetch_videos};
pub use urls::{
    DEFAULT_RELAY, ThumbnailSize, feed_url, map_embed_url, relay_url, thumbnail_url,
    watch_url,
};
