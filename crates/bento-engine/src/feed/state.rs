use crate::feed::{FeedError, FeedSource, feed_url, parse_feed, relay_url};
use crate::models::{Block, BlockType, VideoDescriptor};

/// The block fields that decide what a tile should be showing
#[derive(Debug, Clone, PartialEq)]
struct EnrichmentTarget {
    kind: BlockType,
    channel_id: Option<String>,
    cached: Option<Vec<VideoDescriptor>>,
}

impl EnrichmentTarget {
    fn of(block: &Block) -> Self {
        Self {
            kind: block.kind,
            channel_id: block.channel_id.clone(),
            cached: block.youtube_videos.clone(),
        }
    }
}

/// Permission to apply one fetch result.
///
/// A ticket goes stale as soon as its [`FeedState`] moves to another
/// target or is cancelled; stale results are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    channel_id: String,
}

impl FetchTicket {
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-tile feed enrichment state.
///
/// Cancellation is soft: in-flight requests are never aborted, their results
/// are just refused once the generation has moved on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    generation: u64,
    target: Option<EnrichmentTarget>,
    videos: Vec<VideoDescriptor>,
    loading: bool,
}

impl FeedState {
    /// Fresh state already synced to `block`, plus the fetch to run, if any
    pub fn for_block(block: &Block) -> (Self, Option<FetchTicket>) {
        let mut state = Self::default();
        let ticket = state.sync(block);
        (state, ticket)
    }

    /// Follow the block's current enrichment target.
    ///
    /// Returns a ticket when a live fetch should start. Blocks with a
    /// non-empty video cache, no channel, or a non-SOCIAL type mirror their
    /// cache instead. Calling this again with an unchanged target is a no-op.
    pub fn sync(&mut self, block: &Block) -> Option<FetchTicket> {
        let target = EnrichmentTarget::of(block);
        if self.target.as_ref() == Some(&target) {
            return None;
        }

        self.generation += 1;
        self.target = Some(target);

        match block.channel() {
            Some(channel_id) if block.kind == BlockType::Social && block.cached_videos().is_none() => {
                self.loading = true;
                log::debug!("Fetching feed for channel {channel_id}");
                Some(FetchTicket {
                    generation: self.generation,
                    channel_id: channel_id.to_string(),
                })
            }
            _ => {
                self.videos = block.youtube_videos.clone().unwrap_or_default();
                self.loading = false;
                None
            }
        }
    }

    /// Apply a finished fetch.
    ///
    /// Returns `false` when the ticket is stale, in which case nothing
    /// changes. Failures are logged and leave the current list in place; an
    /// empty result is treated the same way.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<VideoDescriptor>, FeedError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale feed result for channel {}",
                ticket.channel_id
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(videos) if !videos.is_empty() => self.videos = videos,
            Ok(_) => log::debug!("Feed for channel {} had no entries", ticket.channel_id),
            Err(e) => log::warn!("Auto-fetch warning for channel {}: {e}", ticket.channel_id),
        }
        true
    }

    /// Invalidate any outstanding ticket (the tile went away)
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.target = None;
        self.loading = false;
    }

    pub fn videos(&self) -> &[VideoDescriptor] {
        &self.videos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Fetch and parse the feed a ticket refers to, through `relay`
pub async fn fetch_videos<S: FeedSource>(
    source: &S,
    relay: &str,
    ticket: &FetchTicket,
) -> Result<Vec<VideoDescriptor>, FeedError> {
    let url = relay_url(relay, &feed_url(ticket.channel_id()));
    let body = source.fetch_text(&url).await?;
    parse_feed(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DEFAULT_RELAY;
    use crate::tests::{MockFeedSource, channel_feed, feed_block, video};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_without_cache_fetches() {
        let block = feed_block("UC1");

        let (state, ticket) = FeedState::for_block(&block);

        let ticket = ticket.expect("fetch should start");
        assert_eq!(ticket.channel_id(), "UC1");
        assert!(state.is_loading());
        assert!(state.videos().is_empty());
    }

    #[test]
    fn test_cached_videos_are_mirrored() {
        let mut block = feed_block("UC1");
        block.youtube_videos = Some(vec![video("cached")]);

        let (state, ticket) = FeedState::for_block(&block);

        assert!(ticket.is_none());
        assert!(!state.is_loading());
        assert_eq!(state.videos(), &[video("cached")]);
    }

    #[test]
    fn test_non_social_blocks_never_fetch() {
        let mut block = feed_block("UC1");
        block.kind = BlockType::Link;

        let (_, ticket) = FeedState::for_block(&block);

        assert!(ticket.is_none());
    }

    #[test]
    fn test_unchanged_target_does_not_refetch() {
        let block = feed_block("UC1");
        let (mut state, _) = FeedState::for_block(&block);

        let mut retitled = block.clone();
        retitled.title = "Renamed".to_string();

        assert!(state.sync(&retitled).is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_fetch_from_six_entry_feed_yields_four() {
        let block = feed_block("UC1");
        let (mut state, ticket) = FeedState::for_block(&block);
        let ticket = ticket.unwrap();
        let source = MockFeedSource::ok(channel_feed(6));

        let result = block_on(fetch_videos(&source, DEFAULT_RELAY, &ticket));
        assert!(state.complete(&ticket, result));

        assert!(!state.is_loading());
        assert_eq!(state.videos().len(), 4);
        assert_eq!(state.videos()[3].id, "vid3");
        assert_eq!(
            source.requested(),
            vec![
                "https://api.allorigins.win/raw?url=https%3A%2F%2Fwww.youtube.com%2Ffeeds%2Fvideos.xml%3Fchannel_id%3DUC1"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_failure_keeps_current_list() {
        let block = feed_block("UC1");
        let (mut state, ticket) = FeedState::for_block(&block);
        let first = ticket.unwrap();
        state.complete(&first, Ok(vec![video("a"), video("b")]));

        // Channel changes, the new fetch fails
        let second = state.sync(&feed_block("UC2")).unwrap();
        let source = MockFeedSource::failing(503);
        let result = block_on(fetch_videos(&source, DEFAULT_RELAY, &second));
        assert!(result.is_err());
        assert!(state.complete(&second, result));

        assert!(!state.is_loading());
        assert_eq!(state.videos(), &[video("a"), video("b")]);
    }

    #[test]
    fn test_malformed_body_keeps_current_list() {
        let block = feed_block("UC1");
        let (mut state, ticket) = FeedState::for_block(&block);
        let ticket = ticket.unwrap();
        let source = MockFeedSource::ok("<html><body>oops</html>".to_string());

        let result = block_on(fetch_videos(&source, DEFAULT_RELAY, &ticket));
        state.complete(&ticket, result);

        assert!(state.videos().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_result_for_previous_channel_is_dropped() {
        let (mut state, ticket) = FeedState::for_block(&feed_block("UC1"));
        let stale = ticket.unwrap();
        let current = state.sync(&feed_block("UC2")).unwrap();

        assert!(!state.complete(&stale, Ok(vec![video("old")])));
        assert!(state.is_loading());
        assert!(state.videos().is_empty());

        assert!(state.complete(&current, Ok(vec![video("new")])));
        assert_eq!(state.videos(), &[video("new")]);
    }

    #[test]
    fn test_result_after_cancel_is_dropped() {
        let (mut state, ticket) = FeedState::for_block(&feed_block("UC1"));
        let ticket = ticket.unwrap();

        state.cancel();

        assert!(!state.complete(&ticket, Ok(vec![video("late")])));
        assert!(state.videos().is_empty());
    }

    #[test]
    fn test_cache_arriving_mid_flight_wins() {
        let block = feed_block("UC1");
        let (mut state, ticket) = FeedState::for_block(&block);
        let ticket = ticket.unwrap();

        let mut cached = block.clone();
        cached.youtube_videos = Some(vec![video("saved")]);
        assert!(state.sync(&cached).is_none());

        assert!(!state.complete(&ticket, Ok(vec![video("fetched")])));
        assert_eq!(state.videos(), &[video("saved")]);
    }
}
