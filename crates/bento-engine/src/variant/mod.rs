//! Content variant resolution.
//!
//! Every block renders as exactly one [`RenderVariant`]. [`resolve`] picks it
//! with a fixed precedence so the choice can be tested without a UI.

pub mod feed_layout;
pub mod icon;
pub mod surface;

pub use feed_layout::{FeedArrangement, FeedLayout};
pub use icon::{BlockIcon, NEUTRAL_ICON_COLOR, block_icon, icon_tint, social_icon};
pub use surface::{Background, Surface};

use crate::feed::{FeedState, ThumbnailSize, map_embed_url, thumbnail_url};
use crate::layout::{GridPlacement, SizeTier, classify};
use crate::models::block::non_empty;
use crate::models::{Block, BlockType, VideoDescriptor, YoutubeMode};
use crate::platforms::PlatformResolver;
use regex::Regex;
use std::sync::LazyLock;

static VIDEO_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(mp4|webm|ogg|mov)$").expect("video extension pattern is valid")
});

/// The visual template chosen for a block
#[derive(Debug, Clone, PartialEq)]
pub enum RenderVariant {
    Spacer,
    SocialIcon(SocialIconView),
    YoutubeFeed(FeedView),
    YoutubeSingle(SingleVideoView),
    Media(MediaView),
    Map(MapView),
    Standard(StandardView),
}

impl RenderVariant {
    pub fn name(&self) -> &'static str {
        match self {
            RenderVariant::Spacer => "spacer",
            RenderVariant::SocialIcon(_) => "social-icon",
            RenderVariant::YoutubeFeed(_) => "youtube-feed",
            RenderVariant::YoutubeSingle(_) => "youtube-single",
            RenderVariant::Media(_) => "media",
            RenderVariant::Map(_) => "map",
            RenderVariant::Standard(_) => "standard",
        }
    }
}

/// A platform glyph with its resolved colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub name: String,
    /// Brand logo rather than the generic platform icon
    pub brand: bool,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialIconView {
    pub label: Option<String>,
    /// Profile link; absent without a known platform and a handle
    pub url: Option<String>,
    pub glyph: Option<Glyph>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    pub mode: YoutubeMode,
    pub layout: FeedLayout,
    pub header: String,
    /// Videos to show, already cut down to the layout's thumbnail count
    pub videos: Vec<VideoDescriptor>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleVideoView {
    pub video_id: String,
    pub background_url: String,
    pub heading: String,
    pub subtext: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    /// Looping, muted, autoplaying video
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub subtext: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaView {
    pub source: String,
    pub kind: MediaKind,
    pub alt: String,
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapView {
    pub embed_url: String,
    pub caption: String,
}

/// Link, social and text tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardView {
    /// Only SOCIAL blocks show an icon
    pub icon: Option<BlockIcon>,
    /// Heading text; `None` renders the "Add title..." placeholder
    pub heading: Option<String>,
    /// The heading is the channel title, which inline editing does not touch
    pub heading_from_channel: bool,
    pub subtext: Option<String>,
    /// TEXT body copy
    pub body: Option<String>,
    /// TEXT blocks centre their copy and use the larger title size
    pub text_layout: bool,
    /// LINK with a background image: light text over a scrim
    pub over_image: bool,
    /// Icon sits on a translucent light chip
    pub light_icon: bool,
}

/// Everything a front end needs to draw one tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileDescriptor {
    pub variant: RenderVariant,
    pub tier: SizeTier,
    pub surface: Surface,
    pub placement: GridPlacement,
}

/// SOCIAL block acting as a video channel
pub fn is_youtube(block: &Block) -> bool {
    block.kind == BlockType::Social
        && (block.channel().is_some() || block.title.to_lowercase().contains("youtube"))
}

/// Video used for the single-video background, if any
pub fn active_video_id<'a>(block: &'a Block, feed: &'a FeedState) -> Option<&'a str> {
    non_empty(block.youtube_video_id.as_deref())
        .or_else(|| feed.videos().first().map(|v| v.id.as_str()))
        .filter(|id| !id.is_empty())
}

/// Pick the variant for `block`; first matching rule wins
pub fn resolve(block: &Block, feed: &FeedState, platforms: &dyn PlatformResolver) -> RenderVariant {
    match block.kind {
        BlockType::Spacer => return RenderVariant::Spacer,
        BlockType::SocialIcon => return RenderVariant::SocialIcon(social_icon_view(block, platforms)),
        _ => {}
    }

    if is_youtube(block) {
        match block.youtube_mode {
            Some(mode) => return RenderVariant::YoutubeFeed(feed_view(block, feed, mode)),
            None => {
                if let Some(video_id) = active_video_id(block, feed) {
                    return RenderVariant::YoutubeSingle(single_video_view(block, video_id));
                }
            }
        }
    }

    if block.kind == BlockType::Media
        && let Some(source) = block.image()
    {
        return RenderVariant::Media(media_view(block, source));
    }

    if block.kind == BlockType::Map {
        return RenderVariant::Map(MapView {
            embed_url: map_embed_url(&block.content),
            caption: block.title.clone(),
        });
    }

    RenderVariant::Standard(standard_view(block, platforms))
}

/// Resolve the variant together with tier, surface and placement
pub fn describe(block: &Block, feed: &FeedState, platforms: &dyn PlatformResolver) -> TileDescriptor {
    let variant = resolve(block, feed, platforms);
    let surface = Surface::for_tile(block, &variant);
    TileDescriptor {
        tier: classify(block.col_span, block.row_span),
        placement: GridPlacement::for_block(block),
        surface,
        variant,
    }
}

fn social_icon_view(block: &Block, platforms: &dyn PlatformResolver) -> SocialIconView {
    let option = block
        .social_platform
        .as_deref()
        .and_then(|key| platforms.option(key));
    let Some(option) = option else {
        return SocialIconView {
            label: None,
            url: None,
            glyph: None,
        };
    };

    let url = non_empty(block.social_handle.as_deref()).map(|handle| option.build_url(handle));
    let tint = icon_tint(block.text_color.as_deref(), option.brand_color.as_deref());
    let glyph = match option.brand_icon {
        Some(ref brand_icon) => Glyph {
            name: brand_icon.clone(),
            brand: true,
            color: tint,
        },
        None => Glyph {
            name: option.icon.clone(),
            brand: false,
            color: Some(tint.unwrap_or_else(|| NEUTRAL_ICON_COLOR.to_string())),
        },
    };

    SocialIconView {
        label: Some(option.label),
        url,
        glyph: Some(glyph),
    }
}

fn feed_view(block: &Block, feed: &FeedState, mode: YoutubeMode) -> FeedView {
    let layout = FeedLayout::for_spans(block.col_span, block.row_span);
    FeedView {
        mode,
        layout,
        header: non_empty(block.channel_title.as_deref())
            .unwrap_or("YouTube")
            .to_string(),
        videos: feed
            .videos()
            .iter()
            .take(layout.thumbnail_count())
            .cloned()
            .collect(),
        loading: feed.is_loading(),
    }
}

fn single_video_view(block: &Block, video_id: &str) -> SingleVideoView {
    SingleVideoView {
        video_id: video_id.to_string(),
        background_url: thumbnail_url(video_id, ThumbnailSize::MaxRes),
        heading: non_empty(block.channel_title.as_deref())
            .unwrap_or(&block.title)
            .to_string(),
        subtext: non_empty(Some(&block.subtext)).map(str::to_string),
    }
}

fn media_view(block: &Block, source: &str) -> MediaView {
    let kind = if VIDEO_SOURCE.is_match(source) {
        MediaKind::Video
    } else {
        MediaKind::Image
    };
    let overlay = (!block.title.is_empty()).then(|| Overlay {
        title: block.title.clone(),
        subtext: non_empty(Some(&block.subtext)).map(str::to_string),
    });
    MediaView {
        source: source.to_string(),
        kind,
        alt: block.title.clone(),
        overlay,
    }
}

fn standard_view(block: &Block, platforms: &dyn PlatformResolver) -> StandardView {
    let over_image = block.kind == BlockType::Link && block.image().is_some();
    let channel_title = non_empty(block.channel_title.as_deref());
    StandardView {
        icon: (block.kind == BlockType::Social).then(|| social_icon(block, platforms)),
        heading: channel_title
            .or(non_empty(Some(&block.title)))
            .map(str::to_string),
        heading_from_channel: channel_title.is_some(),
        subtext: non_empty(Some(&block.subtext)).map(str::to_string),
        body: (block.kind == BlockType::Text)
            .then(|| non_empty(Some(&block.content)).map(str::to_string))
            .flatten(),
        text_layout: block.kind == BlockType::Text,
        over_image,
        light_icon: over_image || block.text_color.as_deref() == Some("text-white"),
    }
}
