use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque, page-unique block identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Block type, fixed for the lifetime of a block instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Link,
    Text,
    Media,
    Map,
    Social,
    SocialIcon,
    Spacer,
    Youtube,
}

/// Multi-video layout requested for a YouTube feed block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YoutubeMode {
    Grid,
    List,
}

/// One video of a channel feed, either cached on the block or fetched live
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
}

/// A single tile of a bento page.
///
/// Owned by the host collection. The engine treats it as read-only input and
/// only ever proposes modified copies (see [`Block::with_title`] and
/// [`Block::with_subtext`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtext: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_span", deserialize_with = "deserialize_span")]
    pub col_span: u32,
    #[serde(default = "default_span", deserialize_with = "deserialize_span")]
    pub row_span: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_videos: Option<Vec<VideoDescriptor>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_mode"
    )]
    pub youtube_mode: Option<YoutubeMode>,
}

impl Block {
    /// A 1x1 block with no optional fields set
    pub fn new(id: impl Into<String>, kind: BlockType) -> Self {
        Self {
            id: BlockId::new(id),
            kind,
            title: String::new(),
            subtext: String::new(),
            content: String::new(),
            image_url: None,
            col_span: 1,
            row_span: 1,
            grid_column: None,
            grid_row: None,
            z_index: None,
            color: None,
            text_color: None,
            custom_background: None,
            social_platform: None,
            social_handle: None,
            channel_id: None,
            channel_title: None,
            youtube_video_id: None,
            youtube_videos: None,
            youtube_mode: None,
        }
    }

    /// Proposed copy carrying a new title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Proposed copy carrying a new subtext
    pub fn with_subtext(&self, subtext: impl Into<String>) -> Self {
        Self {
            subtext: subtext.into(),
            ..self.clone()
        }
    }

    /// Non-empty channel id, if any
    pub fn channel(&self) -> Option<&str> {
        non_empty(self.channel_id.as_deref())
    }

    /// Non-empty cached video list, if any
    pub fn cached_videos(&self) -> Option<&[VideoDescriptor]> {
        self.youtube_videos
            .as_deref()
            .filter(|videos| !videos.is_empty())
    }

    /// Non-empty image url, if any
    pub fn image(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref())
    }

    /// Grid cells covered when both start coordinates are set.
    ///
    /// Returns the half-open column and row ranges of the occupied rectangle.
    pub fn occupied_cells(&self) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
        let column = self.grid_column?;
        let row = self.grid_row?;
        Some((
            column..column.saturating_add(self.col_span),
            row..row.saturating_add(self.row_span),
        ))
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn default_span() -> u32 {
    1
}

fn deserialize_span<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let span = u32::deserialize(deserializer)?;
    Ok(span.max(1))
}

// Older pages store arbitrary strings here; anything unknown means "single video".
fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<YoutubeMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("grid") => Some(YoutubeMode::Grid),
        Some("list") => Some(YoutubeMode::List),
        _ => None,
    })
}
