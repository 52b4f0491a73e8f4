//! Icon selection, including the fallback chain for older saved SOCIAL blocks.

use crate::models::{Block, BlockType};
use crate::platforms::PlatformResolver;

/// Neutral icon colour used when nothing else applies
pub const NEUTRAL_ICON_COLOR: &str = "#374151";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockIcon {
    Youtube,
    /// Icon supplied by the platform resolver
    Platform { key: String, icon: String },
    Twitter,
    Github,
    Linkedin,
    Instagram,
    Link,
    MapPin,
    Image,
    Text,
    Spacer,
}

impl BlockIcon {
    /// Glyph name understood by the front ends
    pub fn glyph(&self) -> &str {
        match self {
            BlockIcon::Youtube => "youtube",
            BlockIcon::Platform { icon, .. } => icon,
            BlockIcon::Twitter => "twitter",
            BlockIcon::Github => "github",
            BlockIcon::Linkedin => "linkedin",
            BlockIcon::Instagram => "instagram",
            BlockIcon::Link => "link",
            BlockIcon::MapPin => "map-pin",
            BlockIcon::Image => "image",
            BlockIcon::Text => "type",
            BlockIcon::Spacer => "move-vertical",
        }
    }
}

/// Icon representing a block of any type
pub fn block_icon(block: &Block, platforms: &dyn PlatformResolver) -> BlockIcon {
    match block.kind {
        BlockType::Social => social_icon(block, platforms),
        BlockType::Map => BlockIcon::MapPin,
        BlockType::Media => BlockIcon::Image,
        BlockType::Text => BlockIcon::Text,
        BlockType::Spacer => BlockIcon::Spacer,
        BlockType::Link | BlockType::SocialIcon | BlockType::Youtube => BlockIcon::Link,
    }
}

/// Icon for a SOCIAL block.
///
/// The order matters for pages saved before `socialPlatform` existed:
/// video channel first, then the resolver, then URL substrings, then a
/// plain link.
pub fn social_icon(block: &Block, platforms: &dyn PlatformResolver) -> BlockIcon {
    let content = block.content.as_str();

    if block.channel().is_some()
        || block.title.to_lowercase().contains("youtube")
        || content.contains("youtube")
        || content.contains("youtu.be")
    {
        return BlockIcon::Youtube;
    }

    let key = match block.social_platform.as_deref() {
        Some(key) => Some(key.to_string()),
        None => platforms.infer_from_url(content),
    };
    if let Some(option) = key.and_then(|key| platforms.option(&key)) {
        return BlockIcon::Platform {
            key: option.key,
            icon: option.icon,
        };
    }

    if content.contains("twitter") || content.contains("x.com") {
        BlockIcon::Twitter
    } else if content.contains("github") {
        BlockIcon::Github
    } else if content.contains("linkedin") {
        BlockIcon::Linkedin
    } else if content.contains("instagram") {
        BlockIcon::Instagram
    } else {
        BlockIcon::Link
    }
}

/// Explicit colour for a SOCIAL_ICON glyph.
///
/// Brand colour unless the block asks for a specific text colour; only
/// `text-black` and `text-gray-700` are mapped, anything else inherits.
pub fn icon_tint(text_color: Option<&str>, brand_color: Option<&str>) -> Option<String> {
    match text_color {
        None | Some("") | Some("text-brand") => brand_color.map(str::to_string),
        Some("text-black") => Some("#000000".to_string()),
        Some("text-gray-700") => Some(NEUTRAL_ICON_COLOR.to_string()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::{BuiltinPlatforms, NoPlatforms};
    use rstest::rstest;

    fn social(content: &str) -> Block {
        let mut block = Block::new("s", BlockType::Social);
        block.content = content.to_string();
        block
    }

    #[rstest]
    #[case("https://twitter.com/x", BlockIcon::Twitter)]
    #[case("https://x.com/someone", BlockIcon::Twitter)]
    #[case("https://github.com/octocat", BlockIcon::Github)]
    #[case("https://linkedin.com/in/me", BlockIcon::Linkedin)]
    #[case("https://instagram.com/me", BlockIcon::Instagram)]
    #[case("https://example.com", BlockIcon::Link)]
    #[case("", BlockIcon::Link)]
    fn test_legacy_substring_fallbacks(#[case] content: &str, #[case] expected: BlockIcon) {
        assert_eq!(social_icon(&social(content), &NoPlatforms), expected);
    }

    #[test]
    fn test_twitter_substring_precedes_github() {
        let block = social("https://twitter.com/github");
        assert_eq!(social_icon(&block, &NoPlatforms), BlockIcon::Twitter);
    }

    #[test]
    fn test_video_markers_win_over_everything() {
        let mut block = social("https://github.com/octocat");
        block.channel_id = Some("UC1".to_string());
        assert_eq!(social_icon(&block, &BuiltinPlatforms), BlockIcon::Youtube);

        let mut titled = social("https://github.com/octocat");
        titled.title = "My YouTube".to_string();
        assert_eq!(social_icon(&titled, &BuiltinPlatforms), BlockIcon::Youtube);

        assert_eq!(
            social_icon(&social("https://youtu.be/abc"), &NoPlatforms),
            BlockIcon::Youtube
        );
    }

    #[test]
    fn test_explicit_platform_beats_substrings() {
        let mut block = social("https://github.com/octocat");
        block.social_platform = Some("instagram".to_string());

        assert_eq!(
            social_icon(&block, &BuiltinPlatforms),
            BlockIcon::Platform {
                key: "instagram".to_string(),
                icon: "instagram".to_string(),
            }
        );
    }

    #[test]
    fn test_inferred_platform() {
        let icon = social_icon(&social("https://twitter.com/x"), &BuiltinPlatforms);
        assert_eq!(icon.glyph(), "twitter");
        assert!(matches!(icon, BlockIcon::Platform { ref key, .. } if key == "x"));
    }

    #[test]
    fn test_unknown_explicit_platform_falls_through() {
        let mut block = social("https://linkedin.com/in/me");
        block.social_platform = Some("myspace".to_string());
        assert_eq!(social_icon(&block, &BuiltinPlatforms), BlockIcon::Linkedin);
    }

    #[rstest]
    #[case(None, Some("#E4405F"))]
    #[case(Some("text-brand"), Some("#E4405F"))]
    #[case(Some("text-black"), Some("#000000"))]
    #[case(Some("text-gray-700"), Some("#374151"))]
    #[case(Some("text-white"), None)]
    fn test_icon_tint(#[case] text_color: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            icon_tint(text_color, Some("#E4405F")).as_deref(),
            expected
        );
    }

    #[test]
    fn test_type_icons() {
        assert_eq!(
            block_icon(&Block::new("m", BlockType::Map), &NoPlatforms),
            BlockIcon::MapPin
        );
        assert_eq!(
            block_icon(&Block::new("t", BlockType::Text), &NoPlatforms).glyph(),
            "type"
        );
    }
}
